//! # Configuration
//!
//! Command-line arguments for the `letter-stats` binary and the worker count
//! fallback.
//!
//! ```bash
//! letter-stats input.txt            # one worker per CPU
//! letter-stats input.txt 8          # eight workers
//! letter-stats input.txt 8 --strategy channel --load read --profile
//! ```

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Parser, ValueEnum};

use crate::processor::{MergeStrategy, loader::LoadMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Lock the shared total once per worker
    Locked,
    /// Send partials to a single reducer
    Channel,
}

impl From<StrategyArg> for MergeStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Locked => MergeStrategy::Locked,
            StrategyArg::Channel => MergeStrategy::Channel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoadArg {
    /// Memory-map the file
    Mmap,
    /// Read the whole file into memory
    Read,
}

impl From<LoadArg> for LoadMode {
    fn from(l: LoadArg) -> Self {
        match l {
            LoadArg::Mmap => LoadMode::Mmap,
            LoadArg::Read => LoadMode::Read,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "letter-stats",
    version,
    about = "Count letters and sum byte square roots of a file in parallel"
)]
pub struct Config {
    /// File to analyse
    pub path: PathBuf,

    /// Number of workers (default: number of CPUs; 0 is raised to 1)
    pub workers: Option<usize>,

    /// How worker partials are merged
    #[arg(long, value_enum, default_value_t = StrategyArg::Locked)]
    pub strategy: StrategyArg,

    /// How the file is brought into memory
    #[arg(long, value_enum, default_value_t = LoadArg::Mmap)]
    pub load: LoadArg,

    /// Maximum log level written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Emit span timings on close
    #[arg(long)]
    pub profile: bool,
}

impl Config {
    pub fn worker_count(&self) -> NonZeroUsize {
        resolve_worker_count(self.workers)
    }

    pub fn merge_strategy(&self) -> MergeStrategy {
        self.strategy.into()
    }

    pub fn load_mode(&self) -> LoadMode {
        self.load.into()
    }
}

/// Explicit count if given, otherwise one per CPU; never below 1
pub fn resolve_worker_count(requested: Option<usize>) -> NonZeroUsize {
    let n = requested.unwrap_or_else(num_cpus::get);
    NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)
}
