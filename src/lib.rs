//! # letter-stats
//!
//! Splits a file's bytes across N workers and computes, in parallel:
//!
//! - a case-insensitive histogram of the letters `a..=z`
//! - the sum of `sqrt(byte)` over every byte
//!
//! # Features
//!
//! - **Fixed partitioning**: N contiguous ranges, remainder to the last one
//! - **Local accumulation**: each worker scans its range with no shared state
//! - **One merge per worker**: partials land in a mutex-guarded total, or go
//!   through a channel to a single reducer
//! - **Memory-mapped loading** (or whole-file read)
//! - **AVX2 square roots** when available, scalar fallback otherwise
//!
//! The histogram is exact for any worker count. The square-root sum depends on
//! merge order only in its last bits.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use letter_stats::{partition, run_aggregation};
//!
//! let input = b"AbC1d";
//! let ranges = partition(input.len(), NonZeroUsize::new(1).unwrap());
//! let total = run_aggregation(input, &ranges).unwrap();
//!
//! assert_eq!(total.count('a'), Some(1));
//! assert!((total.sqrt_sum - 43.147).abs() < 1e-3);
//! ```

pub mod config;
mod helpers;
pub mod processor;
pub mod report;

pub use processor::{
    AggregateTotal, ByteRange, LETTER_COUNT, LetterStats, MergeStrategy, StatsError,
    aggregator::{run_aggregation, run_aggregation_with, scan},
    loader::{InputBuffer, LoadMode},
    partition::partition,
    text_stats::TextStatsProcessor,
};
pub use report::Report;
