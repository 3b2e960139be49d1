use std::{num::NonZeroUsize, path::Path, time::Instant};

use tracing::info;

use crate::processor::{
    LetterStats, MergeStrategy, StatsError,
    aggregator::run_aggregation_with,
    loader::{InputBuffer, LoadMode},
    partition::partition,
};

/// Holds one input and computes its letter statistics in parallel
///
/// # Examples
///
/// ```rust
/// # use std::num::NonZeroUsize;
/// # use letter_stats::{MergeStrategy, TextStatsProcessor};
/// let processor = TextStatsProcessor::from_bytes(b"Hello".to_vec());
/// let stats = processor
///     .compute(NonZeroUsize::new(2).unwrap(), MergeStrategy::Locked)
///     .unwrap();
/// assert_eq!(stats.count('l'), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct TextStatsProcessor {
    input: Option<InputBuffer>,
}

impl TextStatsProcessor {
    /// Create an empty processor
    pub fn new() -> Self {
        TextStatsProcessor { input: None }
    }

    /// Wrap bytes that are already in memory
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        TextStatsProcessor {
            input: Some(InputBuffer::from(bytes)),
        }
    }

    /// Loads a file, replacing any previous input
    ///
    /// # Errors
    /// Returns [`StatsError::Io`] if the file cannot be opened or mapped.
    pub fn load_file(&mut self, path: &Path, mode: LoadMode) -> Result<usize, StatsError> {
        let buffer = InputBuffer::load(path, mode)?;
        let len = buffer.len();
        info!(path = %path.display(), bytes = len, mode = ?mode, "input loaded");
        self.input = Some(buffer);
        Ok(len)
    }

    pub fn bytes(&self) -> Result<&[u8], StatsError> {
        self.input.as_deref().ok_or(StatsError::NotLoaded)
    }

    pub fn len(&self) -> usize {
        self.input.as_deref().map_or(0, <[u8]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Partition the input across `workers` and aggregate it
    ///
    /// # Errors
    /// [`StatsError::NotLoaded`] if nothing was loaded, or
    /// [`StatsError::ThreadPool`] if the workers cannot be started.
    pub fn compute(
        &self,
        workers: NonZeroUsize,
        strategy: MergeStrategy,
    ) -> Result<LetterStats, StatsError> {
        let bytes = self.bytes()?;
        let started = Instant::now();

        let ranges = partition(bytes.len(), workers);
        let stats = run_aggregation_with(bytes, &ranges, strategy)?;

        info!(
            workers = workers.get(),
            bytes = bytes.len(),
            letters = stats.total_letters(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "aggregation finished"
        );
        Ok(stats)
    }
}
