use std::ops::AddAssign;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

pub mod aggregator;
pub mod loader;
pub mod partition;
pub mod text_stats;

/// Number of histogram buckets, one per ASCII letter `a..=z`
pub const LETTER_COUNT: usize = 26;

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Byte range {start}..{end} out of bounds for buffer of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("No input loaded")]
    NotLoaded,
}

/// Half-open span `[start, end)` of byte offsets assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        ByteRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if the range can be sliced out of a buffer of `len` bytes
    pub fn fits(&self, len: usize) -> bool {
        self.start <= self.end && self.end <= len
    }
}

impl From<ByteRange> for std::ops::Range<usize> {
    fn from(r: ByteRange) -> Self {
        r.start..r.end
    }
}

/// Letter histogram plus the running sum of byte square roots
///
/// Used both as a worker's partial result and as the final merged total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterStats {
    /// Index 0 is `a`, index 25 is `z`; upper and lower case share a bucket
    pub histogram: [u64; LETTER_COUNT],
    pub sqrt_sum: f64,
}

impl Default for LetterStats {
    fn default() -> Self {
        LetterStats {
            histogram: [0; LETTER_COUNT],
            sqrt_sum: 0.0,
        }
    }
}

impl LetterStats {
    /// Count for a single letter, case-insensitive. `None` for non-letters.
    pub fn count(&self, letter: char) -> Option<u64> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let idx = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
        Some(self.histogram[idx])
    }

    /// Iterate `(letter, count)` pairs in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.histogram
            .iter()
            .enumerate()
            .map(|(i, &n)| ((b'a' + i as u8) as char, n))
    }

    pub fn total_letters(&self) -> u64 {
        self.histogram.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.total_letters() == 0 && self.sqrt_sum == 0.0
    }
}

impl AddAssign<&LetterStats> for LetterStats {
    fn add_assign(&mut self, other: &LetterStats) {
        for (dst, src) in self.histogram.iter_mut().zip(other.histogram.iter()) {
            *dst += *src;
        }
        self.sqrt_sum += other.sqrt_sum;
    }
}

/// How worker partials reach the shared total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Every worker locks the total once and adds its partial in place
    #[default]
    Locked,
    /// Workers send partials over a channel to a single reducer
    Channel,
}

/// The one mutable value shared by all workers during a run
///
/// Starts at zero. Only [`AggregateTotal::merge`] mutates it; callers read it
/// through [`AggregateTotal::into_inner`] once every worker has joined.
#[derive(Debug, Default)]
pub struct AggregateTotal {
    inner: Mutex<LetterStats>,
}

impl AggregateTotal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a partial result into the total under the lock
    ///
    /// The guard is dropped on every exit path. A poisoned lock is taken over
    /// as-is: element-wise addition never leaves the total half-written.
    pub fn merge(&self, partial: &LetterStats) {
        let mut total = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *total += partial;
    }

    pub fn into_inner(self) -> LetterStats {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
