//! Parallel scan-then-merge over a shared byte buffer.
//!
//! Each worker owns one [`ByteRange`], accumulates a [`LetterStats`] locally
//! and touches shared state exactly once, when its partial is merged into the
//! [`AggregateTotal`]. Lock acquisitions therefore scale with the number of
//! workers, not with the input size.

use crossbeam_channel::bounded;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info_span};

use crate::{
    helpers::simd_helpers::scan_bytes,
    processor::{AggregateTotal, ByteRange, LetterStats, MergeStrategy, StatsError},
};

/// Local scan of one range. Pure; reads `buffer` and nothing else.
///
/// # Panics
/// If `range` does not fit inside `buffer`. [`run_aggregation`] checks this
/// up front and reports [`StatsError::RangeOutOfBounds`] instead.
pub fn scan(buffer: &[u8], range: ByteRange) -> LetterStats {
    scan_bytes(&buffer[range.start..range.end])
}

/// Run one worker per range with the default [`MergeStrategy::Locked`]
///
/// Blocks until every worker has merged, then returns the total.
///
/// # Example
/// ```rust
/// # use std::num::NonZeroUsize;
/// # use letter_stats::processor::{aggregator::run_aggregation, partition::partition};
/// let input = b"zz";
/// let ranges = partition(input.len(), NonZeroUsize::new(2).unwrap());
/// let total = run_aggregation(input, &ranges).unwrap();
/// assert_eq!(total.count('z'), Some(2));
/// ```
pub fn run_aggregation(buffer: &[u8], ranges: &[ByteRange]) -> Result<LetterStats, StatsError> {
    run_aggregation_with(buffer, ranges, MergeStrategy::Locked)
}

/// Run one worker per range, merging partials with the given strategy
pub fn run_aggregation_with(
    buffer: &[u8],
    ranges: &[ByteRange],
    strategy: MergeStrategy,
) -> Result<LetterStats, StatsError> {
    if let Some(bad) = ranges.iter().find(|r| !r.fits(buffer.len())) {
        return Err(StatsError::RangeOutOfBounds {
            start: bad.start,
            end: bad.end,
            len: buffer.len(),
        });
    }

    let span = info_span!(
        "aggregate",
        ranges = ranges.len(),
        bytes = buffer.len(),
        strategy = ?strategy
    );
    let _enter = span.enter();

    // One thread per worker; the pool is dropped (and joined) on return.
    let pool = ThreadPoolBuilder::new()
        .num_threads(ranges.len().max(1))
        .thread_name(|i| format!("letter-stats-worker-{}", i))
        .build()?;

    let total = AggregateTotal::new();

    match strategy {
        MergeStrategy::Locked => {
            pool.in_place_scope(|s| {
                for (worker, &range) in ranges.iter().enumerate() {
                    let total = &total;
                    s.spawn(move |_| {
                        let partial = scan(buffer, range);
                        total.merge(&partial);
                        debug!(worker, start = range.start, end = range.end, "partial merged");
                    });
                }
            });
        }
        MergeStrategy::Channel => {
            // Capacity covers every worker, so sends never block.
            let (tx, rx) = bounded::<LetterStats>(ranges.len().max(1));
            let folded = pool.in_place_scope(|s| {
                for (worker, &range) in ranges.iter().enumerate() {
                    let tx = tx.clone();
                    s.spawn(move |_| {
                        let partial = scan(buffer, range);
                        tx.send(partial)
                            .expect("reducer alive for the whole scope");
                        debug!(worker, start = range.start, end = range.end, "partial sent");
                    });
                }
                drop(tx);

                // The calling thread is the single reducer.
                let mut acc = LetterStats::default();
                for partial in rx.iter() {
                    acc += &partial;
                }
                acc
            });
            total.merge(&folded);
        }
    }

    Ok(total.into_inner())
}
