//! Splits `[0, length)` into one contiguous range per worker.

use std::num::NonZeroUsize;

use crate::processor::ByteRange;

/// Compute `worker_count` contiguous, non-overlapping ranges covering `[0, length)`
///
/// Every range gets `length / worker_count` bytes; the truncation remainder
/// goes to the last range. With more workers than bytes the leading ranges
/// are empty.
///
/// # Example
/// ```rust
/// # use std::num::NonZeroUsize;
/// # use letter_stats::processor::{ByteRange, partition::partition};
/// let ranges = partition(10, NonZeroUsize::new(3).unwrap());
/// assert_eq!(ranges, vec![ByteRange::new(0, 3), ByteRange::new(3, 6), ByteRange::new(6, 10)]);
/// ```
pub fn partition(length: usize, worker_count: NonZeroUsize) -> Vec<ByteRange> {
    let n = worker_count.get();
    let chunk_size = length / n;
    let mut ranges = Vec::with_capacity(n);

    for i in 0..n {
        let start = i * chunk_size;
        // Last chunk gets everything remaining
        let end = if i == n - 1 {
            length
        } else {
            (i + 1) * chunk_size
        };
        ranges.push(ByteRange { start, end });
    }

    ranges
}
