use std::num::NonZeroUsize;

use letter_stats::{
    AggregateTotal, ByteRange, LetterStats, MergeStrategy, partition, run_aggregation,
    run_aggregation_with, scan,
};
use proptest::prelude::*;

const CASES: u32 = 64;

fn sqrt_tolerance(len: usize) -> f64 {
    1e-9 * (len as f64 + 1.0) * 16.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(CASES))]

    #[test]
    fn prop_partition_covers_exactly_once(length in 0usize..5_000, n in 1usize..300) {
        let ranges = partition(length, NonZeroUsize::new(n).unwrap());
        prop_assert_eq!(ranges.len(), n);
        prop_assert_eq!(ranges[0].start, 0);
        prop_assert_eq!(ranges[n - 1].end, length);
        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
            prop_assert!(pair[0].start <= pair[0].end);
        }
        let covered: usize = ranges.iter().map(ByteRange::len).sum();
        prop_assert_eq!(covered, length);
    }

    #[test]
    fn prop_any_worker_count_matches_single_worker(
        input in proptest::collection::vec(any::<u8>(), 0..4_096),
        n in 1usize..32,
    ) {
        let baseline = run_aggregation(&input, &partition(input.len(), NonZeroUsize::MIN)).unwrap();
        let ranges = partition(input.len(), NonZeroUsize::new(n).unwrap());

        for strategy in [MergeStrategy::Locked, MergeStrategy::Channel] {
            let parallel = run_aggregation_with(&input, &ranges, strategy).unwrap();
            prop_assert_eq!(parallel.histogram, baseline.histogram);
            prop_assert!((parallel.sqrt_sum - baseline.sqrt_sum).abs() <= sqrt_tolerance(input.len()));
        }
    }

    #[test]
    fn prop_merge_order_does_not_matter(
        (input, order) in (proptest::collection::vec(any::<u8>(), 0..2_048), 1usize..64)
            .prop_flat_map(|(input, n)| {
                let order: Vec<usize> = (0..n).collect();
                (Just(input), Just(order).prop_shuffle())
            }),
    ) {
        let ranges = partition(input.len(), NonZeroUsize::new(order.len()).unwrap());
        let partials: Vec<LetterStats> = ranges.iter().map(|&r| scan(&input, r)).collect();

        let in_order = AggregateTotal::new();
        for p in &partials {
            in_order.merge(p);
        }
        let shuffled = AggregateTotal::new();
        for &i in &order {
            shuffled.merge(&partials[i]);
        }

        let a = in_order.into_inner();
        let b = shuffled.into_inner();
        prop_assert_eq!(a.histogram, b.histogram);
        prop_assert!((a.sqrt_sum - b.sqrt_sum).abs() <= sqrt_tolerance(input.len()));
    }

    #[test]
    fn prop_scan_is_idempotent(
        input in proptest::collection::vec(any::<u8>(), 0..1_024),
        a in 0usize..1_024,
        b in 0usize..1_024,
    ) {
        let (lo, hi) = (a.min(b).min(input.len()), a.max(b).min(input.len()));
        let range = ByteRange::new(lo, hi);
        prop_assert_eq!(scan(&input, range), scan(&input, range));
    }

    #[test]
    fn prop_histogram_counts_only_ascii_letters(input in proptest::collection::vec(any::<u8>(), 0..1_024)) {
        let stats = run_aggregation(&input, &partition(input.len(), NonZeroUsize::new(3).unwrap())).unwrap();
        let letters = input.iter().filter(|b| b.is_ascii_alphabetic()).count() as u64;
        prop_assert_eq!(stats.total_letters(), letters);
    }
}
