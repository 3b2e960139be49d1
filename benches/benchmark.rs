use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jemallocator::Jemalloc;
use letter_stats::{ByteRange, MergeStrategy, TextStatsProcessor, scan};
use std::{hint::black_box, num::NonZeroUsize};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

const INPUT_LEN: usize = 16 * 1024 * 1024;

fn sample_input() -> Vec<u8> {
    b"The quick brown Fox jumps over the LAZY dog 0123456789!\n"
        .iter()
        .copied()
        .cycle()
        .take(INPUT_LEN)
        .collect()
}

fn bench_scan_and_aggregate(c: &mut Criterion) {
    let input = sample_input();

    let mut group = c.benchmark_group("LetterStats");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(INPUT_LEN as u64));

    group.bench_function("scan_single_range", |b| {
        let range = ByteRange::new(0, input.len());
        b.iter(|| black_box(scan(&input, range)));
    });

    let processor = TextStatsProcessor::from_bytes(input.clone());
    let workers = NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN);
    for strategy in [MergeStrategy::Locked, MergeStrategy::Channel] {
        group.bench_with_input(
            BenchmarkId::new("compute", format!("{:?}", strategy)),
            &strategy,
            |b, &strategy| {
                b.iter(|| black_box(processor.compute(workers, strategy).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scan_and_aggregate);
criterion_main!(benches);
