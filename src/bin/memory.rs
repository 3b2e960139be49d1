use std::path::Path;

use letter_stats::{LoadMode, MergeStrategy, TextStatsProcessor, config::resolve_worker_count};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/text_100m.txt".to_string());
    let mut processor = TextStatsProcessor::new();
    processor
        .load_file(Path::new(&path), LoadMode::Mmap)
        .unwrap();

    // Run aggregation
    let _res = processor
        .compute(resolve_worker_count(None), MergeStrategy::Locked)
        .unwrap();

    println!("Memory benchmark finished. See dhat-heap.json for details");
}
