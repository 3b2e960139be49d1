use clap::Parser;
use jemallocator::Jemalloc;
use letter_stats::{Report, StatsError, TextStatsProcessor, config::Config};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
    let config = Config::parse();
    init_tracing(&config);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// stderr subscriber; span timings only with `--profile`
fn init_tracing(config: &Config) {
    use tracing_subscriber::fmt::{self, format::FmtSpan};

    let span_events = if config.profile {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level)
        .with_span_events(span_events)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .init();
}

fn run(config: &Config) -> Result<(), StatsError> {
    let workers = config.worker_count();

    let mut processor = TextStatsProcessor::new();
    processor.load_file(&config.path, config.load_mode())?;

    println!("File: {}", config.path.display());
    println!("Workers: {}", workers);

    let stats = processor.compute(workers, config.merge_strategy())?;
    println!("\n{}", Report(&stats));

    Ok(())
}
