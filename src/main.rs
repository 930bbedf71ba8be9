#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bench-delta")]
#[command(about = "Relative-delta reports for Google Benchmark result feeds", long_about = None)]
struct Cli {
    /// Candidate result feed (JSON); alone, its names embed both competitors
    candidate: std::path::PathBuf,

    /// Baseline result feed (JSON); enables the two-feed CSV report
    baseline: Option<std::path::PathBuf>,
}

fn init_tracing() {
    let env =
        std::env::var("BENCH_DELTA_LOG").unwrap_or_else(|_| "bench_delta=info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = bench_delta::compare_cmd::run(cli.candidate, cli.baseline) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
