//! Standalone benchmark runner.
//!
//! Recreates `test.db` in the working directory, inserts ten million random
//! triples, rewrites `col1` for every row, and prints the timings.
//!
//! Usage:
//!   cargo run --release

use float_bench::config::BenchConfig;
use float_bench::pipeline;
use float_bench::report::print_summary;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::default();
    bench_core::initialize_logger(config.log_level, config.log_file.as_deref())?;

    log::info!("Starting SQLite bulk write benchmark");

    let report = pipeline::run(&config).inspect_err(|e| log::error!("Benchmark failed: {e:#}"))?;
    print_summary(&report);

    Ok(())
}
