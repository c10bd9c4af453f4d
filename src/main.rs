//! Run the matrix benchmark with the default configuration
//!
//! Prints the final diagonal sum, then the loop's wall-clock time in
//! seconds. Diagnostics go to stderr, filtered by `RUST_LOG`.

use mat_bench::{run, BenchConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::default();
    tracing::debug!(?config, "starting matrix benchmark");

    let report = run::<i64>(&config)?;

    println!("{}", report.result);
    println!("{}", report.elapsed_secs());
    Ok(())
}
