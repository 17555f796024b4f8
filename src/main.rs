use std::io;
use std::process::ExitCode;

use catalog_dedup::{DedupConfig, OsUuidSource, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the audit trail; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_dedup=warn")),
        )
        .init();

    let config = DedupConfig::default();
    let mut stdout = io::stdout().lock();
    match run(&config, &mut OsUuidSource, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
