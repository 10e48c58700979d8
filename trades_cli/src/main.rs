//! # Pipe Trades CLI
//!
//! Field calculator for pipefitting and rope-access crews:
//! GPS distance verification, Plus Code decoding, beam wrap and band
//! estimates, rolling offsets, and a few smaller fitting helpers.
//!
//! Set `RUST_LOG=debug` to see computed values on standard error.

mod app;
mod cli;
mod report;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let argv = app::lossy_argv(std::env::args_os());
    let stdout = io::stdout();
    let stderr = io::stderr();

    match app::execute(&argv, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(app::EXIT_FAILURE)
        }
    }
}
