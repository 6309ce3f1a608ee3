use std::process::ExitCode;

use clap::Parser;
use colored::*;
use jsonmatch_cli::{exit_status, run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // RUST_LOG wins over the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jsonmatch_cli=info,jsonmatch_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    let result = run(&cli, &mut stdout);
    if let Err(e) = &result {
        tracing::error!(error = %e, "Comparison could not run");
        eprintln!("{} {:#}", "error:".red().bold(), e);
    }
    ExitCode::from(exit_status(&result))
}
