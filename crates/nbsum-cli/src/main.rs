//! nbsum CLI
//!
//! Writes and lists notebook summaries for the static site.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use nbsum_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.global.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    nbsum_cli::run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}
