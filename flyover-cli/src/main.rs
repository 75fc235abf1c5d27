//! Binary crate for the `flyover` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Log output setup
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cmd.log_level())
        .with_writer(std::io::stderr)
        .init();

    cmd.run().await
}
