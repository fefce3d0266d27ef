//! Resdash CLI entry point.

use anyhow::Context;
use resdash_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Execute the command
    cli::execute(cli).await.context("resdash exited with an error")
}
