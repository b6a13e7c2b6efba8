//! similarscan CLI — budgeted crawler over the store's "more like this"
//! recommendation pages.
//!
//! Starts from one seed appid, walks the recommendation graph breadth-first
//! (or at random), and reports discovered games filtered by category.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
