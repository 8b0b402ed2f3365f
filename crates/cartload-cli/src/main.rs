//! Cartload CLI - synthesize and ingest a relational e-commerce dataset

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{generate, ingest};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Ingest(args) => ingest::execute(args, &cli.global).await,
        cli::Commands::Generate(args) => generate::execute(args, &cli.global).await,
    }
}
