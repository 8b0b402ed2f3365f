//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Cartload - synthesize an e-commerce CSV dataset and ingest it into DuckDB
#[derive(Parser, Debug)]
#[command(name = "cartload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override target database path
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the schema and load all CSV files into the store
    Ingest(IngestArgs),

    /// Generate the synthetic CSV dataset
    Generate(GenerateArgs),
}

/// Arguments for the ingest command
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Override the CSV data directory
    #[arg(short, long)]
    pub data_dir: Option<String>,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// RNG seed for reproducible output
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of users to generate
    #[arg(long, default_value_t = 100)]
    pub users: usize,

    /// Number of products to generate
    #[arg(long, default_value_t = 200)]
    pub products: usize,

    /// Number of orders to generate
    #[arg(long, default_value_t = 500)]
    pub orders: usize,

    /// Number of order items to generate
    #[arg(long, default_value_t = 1500)]
    pub order_items: usize,

    /// Override the output directory
    #[arg(short, long)]
    pub out: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;
