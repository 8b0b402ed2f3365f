//! Generate command implementation

use anyhow::{Context, Result};
use cartload_core::Config;
use cartload_engine::generator::{self, GeneratorConfig};
use std::path::{Path, PathBuf};

use crate::cli::{GenerateArgs, GlobalArgs};

/// Execute the generate command
pub async fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);

    let out_dir = match &args.out {
        Some(out) => PathBuf::from(out),
        None => {
            let config = Config::load_from_dir(project_dir)
                .context("Failed to load project configuration (or pass --out)")?;
            config.data_dir_absolute(project_dir)
        }
    };

    let config = GeneratorConfig {
        seed: args.seed,
        users: args.users,
        products: args.products,
        orders: args.orders,
        order_items: args.order_items,
    };

    if global.verbose {
        eprintln!(
            "[verbose] Generating dataset (seed {}) into {}",
            config.seed,
            out_dir.display()
        );
    }

    let summary =
        generator::generate(&out_dir, &config).context("Failed to generate dataset")?;

    for (file, rows) in &summary.files {
        println!("  ✓ {} ({} rows)", file, rows);
    }
    println!();
    println!(
        "Generated {} files in {}",
        summary.files.len(),
        out_dir.display()
    );
    Ok(())
}
