//! permit-tree — Command-line interface for permit-tree-core
//!
//! Reads a building-permit CSV, sums construction cost per zip code and
//! permit type, and emits the result as a `city -> zip -> type` JSON tree.
//!
//! Usage examples
//! --------------
//!
//! - Build `output.json` from `BuildPermit.csv` and print it
//!   $ permit-tree build
//!
//! - Custom input/output, no echo
//!   $ permit-tree --input permits.csv.gz build --output tree.json --no-echo
//!
//! - Show overall stats
//!   $ permit-tree stats
//!
//! - Show one zip code
//!   $ permit-tree zip 90210
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=permit_tree_core=debug`).
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use permit_tree_core::{build_from_path, run, RunConfig, ZipCode};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let columns = args.columns();

    match args.command {
        Commands::Build { output, no_echo } => {
            let config = RunConfig {
                input: PathBuf::from(&args.input),
                output: PathBuf::from(output),
                columns,
            };
            build(&config, no_echo, &mut io::stdout().lock())?;
        }

        Commands::Stats => {
            let tree = build_from_path(&args.input, &columns)?;
            let stats = tree.stats();
            println!("Permit tree statistics:");
            println!("  Zip codes: {}", stats.zip_codes);
            println!("  Building types: {}", stats.building_types);
            println!("  Total cost: {}", stats.total_cost);
        }

        Commands::Zip { code } => {
            let tree = build_from_path(&args.input, &columns)?;
            let zip: ZipCode = code.parse()?;
            match tree.find_zip(&zip) {
                Some(node) => {
                    println!("Zip code: {}", node.zip_code);
                    for leaf in &node.children {
                        println!("- {}: {}", leaf.building_type, leaf.value);
                    }
                    println!("Total: {}", node.total());
                }
                None => eprintln!("No permits found for zip code: {code}"),
            }
        }
    }

    Ok(())
}

/// Runs the pipeline and echoes the written JSON to `out` unless disabled.
fn build(config: &RunConfig, no_echo: bool, out: &mut impl Write) -> anyhow::Result<()> {
    debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        "building permit tree"
    );
    let json = run(config)?;
    if !no_echo {
        writeln!(out, "{json}")?;
    }
    Ok(())
}
