use clap::{Parser, Subcommand};
use permit_tree_core::{ColumnNames, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// CLI arguments for permit-tree
#[derive(Debug, Parser)]
#[command(
    name = "permit-tree",
    version,
    about = "Group building permits by zip code and type into a hierarchical JSON tree"
)]
pub struct CliArgs {
    /// Path to the input CSV (or .csv.gz) file
    #[arg(short = 'i', long = "input", global = true, default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Header of the zip code column
    #[arg(long = "zip-column", global = true, default_value = "Zip Code")]
    pub zip_column: String,

    /// Header of the permit type column
    #[arg(long = "type-column", global = true, default_value = "Permit Type Description")]
    pub type_column: String,

    /// Header of the construction cost column
    #[arg(long = "cost-column", global = true, default_value = "Construction Cost")]
    pub cost_column: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the tree, write it to a file and print it
    Build {
        /// Where to write the JSON tree
        #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
        output: String,

        /// Do not echo the JSON to stdout
        #[arg(long = "no-echo")]
        no_echo: bool,
    },

    /// Show a summary of the grouped data
    Stats,

    /// Show the building types and totals of a single zip code
    Zip {
        /// Zip code as it appears in the input (e.g. 90210)
        code: String,
    },
}

impl CliArgs {
    pub fn columns(&self) -> ColumnNames {
        ColumnNames {
            zip_code: self.zip_column.clone(),
            permit_type: self.type_column.clone(),
            construction_cost: self.cost_column.clone(),
        }
    }
}
