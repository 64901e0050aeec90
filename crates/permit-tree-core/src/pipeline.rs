// crates/permit-tree-core/src/pipeline.rs

//! Composes the stages: load -> aggregate -> build_tree -> serialize -> write.

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::loader::{self, ColumnNames, DEFAULT_INPUT};
use crate::model::convert::build_tree;
use crate::model::PermitTree;
use crate::writer::{self, DEFAULT_OUTPUT};
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: ColumnNames,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            columns: ColumnNames::default(),
        }
    }
}

/// Loads a CSV file and folds it into a tree, without writing anything.
pub fn build_from_path(path: impl AsRef<Path>, columns: &ColumnNames) -> Result<PermitTree> {
    let records = loader::load_records(path, columns)?;
    let rows = aggregate(&records);
    let tree = build_tree(rows);

    let stats = tree.stats();
    info!(
        zip_codes = stats.zip_codes,
        building_types = stats.building_types,
        "built permit tree"
    );
    Ok(tree)
}

/// Runs the whole pipeline and returns the JSON text that was written.
pub fn run(config: &RunConfig) -> Result<String> {
    let tree = build_from_path(&config.input, &config.columns)?;
    let text = writer::to_json_pretty(&tree)?;
    writer::write_json(&config.output, &text)?;
    Ok(text)
}
