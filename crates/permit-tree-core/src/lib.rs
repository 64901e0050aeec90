// crates/permit-tree-core/src/lib.rs

//! permit-tree-core
//! ================
//!
//! Turns a table of building permits into a `city -> zip code -> building
//! type` tree with summed construction costs, ready to be fed to sunburst or
//! treemap style charts.
//!
//! ```no_run
//! use permit_tree_core::{run, RunConfig};
//!
//! let json = run(&RunConfig::default())?;
//! println!("{json}");
//! # Ok::<(), permit_tree_core::PermitError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod writer;

// Re-exports
pub use crate::error::{PermitError, Result};
pub use aggregate::aggregate;
pub use common::TreeStats;
pub use loader::{load_from_reader, load_records, ColumnNames, DEFAULT_INPUT};
pub use model::convert::build_tree;
pub use model::{
    AggregatedRow, Amount, AmountParseError, BuildingTypeNode, CityNode, PermitRecord, PermitTree,
    ZipCode, ZipNode, NA_TOKENS, ROOT_LABEL,
};
pub use pipeline::{build_from_path, run, RunConfig};
pub use writer::{read_json, to_json_pretty, write_json, DEFAULT_OUTPUT};
