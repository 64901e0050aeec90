// crates/permit-tree-core/src/model/mod.rs
pub mod convert;
pub mod record;
pub mod tree;

pub use record::{AggregatedRow, Amount, AmountParseError, PermitRecord, ZipCode, NA_TOKENS};
pub use tree::{BuildingTypeNode, CityNode, PermitTree, ZipNode, ROOT_LABEL};
