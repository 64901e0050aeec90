//! permit-tree-rs
//!
//! Workspace facade: re-exports [`permit_tree_core`] so the demos under
//! `demos/` can be run from the repository root.

pub use permit_tree_core::*;
