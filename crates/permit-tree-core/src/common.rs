use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a permit tree.
///
/// Returned by [`PermitTree::stats`](crate::PermitTree::stats). The counts
/// reflect the tree after grouping, so `building_types` counts leaves
/// (distinct zip/type pairs), not input rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeStats {
    pub zip_codes: usize,
    pub building_types: usize,
    pub total_cost: f64,
}
