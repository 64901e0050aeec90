// crates/permit-tree-core/src/model/convert.rs
use crate::model::record::AggregatedRow;
use crate::model::tree::{BuildingTypeNode, PermitTree, ZipNode};

/// **Tree Builder:** Aggregated rows -> nested tree.
///
/// Rows must arrive grouped by zip code (as [`crate::aggregate`] returns
/// them). Each run of equal zip codes becomes one `ZipNode`, and leaves keep
/// the row order inside the run.
pub fn build_tree(rows: Vec<AggregatedRow>) -> PermitTree {
    let mut tree = PermitTree::default();

    for row in rows {
        let needs_new_node = tree
            .city
            .children
            .last()
            .map_or(true, |node| node.zip_code != row.zip_code);

        if needs_new_node {
            tree.city.children.push(ZipNode::new(row.zip_code));
        }

        // Just pushed or matched above, so the last node is this row's zip.
        if let Some(node) = tree.city.children.last_mut() {
            node.children.push(BuildingTypeNode {
                building_type: row.permit_type_description,
                value: row.total_cost,
            });
        }
    }

    tree
}
