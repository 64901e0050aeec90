// crates/permit-tree-core/src/model/tree.rs
use super::record::{Amount, ZipCode};
use crate::common::TreeStats;
use serde::{Deserialize, Serialize};

/// Label of the root node, used both as its JSON key and as its `parent`.
pub const ROOT_LABEL: &str = "city";

/// # The Permit Tree
///
/// A three level hierarchy, serialized as-is:
///
/// **Structure:** `PermitTree` -> `city` -> `Vec<ZipNode>` -> `Vec<BuildingTypeNode>`
///
/// Field order here is the key order in the JSON output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermitTree {
    pub city: CityNode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityNode {
    pub parent: String,
    pub children: Vec<ZipNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZipNode {
    pub zip_code: ZipCode,
    // Always equal to `zip_code`; downstream charts key on it.
    pub parent: ZipCode,
    pub children: Vec<BuildingTypeNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingTypeNode {
    pub building_type: String,
    pub value: Amount,
}

impl Default for PermitTree {
    fn default() -> Self {
        Self {
            city: CityNode {
                parent: ROOT_LABEL.to_string(),
                children: Vec::new(),
            },
        }
    }
}

impl PermitTree {
    pub fn zip_codes(&self) -> &[ZipNode] {
        &self.city.children
    }

    pub fn find_zip(&self, zip: &ZipCode) -> Option<&ZipNode> {
        self.city.children.iter().find(|z| &z.zip_code == zip)
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            zip_codes: self.city.children.len(),
            building_types: self.city.children.iter().map(|z| z.children.len()).sum(),
            total_cost: self.city.children.iter().map(|z| z.total().as_f64()).sum(),
        }
    }
}

impl ZipNode {
    pub fn new(zip_code: ZipCode) -> Self {
        Self {
            parent: zip_code.clone(),
            zip_code,
            children: Vec::new(),
        }
    }

    /// Sum of every leaf value under this zip code.
    pub fn total(&self) -> Amount {
        self.children.iter().map(|leaf| leaf.value).sum()
    }

    pub fn find_building_type(&self, building_type: &str) -> Option<&BuildingTypeNode> {
        self.children
            .iter()
            .find(|leaf| leaf.building_type == building_type)
    }
}
