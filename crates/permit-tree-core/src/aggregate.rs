// crates/permit-tree-core/src/aggregate.rs

//! # Aggregator
//!
//! Groups permit records by `(zip code, permit type)` and sums their cost.

use crate::model::{AggregatedRow, Amount, PermitRecord, ZipCode};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Sums construction cost per `(zip code, permit type)` pair.
///
/// - Output is sorted by zip code, then by permit type, so consecutive rows
///   with the same zip code form one group for [`crate::build_tree`].
/// - Records missing a zip code or a permit type cannot be placed in a group
///   and are dropped (logged once with the count).
/// - A missing cost counts as zero for its group.
pub fn aggregate(records: &[PermitRecord]) -> Vec<AggregatedRow> {
    let mut groups: BTreeMap<(ZipCode, String), Amount> = BTreeMap::new();
    let mut dropped = 0usize;

    for record in records {
        let (Some(zip), Some(permit_type)) =
            (&record.zip_code, &record.permit_type_description)
        else {
            dropped += 1;
            continue;
        };

        let cost = record.construction_cost.unwrap_or(Amount::ZERO);
        *groups
            .entry((zip.clone(), permit_type.clone()))
            .or_default() += cost;
    }

    if dropped > 0 {
        warn!(
            dropped,
            "skipped records without a zip code or permit type"
        );
    }
    debug!(
        records = records.len(),
        groups = groups.len(),
        "aggregated permit records"
    );

    groups
        .into_iter()
        .map(|((zip_code, permit_type_description), total_cost)| AggregatedRow {
            zip_code,
            permit_type_description,
            total_cost,
        })
        .collect()
}
