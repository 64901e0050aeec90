//! Basic usage example for permit-tree-rs
//!
//! This example demonstrates how to:
//! - Parse permit records from an in-memory CSV
//! - Aggregate them by zip code and permit type
//! - Build the tree and inspect it
//! - Serialize it the same way the CLI does

use permit_tree_rs::*;

const SAMPLE: &str = "\
Permit Number,Zip Code,Permit Type Description,Construction Cost
P-1,90210,New Construction,1000
P-2,90210,New Construction,500
P-3,90210,Alteration,200
P-4,10001,Demolition,750.5
P-5,,Alteration,999
";

fn main() -> Result<()> {
    println!("=== permit-tree Basic Usage Example ===\n");

    // Example 1: Load
    println!("--- Example 1: Load records ---");
    let records = load_from_reader(SAMPLE.as_bytes(), &ColumnNames::default())?;
    println!("Loaded {} records\n", records.len());

    // Example 2: Aggregate
    println!("--- Example 2: Aggregate ---");
    let rows = aggregate(&records);
    for row in &rows {
        println!(
            "{} / {} = {}",
            row.zip_code, row.permit_type_description, row.total_cost
        );
    }
    println!();

    // Example 3: Build and inspect
    println!("--- Example 3: Build the tree ---");
    let tree = build_tree(rows);
    let stats = tree.stats();
    println!("Zip codes: {}", stats.zip_codes);
    println!("Building types: {}", stats.building_types);
    println!("Total cost: {}", stats.total_cost);
    if let Some(zip) = tree.find_zip(&ZipCode::Number(90210)) {
        println!("90210 total: {}", zip.total());
    }
    println!();

    // Example 4: Serialize
    println!("--- Example 4: JSON ---");
    println!("{}", to_json_pretty(&tree)?);

    Ok(())
}
