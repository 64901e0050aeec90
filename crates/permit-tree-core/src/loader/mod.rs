// crates/permit-tree-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates the payload
//! to the CSV reader. Only the three columns the aggregation needs are
//! looked up; everything else in the file is ignored.

use crate::error::{PermitError, Result};
use crate::model::record::is_missing;
use crate::model::{Amount, PermitRecord, ZipCode};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

mod common_io;

pub use common_io::is_gzip;

/// Default input file name, relative to the working directory.
pub const DEFAULT_INPUT: &str = "BuildPermit.csv";

/// Header names of the columns the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub zip_code: String,
    pub permit_type: String,
    pub construction_cost: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            zip_code: "Zip Code".to_string(),
            permit_type: "Permit Type Description".to_string(),
            construction_cost: "Construction Cost".to_string(),
        }
    }
}

/// Resolved positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    zip_code: usize,
    permit_type: usize,
    construction_cost: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, names: &ColumnNames) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| PermitError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            zip_code: find(names.zip_code.as_str())?,
            permit_type: find(names.permit_type.as_str())?,
            construction_cost: find(names.construction_cost.as_str())?,
        })
    }
}

/// Loads every permit record from a CSV file (`.csv` or, with the `compact`
/// feature, `.csv.gz`).
pub fn load_records(path: impl AsRef<Path>, columns: &ColumnNames) -> Result<Vec<PermitRecord>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let records = load_from_reader(reader, columns)?;
    info!(path = %path.display(), records = records.len(), "loaded permit records");
    Ok(records)
}

/// Parses permit records from any CSV source with a header row.
pub fn load_from_reader<R: Read>(reader: R, columns: &ColumnNames) -> Result<Vec<PermitRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, columns)?;
    debug!(?index, columns = headers.len(), "resolved permit columns");

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result?;
        // Header is line 1.
        let line = row.position().map_or(i as u64 + 2, |p| p.line());
        records.push(parse_row(&row, index, line)?);
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, index: ColumnIndex, line: u64) -> Result<PermitRecord> {
    let field = |i: usize| row.get(i).unwrap_or("");

    let permit_type = field(index.permit_type);
    let cost_raw = field(index.construction_cost);
    let construction_cost = Amount::parse(cost_raw).map_err(|e| {
        PermitError::InvalidData(format!(
            "line {line}: construction cost {cost_raw:?} rejected ({e})"
        ))
    })?;

    Ok(PermitRecord {
        zip_code: ZipCode::parse(field(index.zip_code)),
        permit_type_description: (!is_missing(permit_type)).then(|| permit_type.to_string()),
        construction_cost,
    })
}
