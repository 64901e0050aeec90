// crates/permit-tree-core/src/model/record.rs
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// Cell contents that mean "no value", matching the markers dataframe
/// readers treat as missing by default.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a (trimmed) cell holds one of the [`NA_TOKENS`].
pub fn is_missing(raw: &str) -> bool {
    NA_TOKENS.contains(&raw.trim())
}

/// Postal code as it appeared in the source.
///
/// Plain integers stay numbers so they serialize as JSON numbers. Anything
/// else (ZIP+4, letters, leading zeros) is kept verbatim as text, since
/// turning `"02134"` into `2134` would lose information.
///
/// Ordering puts every numeric code before every text code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZipCode {
    Number(i64),
    Text(String),
}

impl ZipCode {
    /// Parses a raw CSV field. Blank and NA cells yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if is_missing(s) {
            return None;
        }
        let has_leading_zero = s.len() > 1 && s.starts_with('0');
        match s.parse::<i64>() {
            Ok(n) if !has_leading_zero => Some(ZipCode::Number(n)),
            _ => Some(ZipCode::Text(s.to_string())),
        }
    }
}

impl FromStr for ZipCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s).unwrap_or_else(|| ZipCode::Text(String::new())))
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZipCode::Number(n) => write!(f, "{n}"),
            ZipCode::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ZipCode {
    fn from(n: i64) -> Self {
        ZipCode::Number(n)
    }
}

impl From<&str> for ZipCode {
    fn from(s: &str) -> Self {
        ZipCode::Text(s.to_string())
    }
}

/// A construction cost or a sum of them.
///
/// Integral inputs stay `Int` so totals print as `1500`, not `1500.0`.
/// Adding a `Float`, or overflowing `i64`, promotes the result to `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Int(i64),
    Float(f64),
}

impl Amount {
    pub const ZERO: Amount = Amount::Int(0);

    /// Parses a raw CSV field. Blank and NA cells yield `Ok(None)`;
    /// non-numeric text and infinities are errors the loader reports with
    /// the row number.
    pub fn parse(raw: &str) -> Result<Option<Self>, AmountParseError> {
        let s = raw.trim();
        if is_missing(s) {
            return Ok(None);
        }
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Some(Amount::Int(n)));
        }
        let f = s.parse::<f64>()?;
        if !f.is_finite() {
            return Err(AmountParseError::NonFinite);
        }
        Ok(Some(Amount::Float(f)))
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Amount::Int(n) => n as f64,
            Amount::Float(f) => f,
        }
    }
}

#[derive(Debug, Error)]
pub enum AmountParseError {
    #[error("not a number: {0}")]
    NotNumeric(#[from] std::num::ParseFloatError),

    #[error("not a finite number")]
    NonFinite,
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self, rhs) {
            (Amount::Int(a), Amount::Int(b)) => a
                .checked_add(b)
                .map(Amount::Int)
                .unwrap_or_else(|| Amount::Float(a as f64 + b as f64)),
            (a, b) => Amount::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Int(n) => write!(f, "{n}"),
            Amount::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One permit row from the source CSV.
///
/// Every field is optional: blank cells load as `None` and the aggregator
/// decides what to do with them.
#[derive(Debug, Clone, PartialEq)]
pub struct PermitRecord {
    pub zip_code: Option<ZipCode>,
    pub permit_type_description: Option<String>,
    pub construction_cost: Option<Amount>,
}

impl PermitRecord {
    /// Convenience constructor for fully populated rows.
    pub fn new(zip_code: impl Into<ZipCode>, permit_type: &str, cost: Amount) -> Self {
        Self {
            zip_code: Some(zip_code.into()),
            permit_type_description: Some(permit_type.to_string()),
            construction_cost: Some(cost),
        }
    }
}

/// Total cost of every record sharing one (zip code, permit type) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRow {
    pub zip_code: ZipCode,
    pub permit_type_description: String,
    pub total_cost: Amount,
}
