//! Bundled sample data set.
//!
//! The rows deliberately mix column-name aliases and include missing
//! regions, categories and quantities plus a malformed number, so a fresh
//! dashboard shows every normalizer path.

use crate::error::{Error, Result};
use crate::record::{RawRow, SalesRecord, normalize_all};

const SAMPLE_JSON: &str = include_str!("../data/sample_sales.json");

/// The sample as raw rows, before normalization.
pub fn sample_rows() -> Result<Vec<RawRow>> {
    serde_json::from_str(SAMPLE_JSON).map_err(|e| Error::Deserialization(e.to_string()))
}

/// The sample as canonical records.
pub fn sample_records() -> Result<Vec<SalesRecord>> {
    Ok(normalize_all(&sample_rows()?))
}
