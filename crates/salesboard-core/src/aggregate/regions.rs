//! Regional totals.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::round_cents;
use crate::record::SalesRecord;

/// Monetary total for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotal {
    pub name: String,
    pub value: f64,
}

/// Sum `unit_price × quantity` per region, descending by value.
///
/// The total is recomputed from price and quantity; the record's `sales`
/// column is not consulted. Records without a region land in `"Unknown"`.
/// Values are rounded to cents and equal values keep first-seen order.
pub fn aggregate_by_region(records: &[SalesRecord]) -> Vec<RegionTotal> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut totals: Vec<RegionTotal> = Vec::new();

    for record in records {
        let name = record.region_key();
        let slot = *index.entry(name).or_insert_with(|| {
            totals.push(RegionTotal {
                name: name.to_string(),
                value: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].value += record.line_total();
    }

    for total in &mut totals {
        total.value = round_cents(total.value);
    }
    totals.sort_by(|a, b| b.value.total_cmp(&a.value));
    totals
}
