//! Time-series aggregation by calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::SalesRecord;

/// Totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub sales: f64,
    pub profit: f64,
    /// `sales - profit` for the bucket, recomputed from the bucket sums.
    pub revenue: f64,
}

/// Bucket records by order day, ascending. Undated records are skipped.
pub fn aggregate_by_day(records: &[SalesRecord]) -> Vec<DailyPoint> {
    let mut buckets: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    for record in records {
        let Some(date) = record.order_date else {
            continue;
        };
        let bucket = buckets.entry(date).or_insert((0.0, 0.0));
        bucket.0 += record.sales;
        bucket.1 += record.profit;
    }

    buckets
        .into_iter()
        .map(|(date, (sales, profit))| DailyPoint {
            date,
            sales,
            profit,
            revenue: sales - profit,
        })
        .collect()
}
