//! Filter engine and facet derivation.
//!
//! Filters are conjunctive: a record must fall inside the date range and
//! match every non-empty facet constraint. Facet values are always derived
//! from the full record set so the available options do not shift as the
//! user narrows the selection.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::SalesRecord;

/// Inclusive calendar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Smallest range covering every dated record, or `None` if no record
    /// carries a date.
    pub fn spanning(records: &[SalesRecord]) -> Option<Self> {
        let mut dates = records.iter().filter_map(|r| r.order_date);
        let first = dates.next()?;
        let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self { start, end })
    }

    /// An inverted range (`start > end`) matches nothing.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The user's current filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub date_range: DateRange,

    /// Exact, case-sensitive category match. `None` or empty means any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Exact, case-sensitive region match. `None` or empty means any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl FilterSpec {
    /// A filter that constrains only the date range.
    pub fn new(date_range: DateRange) -> Self {
        Self {
            date_range,
            category: None,
            region: None,
        }
    }

    /// The filter a dashboard opens with: the whole span of the data, no
    /// facet constraints.
    pub fn spanning(records: &[SalesRecord]) -> Option<Self> {
        DateRange::spanning(records).map(Self::new)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Whether a single record passes all three tests.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        let Some(date) = record.order_date else {
            return false;
        };
        self.date_range.contains(date)
            && constraint_matches(self.category.as_deref(), record.category.as_deref())
            && constraint_matches(self.region.as_deref(), record.region.as_deref())
    }
}

fn constraint_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None | Some("") => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// Apply a filter, keeping the original relative order of the survivors.
pub fn filter(records: &[SalesRecord], spec: &FilterSpec) -> Vec<SalesRecord> {
    if spec.date_range.is_inverted() {
        tracing::debug!(
            "Inverted date range {} > {}, nothing matches",
            spec.date_range.start,
            spec.date_range.end
        );
        return Vec::new();
    }

    let filtered: Vec<SalesRecord> = records
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect();

    tracing::debug!("Filter kept {} of {} records", filtered.len(), records.len());
    filtered
}

/// Distinct values available for each facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub regions: Vec<String>,
}

/// Sorted, deduplicated, non-empty facet values. Absent values are left out
/// rather than reported as `"Unknown"`.
pub fn derive_facets(records: &[SalesRecord]) -> Facets {
    let mut categories = BTreeSet::new();
    let mut regions = BTreeSet::new();

    for record in records {
        if let Some(category) = record.category.as_deref().filter(|c| !c.is_empty()) {
            categories.insert(category);
        }
        if let Some(region) = record.region.as_deref().filter(|r| !r.is_empty()) {
            regions.insert(region);
        }
    }

    Facets {
        categories: categories.into_iter().map(str::to_string).collect(),
        regions: regions.into_iter().map(str::to_string).collect(),
    }
}
