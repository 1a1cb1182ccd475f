//! Compact and full display variants.
//!
//! These are presentation transforms layered over the aggregators. They
//! reshape or relabel the series for a constrained display, they never
//! change how values are computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{ProductRank, RegionTotal, round_cents, top_products};
use crate::record::SalesRecord;

/// Number of region slots on a compact display, including `"Other"`.
pub const COMPACT_REGION_SLOTS: usize = 5;

/// Name of the synthetic bucket that absorbs the long tail of regions.
pub const OTHER: &str = "Other";

/// How much room the presentation layer has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Full,
    Compact,
}

impl DisplayMode {
    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }

    /// How many products the ranking shows.
    pub fn top_n(self) -> usize {
        match self {
            Self::Full => 10,
            Self::Compact => 5,
        }
    }

    /// Axis label for a day in the time series.
    pub fn date_label(self, date: NaiveDate) -> String {
        let fmt = match self {
            Self::Full => "%Y-%m-%d",
            Self::Compact => "%m/%d",
        };
        date.format(fmt).to_string()
    }
}

/// Top products sized for the display mode.
///
/// Compact displays get the truncated ranking reversed so the largest bar
/// sits at the far end of a horizontal chart.
pub fn ranked_products(records: &[SalesRecord], mode: DisplayMode) -> Vec<ProductRank> {
    let mut ranked = top_products(records, mode.top_n());
    if mode.is_compact() {
        ranked.reverse();
    }
    ranked
}

/// Collapse the tail of a sorted region list into `"Other"` on compact
/// displays.
///
/// With more than [`COMPACT_REGION_SLOTS`] groups, ranks 1-4 are kept and
/// every later rank is summed into one entry. The cut is positional, not a
/// value threshold. Full displays get the input back unchanged.
pub fn collapse_regions(totals: Vec<RegionTotal>, mode: DisplayMode) -> Vec<RegionTotal> {
    if !mode.is_compact() || totals.len() <= COMPACT_REGION_SLOTS {
        return totals;
    }

    let mut kept = totals;
    let tail = kept.split_off(COMPACT_REGION_SLOTS - 1);
    let other: f64 = tail.iter().map(|t| t.value).sum();
    kept.push(RegionTotal {
        name: OTHER.to_string(),
        value: round_cents(other),
    });
    kept
}

/// A displayed region segment with its share of the displayed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub name: String,
    pub value: f64,
    /// Fraction in `[0, 1]` of the sum of the displayed values.
    pub share: f64,
}

/// Attach share-of-total to each displayed segment.
pub fn region_shares(totals: &[RegionTotal]) -> Vec<RegionShare> {
    let total: f64 = totals.iter().map(|t| t.value).sum();
    totals
        .iter()
        .map(|t| RegionShare {
            name: t.name.clone(),
            value: t.value,
            share: if total > 0.0 { t.value / total } else { 0.0 },
        })
        .collect()
}
