//! Aggregators that turn a filtered record set into chart-ready series.
//!
//! Each aggregator is an independent pure function over an immutable slice;
//! none of them share state or care how the slice was produced.

pub mod daily;
pub mod products;
pub mod regions;
pub mod summary;

pub use daily::{DailyPoint, aggregate_by_day};
pub use products::{ProductRank, rank_products, top_products};
pub use regions::{RegionTotal, aggregate_by_region};
pub use summary::{Summary, summarize};

/// Round a monetary value to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
