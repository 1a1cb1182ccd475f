//! Core pipeline for the Salesboard sales dashboard.
//!
//! This crate provides:
//! - Record normalization with a fixed column alias table
//! - Filtering by date range, category and region, plus facet derivation
//! - Daily, top-product and regional aggregations
//! - Compact/full display transforms
//! - The process-wide record store and the bundled sample
//!
//! # Data flow
//!
//! ```text
//! raw rows ──► normalize ──► RecordStore ──► filter ──┬──► aggregate_by_day
//!                                 │                   ├──► top_products
//!                                 ▼                   └──► aggregate_by_region
//!                           derive_facets
//! ```
//!
//! Everything past the store is a pure, synchronous function of its inputs.

pub mod aggregate;
pub mod display;
pub mod error;
pub mod filter;
pub mod record;
pub mod sample;
pub mod store;
pub mod view;

pub use aggregate::{
    DailyPoint, ProductRank, RegionTotal, Summary, aggregate_by_day, aggregate_by_region,
    rank_products, round_cents, summarize, top_products,
};
pub use display::{DisplayMode, OTHER, RegionShare, collapse_regions, ranked_products, region_shares};
pub use error::{Error, Result};
pub use filter::{DateRange, Facets, FilterSpec, derive_facets, filter};
pub use record::{RawRow, SalesRecord, UNKNOWN, normalize, normalize_all, parse_date, parse_date_str};
pub use store::RecordStore;
pub use view::DashboardView;
