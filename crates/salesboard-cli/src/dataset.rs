//! Resolving which records a command works on, and which filter applies.

use std::path::Path;

use chrono::NaiveDate;
use clap::Args;
use salesboard_core::sample::sample_records;
use salesboard_core::{DateRange, FilterSpec, RecordStore, SalesRecord, parse_date_str};

use crate::config::Config;

/// Filter flags shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First day to include; defaults to the earliest order
    #[arg(long, value_parser = parse_day)]
    pub from: Option<NaiveDate>,

    /// Last day to include; defaults to the latest order
    #[arg(long, value_parser = parse_day)]
    pub to: Option<NaiveDate>,

    /// Only this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Only this region (exact match)
    #[arg(long)]
    pub region: Option<String>,
}

impl FilterArgs {
    /// Build the filter, filling open date bounds from the span of the data.
    pub fn to_spec(&self, records: &[SalesRecord]) -> FilterSpec {
        let span = DateRange::spanning(records);
        let start = self
            .from
            .or(span.map(|s| s.start))
            .unwrap_or(NaiveDate::MIN);
        let end = self.to.or(span.map(|s| s.end)).unwrap_or(NaiveDate::MAX);

        FilterSpec {
            date_range: DateRange::new(start, end),
            category: self.category.clone(),
            region: self.region.clone(),
        }
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    parse_date_str(s).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

/// Records from `input` if given, otherwise the stored set. An empty store
/// falls back to the bundled sample, the same as a first visit to the
/// dashboard.
pub fn load(config: &Config, input: Option<&Path>) -> anyhow::Result<Vec<SalesRecord>> {
    if let Some(path) = input {
        return Ok(salesboard_io::load_records(path)?);
    }

    let store = RecordStore::open(config.store_dir())?;
    if store.is_empty() {
        tracing::info!("No records loaded, using the bundled sample");
        return Ok(sample_records()?);
    }
    Ok(store.records().to_vec())
}
