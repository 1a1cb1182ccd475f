//! Everything a dashboard renders for one record set and one filter.

use serde::Serialize;

use crate::aggregate::{DailyPoint, ProductRank, Summary, aggregate_by_day, aggregate_by_region, summarize};
use crate::display::{DisplayMode, RegionShare, collapse_regions, ranked_products, region_shares};
use crate::filter::{Facets, FilterSpec, derive_facets, filter};
use crate::record::SalesRecord;

/// Derived dashboard state. Recomputed from scratch whenever the record set
/// or the filter changes; it owns no state of its own.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub filter: FilterSpec,
    pub mode: DisplayMode,
    /// Facet options, from the unfiltered set.
    pub facets: Facets,
    pub summary: Summary,
    pub daily: Vec<DailyPoint>,
    pub top_products: Vec<ProductRank>,
    pub regions: Vec<RegionShare>,
}

impl DashboardView {
    pub fn compute(records: &[SalesRecord], spec: &FilterSpec, mode: DisplayMode) -> Self {
        let filtered = filter(records, spec);

        Self {
            filter: spec.clone(),
            mode,
            facets: derive_facets(records),
            summary: summarize(&filtered),
            daily: aggregate_by_day(&filtered),
            top_products: ranked_products(&filtered, mode),
            regions: region_shares(&collapse_regions(aggregate_by_region(&filtered), mode)),
        }
    }

    /// True when the filter left nothing to show.
    pub fn is_empty(&self) -> bool {
        self.summary.orders == 0
    }
}
