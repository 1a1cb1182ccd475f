//! `report`: filter the records and print every dashboard view.

use std::path::Path;

use salesboard_core::{DashboardView, DisplayMode};

use crate::config::Config;
use crate::dataset::{self, FilterArgs};
use crate::render::render_view;

pub fn execute(
    config: &Config,
    input: Option<&Path>,
    filters: &FilterArgs,
    compact: bool,
    json: bool,
) -> anyhow::Result<()> {
    let records = dataset::load(config, input)?;
    let spec = filters.to_spec(&records);
    let mode = if compact || config.compact {
        DisplayMode::Compact
    } else {
        DisplayMode::Full
    };

    let view = DashboardView::compute(&records, &spec, mode);
    tracing::debug!(
        "Computed view over {} records: {} days, {} products, {} regions",
        records.len(),
        view.daily.len(),
        view.top_products.len(),
        view.regions.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_view(&view));
    }
    Ok(())
}
