//! `export`: write the filtered records as CSV.

use std::path::Path;

use salesboard_core::filter;

use crate::colors;
use crate::config::Config;
use crate::dataset::{self, FilterArgs};

pub fn execute(
    config: &Config,
    input: Option<&Path>,
    filters: &FilterArgs,
    output: &Path,
) -> anyhow::Result<()> {
    let records = dataset::load(config, input)?;
    let spec = filters.to_spec(&records);
    let filtered = filter(&records, &spec);

    salesboard_io::export_csv(&filtered, output)?;

    println!(
        "{}Exported{} {} of {} records to {}{}{}",
        colors::GREEN,
        colors::RESET,
        filtered.len(),
        records.len(),
        colors::CYAN,
        output.display(),
        colors::RESET
    );
    Ok(())
}
