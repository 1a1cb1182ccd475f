//! `facets`: list the category and region values available for filtering.

use std::path::Path;

use salesboard_core::derive_facets;

use crate::colors;
use crate::config::Config;
use crate::dataset;

pub fn execute(config: &Config, input: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let records = dataset::load(config, input)?;
    let facets = derive_facets(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    println!("{}Categories{}", colors::BOLD, colors::RESET);
    for category in &facets.categories {
        println!("  {}", category);
    }
    println!("{}Regions{}", colors::BOLD, colors::RESET);
    for region in &facets.regions {
        println!("  {}", region);
    }
    Ok(())
}
