//! `load`, `sample` and `clear`: manage the stored record set.

use std::path::Path;

use salesboard_core::RecordStore;

use crate::colors;
use crate::config::Config;

/// Replace the stored set with the records in `path`.
pub fn execute(config: &Config, path: &Path) -> anyhow::Result<()> {
    let records = salesboard_io::load_records(path)?;
    let undated = records.iter().filter(|r| r.order_date.is_none()).count();

    let mut store = RecordStore::open(config.store_dir())?;
    store.replace(records);
    store.flush()?;

    println!(
        "{}Loaded{} {} records from {}{}{}",
        colors::GREEN,
        colors::RESET,
        store.len(),
        colors::CYAN,
        path.display(),
        colors::RESET
    );
    if undated > 0 {
        println!(
            "{}  ⚠ {} records have no readable date and are hidden from date-filtered views{}",
            colors::YELLOW,
            undated,
            colors::RESET
        );
    }
    Ok(())
}

/// Replace the stored set with the bundled sample.
pub fn execute_sample(config: &Config) -> anyhow::Result<()> {
    let mut store = RecordStore::open(config.store_dir())?;
    store.load_sample()?;
    store.flush()?;

    println!(
        "{}Loaded{} {} sample records",
        colors::GREEN,
        colors::RESET,
        store.len()
    );
    Ok(())
}

/// Empty the stored set.
pub fn execute_clear(config: &Config) -> anyhow::Result<()> {
    let mut store = RecordStore::open(config.store_dir())?;
    let previous = store.len();
    store.clear()?;

    println!("Cleared {} stored records", previous);
    Ok(())
}
