//! CSV export of the filtered record set.
//!
//! Every field is double-quoted and embedded quotes are doubled. The header
//! is the canonical columns followed by the union of pass-through columns in
//! the order they were first seen.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;
use salesboard_core::SalesRecord;
use serde_json::Value;

use crate::error::IngestResult;

/// Canonical column names, in export order.
pub const CANONICAL_COLUMNS: [&str; 9] = [
    "orderId",
    "orderDate",
    "productName",
    "category",
    "region",
    "quantity",
    "unitPrice",
    "sales",
    "profit",
];

/// Write records as fully quoted CSV.
pub fn write_csv<W: Write>(records: &[SalesRecord], writer: W) -> IngestResult<()> {
    let extra_columns = extra_columns(records);

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    writer.write_record(
        CANONICAL_COLUMNS
            .iter()
            .copied()
            .chain(extra_columns.iter().copied()),
    )?;

    for record in records {
        let mut fields = canonical_fields(record);
        fields.extend(
            extra_columns
                .iter()
                .map(|column| record.extra.get(*column).map(value_text).unwrap_or_default()),
        );
        writer.write_record(&fields)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write records to a CSV file at `path`.
pub fn export_csv(records: &[SalesRecord], path: impl AsRef<Path>) -> IngestResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(records, BufWriter::new(file))?;

    tracing::info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

fn extra_columns(records: &[SalesRecord]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    let mut columns = Vec::new();

    for key in records.iter().flat_map(|r| r.extra.keys()) {
        if seen.insert(key.as_str()) {
            columns.push(key.as_str());
        }
    }
    columns
}

fn canonical_fields(record: &SalesRecord) -> Vec<String> {
    vec![
        record.order_id.clone().unwrap_or_default(),
        record.order_date.map(|d| d.to_string()).unwrap_or_default(),
        record.product_name.clone().unwrap_or_default(),
        record.category.clone().unwrap_or_default(),
        record.region.clone().unwrap_or_default(),
        record.quantity.map(|q| q.to_string()).unwrap_or_default(),
        record.unit_price.to_string(),
        record.sales.to_string(),
        record.profit.to_string(),
    ]
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
