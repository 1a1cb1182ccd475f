//! Upload readers.
//!
//! Every reader produces [`RawRow`]s keyed by the header names found in the
//! file. Interpreting those names is the normalizer's job, not ours.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use salesboard_core::{RawRow, SalesRecord, normalize_all};
use serde_json::Value;

use crate::error::{IngestError, IngestResult};
use crate::format::InputFormat;

/// Keys under which an object-wrapped JSON upload may hold its rows.
const WRAPPER_KEYS: &[&str] = &["data", "records", "rows"];

/// Read an upload into raw rows, choosing the reader from the extension.
pub fn read_rows(path: impl AsRef<Path>) -> IngestResult<Vec<RawRow>> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;

    let rows = match format {
        InputFormat::Csv => {
            let file = File::open(path).map_err(|e| read_error(path, e))?;
            parse_csv(BufReader::new(file))?
        }
        InputFormat::Json => parse_json(&read_text(path)?)?,
        InputFormat::JsonLines => parse_json_lines(&read_text(path)?)?,
        InputFormat::Spreadsheet => read_spreadsheet(path)?,
    };

    tracing::info!("Read {} rows from {} ({})", rows.len(), path.display(), format);
    Ok(rows)
}

/// Read an upload and normalize it into canonical records.
pub fn load_records(path: impl AsRef<Path>) -> IngestResult<Vec<SalesRecord>> {
    let rows = read_rows(path)?;
    Ok(normalize_all(&rows))
}

/// Parse CSV with a header row. Empty cells become `null`.
///
/// Bytes that are not valid UTF-8 (legacy spreadsheet encodings) are replaced
/// with U+FFFD instead of failing the upload.
pub fn parse_csv<R: Read>(reader: R) -> IngestResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.byte_headers()?.iter().map(lossy_text).collect();
    let mut rows = Vec::new();
    let mut lossy_rows = 0usize;

    for record in reader.byte_records() {
        let record = record?;
        if std::str::from_utf8(record.as_slice()).is_err() {
            lossy_rows += 1;
        }
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| {
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(lossy_text(cell))
                };
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }

    if lossy_rows > 0 {
        tracing::warn!("{} CSV rows contained invalid UTF-8 and were decoded lossily", lossy_rows);
    }

    Ok(rows)
}

/// Parse a JSON upload: a top-level array of objects, or an object holding
/// that array under `data`, `records` or `rows`. Non-object entries are
/// skipped.
pub fn parse_json(text: &str) -> IngestResult<Vec<RawRow>> {
    let items = match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items,
        Value::Object(mut object) => {
            match WRAPPER_KEYS.iter().find_map(|key| object.remove(*key)) {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(IngestError::InvalidShape(
                        "expected an array of row objects".to_string(),
                    ));
                }
            }
        }
        other => {
            return Err(IngestError::InvalidShape(format!(
                "expected an array of row objects, found {}",
                json_kind(&other)
            )));
        }
    };

    Ok(items.into_iter().filter_map(into_row).collect())
}

/// Parse line-delimited JSON, one row object per non-blank line.
pub fn parse_json_lines(text: &str) -> IngestResult<Vec<RawRow>> {
    let mut rows = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| {
            IngestError::InvalidShape(format!("line {}: {}", line_num + 1, e))
        })?;
        if let Some(row) = into_row(value) {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Read the first sheet of a workbook. The first row holds the headers.
pub fn read_spreadsheet(path: &Path) -> IngestResult<Vec<RawRow>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

    let sheet_count = workbook.sheet_names().len();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::Spreadsheet("workbook has no sheets".to_string()))?
        .map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

    if sheet_count > 1 {
        tracing::debug!("Reading first of {} sheets", sheet_count);
    }

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row.iter().map(header_text).collect();

    let rows = sheet_rows
        .map(|cells| {
            headers
                .iter()
                .zip(cells)
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), cell_value(cell)))
                .collect::<RawRow>()
        })
        .collect();

    Ok(rows)
}

fn lossy_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map a sheet cell onto the JSON value a text upload would have produced.
/// Date cells become ISO timestamps so the normalizer parses them like text.
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| Value::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string()))
            .unwrap_or(Value::Null),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(_) | Data::Empty => Value::Null,
    }
}

fn into_row(value: Value) -> Option<RawRow> {
    match value {
        Value::Object(row) => Some(row),
        other => {
            tracing::warn!("Skipping non-object row ({})", json_kind(&other));
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn read_text(path: &Path) -> IngestResult<String> {
    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, e: std::io::Error) -> IngestError {
    IngestError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
