//! Canonical sales records and the normalizer that produces them.
//!
//! Uploaded rows arrive with whatever column names the exporting tool chose.
//! [`normalize`] resolves them once, through a fixed alias table, so every
//! downstream view works on a single [`SalesRecord`] shape.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row as read from an upload: column name to arbitrary value.
pub type RawRow = Map<String, Value>;

/// Bucket name used for records without a product or region.
pub const UNKNOWN: &str = "Unknown";

const ORDER_ID: &[&str] = &["orderId", "order_id"];
const ORDER_DATE: &[&str] = &["orderDate", "date", "order_date"];
const PRODUCT_NAME: &[&str] = &["productName", "product", "product_name"];
const CATEGORY: &[&str] = &["category"];
const REGION: &[&str] = &["region"];
const QUANTITY: &[&str] = &["quantity", "qty"];
const UNIT_PRICE: &[&str] = &["unitPrice", "price", "unit_price"];
const SALES: &[&str] = &["sales", "amount"];
const PROFIT: &[&str] = &["profit"];

/// Alias groups, one per canonical field. The first non-blank key wins.
const FIELDS: [&[&str]; 9] = [
    ORDER_ID,
    ORDER_DATE,
    PRODUCT_NAME,
    CATEGORY,
    REGION,
    QUANTITY,
    UNIT_PRICE,
    SALES,
    PROFIT,
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Largest spreadsheet serial day number (9999-12-31).
const MAX_SERIAL_DAY: f64 = 2_958_465.0;

/// A sales record after alias resolution and numeric coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Calendar day of the order. `None` keeps the record out of every
    /// date-based view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Units ordered. `None` when the column was missing or unreadable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,

    #[serde(default)]
    pub unit_price: f64,

    #[serde(default)]
    pub sales: f64,

    #[serde(default)]
    pub profit: f64,

    /// Columns the normalizer does not interpret, carried through untouched.
    #[serde(flatten)]
    pub extra: RawRow,
}

impl SalesRecord {
    /// Quantity as used by sums: missing counts as zero.
    pub fn quantity_or_zero(&self) -> u64 {
        self.quantity.unwrap_or(0)
    }

    /// Quantity as used when pricing a product ranking: missing counts as one unit.
    pub fn quantity_or_one(&self) -> u64 {
        self.quantity.unwrap_or(1)
    }

    /// Line total recomputed from price and quantity, ignoring `sales`.
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity_or_zero() as f64
    }

    /// Grouping key for product rankings.
    pub fn product_key(&self) -> &str {
        self.product_name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Grouping key for regional totals.
    pub fn region_key(&self) -> &str {
        self.region.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Normalize one raw row into a canonical record.
///
/// Returns `None` when the row carries none of the recognized columns, which
/// is what blank spreadsheet rows look like. Every other row produces a
/// record: unreadable numbers become zero and an unreadable date leaves
/// `order_date` empty.
pub fn normalize(row: &RawRow) -> Option<SalesRecord> {
    if !FIELDS.iter().any(|aliases| lookup(row, aliases).is_some()) {
        return None;
    }

    let quantity = lookup(row, QUANTITY)
        .and_then(coerce_number)
        .map(|n| n.max(0.0).trunc() as u64);
    let unit_price = number_field(row, UNIT_PRICE);
    let sales = match lookup(row, SALES) {
        Some(value) => coerce_number(value).unwrap_or(0.0),
        None => quantity.unwrap_or(0) as f64 * unit_price,
    };

    let extra = row
        .iter()
        .filter(|(key, _)| !is_alias(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(SalesRecord {
        order_id: text_field(row, ORDER_ID),
        order_date: lookup(row, ORDER_DATE).and_then(parse_date),
        product_name: text_field(row, PRODUCT_NAME),
        category: text_field(row, CATEGORY),
        region: text_field(row, REGION),
        quantity,
        unit_price,
        sales,
        profit: number_field(row, PROFIT),
        extra,
    })
}

/// Normalize a batch of rows, dropping the ones with no recognized columns.
pub fn normalize_all<'a, I>(rows: I) -> Vec<SalesRecord>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut skipped = 0usize;
    let records: Vec<SalesRecord> = rows
        .into_iter()
        .filter_map(|row| {
            let record = normalize(row);
            if record.is_none() {
                skipped += 1;
            }
            record
        })
        .collect();

    if skipped > 0 {
        tracing::debug!("Skipped {} rows with no recognized columns", skipped);
    }
    let undated = records.iter().filter(|r| r.order_date.is_none()).count();
    if undated > 0 {
        tracing::warn!(
            "{} of {} records have no readable order date and will not appear in date-based views",
            undated,
            records.len()
        );
    }

    records
}

/// Parse a calendar date from a cell value.
///
/// Strings go through [`parse_date_str`]. Numbers up to 2958465 are
/// spreadsheet serial days counted from 1899-12-30, as found in date columns
/// that lost their cell formatting. Larger integers are Unix epoch
/// milliseconds.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => match n.as_f64() {
            Some(days) if (1.0..=MAX_SERIAL_DAY).contains(&days) => serial_date(days),
            _ => n
                .as_i64()
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.date_naive()),
        },
        _ => None,
    }
}

/// Parse a calendar date from text, discarding any time of day.
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn serial_date(days: f64) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(days.trunc() as u64))
}

fn is_alias(key: &str) -> bool {
    FIELDS.iter().any(|aliases| aliases.contains(&key))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn lookup<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .find(|value| !is_blank(value))
}

fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn number_field(row: &RawRow, aliases: &[&str]) -> f64 {
    lookup(row, aliases).and_then(coerce_number).unwrap_or(0.0)
}

fn text_field(row: &RawRow, aliases: &[&str]) -> Option<String> {
    match lookup(row, aliases)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
