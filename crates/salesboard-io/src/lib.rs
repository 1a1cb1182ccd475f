//! Ingestion and export boundary for Salesboard.
//!
//! Turns uploaded files into canonical records, and filtered records back
//! into a CSV download. This is the only place in the pipeline that can
//! fail on bad input.
//!
//! # Architecture
//!
//! ```text
//! upload.{csv,json,jsonl,xlsx} ──► read_rows ──► RawRow ──► normalize_all ──► SalesRecord
//!                                                                                  │
//! export.csv ◄──────────────────────── write_csv ◄──── filter ◄────────────────────┘
//! ```

mod error;
mod export;
mod format;
mod ingest;

pub use error::{IngestError, IngestResult};
pub use export::{CANONICAL_COLUMNS, export_csv, write_csv};
pub use format::InputFormat;
pub use ingest::{load_records, parse_csv, parse_json, parse_json_lines, read_rows, read_spreadsheet};
