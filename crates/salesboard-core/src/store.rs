//! The process-wide record set.
//!
//! The store holds exactly one record set at a time. Loading an upload or
//! the bundled sample replaces it wholesale; nothing is merged. A store
//! opened on a directory restores the last set on open and persists
//! replacements on [`flush`](RecordStore::flush).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::filter::{Facets, derive_facets};
use crate::record::SalesRecord;
use crate::sample;

/// File name of the persisted record set inside the store directory.
pub const RECORDS_FILE: &str = "records.json";

pub struct RecordStore {
    /// Backing file, `None` for in-memory stores
    path: Option<PathBuf>,

    /// Current record set, shared with readers as an immutable snapshot
    records: Arc<Vec<SalesRecord>>,

    /// Set when the in-memory set differs from the backing file
    dirty: bool,
}

impl RecordStore {
    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: Arc::new(Vec::new()),
            dirty: false,
        }
    }

    /// Open a store in `dir`, restoring the previously saved set if any.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(RECORDS_FILE);
        let records = if path.exists() {
            let bytes = fs::read(&path)?;
            let records: Vec<SalesRecord> = serde_json::from_slice(&bytes)
                .map_err(|e| Error::Deserialization(format!("{}: {}", path.display(), e)))?;
            tracing::info!("Restored {} records from {}", records.len(), path.display());
            records
        } else {
            Vec::new()
        };

        Ok(Self {
            path: Some(path),
            records: Arc::new(records),
            dirty: false,
        })
    }

    /// Replace the whole record set.
    pub fn replace(&mut self, records: Vec<SalesRecord>) {
        tracing::info!(
            "Replacing {} records with {}",
            self.records.len(),
            records.len()
        );
        self.records = Arc::new(records);
        self.dirty = true;
    }

    /// Replace the record set with the bundled sample.
    pub fn load_sample(&mut self) -> Result<()> {
        let records = sample::sample_records()?;
        self.replace(records);
        Ok(())
    }

    /// Drop the record set and its backing file.
    pub fn clear(&mut self) -> Result<()> {
        self.records = Arc::new(Vec::new());
        self.dirty = false;

        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    /// Persist the record set if it changed since the last flush.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(path) = &self.path {
            let bytes = serde_json::to_vec(self.records.as_ref())
                .map_err(|e| Error::Serialization(e.to_string()))?;

            // Write to a temp file first, then rename into place
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, bytes)?;
            fs::rename(&tmp, path)?;
            tracing::debug!("Flushed {} records to {}", self.records.len(), path.display());
        }

        self.dirty = false;
        Ok(())
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// A cheap handle on the current set that survives later replacements.
    pub fn snapshot(&self) -> Arc<Vec<SalesRecord>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Facets over the full stored set.
    pub fn facets(&self) -> Facets {
        derive_facets(&self.records)
    }

    /// Backing file, if the store is persistent.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
