//! Selection log
//!
//! Append-only history of user selections, persisted as a single
//! pretty-printed JSON array. Every read loads the whole file; every append
//! rewrites it. Appends take no lock, so two concurrent writers can race and
//! one append may be lost.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One logged user selection. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub drink_type: String,
    pub flavor: String,
    pub recipe_title: String,
    /// ISO-8601 local time, second precision, no timezone offset.
    pub timestamp: String,
}

impl SelectionRecord {
    /// Build a record stamped with the current local time.
    pub fn stamped(drink_type: &str, flavor: &str, recipe_title: &str) -> Self {
        Self {
            drink_type: drink_type.to_string(),
            flavor: flavor.to_string(),
            recipe_title: recipe_title.to_string(),
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Handle to the on-disk selection store.
#[derive(Debug, Clone)]
pub struct SelectionLog {
    path: PathBuf,
}

impl SelectionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the parent directory and the store file exist.
    fn ensure_store(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        if !self.path.exists() {
            fs::write(&self.path, "[]")?;
        }
        Ok(())
    }

    /// Load all records in stored order.
    ///
    /// A store that fails to parse as a JSON array of records is treated as
    /// empty; only filesystem errors propagate.
    pub fn load(&self) -> Result<Vec<SelectionRecord>> {
        self.ensure_store()?;
        let raw = fs::read_to_string(&self.path)?;

        let records = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "selection store {} is not a valid record array ({e}), treating as empty",
                    self.path.display()
                );
                Vec::new()
            }
        };

        Ok(records)
    }

    /// Append one record and rewrite the whole store.
    pub fn append(&self, record: SelectionRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.write_all(&records)
    }

    fn write_all(&self, records: &[SelectionRecord]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;

        fs::write(&self.path, buf)?;
        Ok(())
    }
}
