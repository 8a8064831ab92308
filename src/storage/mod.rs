//! JSON file persistence for the record store.
//!
//! Loading tolerates bad entries (they are skipped and reported); saving keeps
//! a `.bak` copy of the previous content and replaces the file atomically.

pub mod format;

use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// An entry dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    pub key: String,
    pub reason: String,
}

impl fmt::Display for MalformedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped entry '{}': {}", self.key, self.reason)
    }
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub store: RecordStore,
    pub skipped: Vec<MalformedEntry>,
    /// The main file was unusable and the `.bak` copy was loaded instead.
    pub recovered_from_backup: bool,
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("bak")
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    /// Load the data file. A missing file gives an empty store.
    pub fn load(&self) -> AppResult<LoadReport> {
        match read_object(&self.path) {
            Ok(Some(map)) => Ok(build_report(map, false)),
            Ok(None) => match read_object(&self.backup_path()) {
                Ok(Some(map)) => {
                    tracing::warn!(path = %self.path.display(), "data file missing, loaded backup");
                    Ok(build_report(map, true))
                }
                _ => {
                    tracing::debug!(path = %self.path.display(), "no data file yet");
                    Ok(LoadReport::default())
                }
            },
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "data file unreadable, trying backup");
                match read_object(&self.backup_path()) {
                    Ok(Some(map)) => Ok(build_report(map, true)),
                    _ => Err(AppError::UnreadableDataFile(self.path.clone())),
                }
            }
        }
    }

    /// Write the store, keeping the previous content in the `.bak` sibling.
    pub fn save(&self, store: &RecordStore) -> AppResult<()> {
        let encoded = format::encode(store.iter());
        let mut body = serde_json::to_string_pretty(&encoded)?;
        body.push('\n');

        self.write_with_backup(body.as_bytes())
            .map_err(|source| AppError::PersistenceFailure {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), records = store.len(), "saved data file");
        Ok(())
    }

    fn write_with_backup(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Only a readable file is worth keeping; a corrupt one must not
        // overwrite the last good backup.
        if matches!(read_object(&self.path), Ok(Some(_))) {
            fs::copy(&self.path, self.backup_path())?;
        }

        let tmp = self.tmp_path();
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(bytes)?;
            f.sync_all()?;
        }
        fs::rename(&tmp, &self.path)
    }
}

/// `Ok(None)` when the file does not exist.
fn read_object(path: &Path) -> io::Result<Option<Map<String, Value>>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(Some(Map::new()));
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "top-level value is not an object",
        )),
        Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
    }
}

fn build_report(map: Map<String, Value>, recovered_from_backup: bool) -> LoadReport {
    let mut report = LoadReport {
        recovered_from_backup,
        ..LoadReport::default()
    };

    for (key, value) in map {
        match format::decode_entry(&key, value) {
            Ok(record) if report.store.get(record.date).is_some() => {
                let reason = format!("duplicate entry for {}", record.date);
                tracing::warn!(key = %key, reason = %reason, "skipping malformed entry");
                report.skipped.push(MalformedEntry { key, reason });
            }
            Ok(record) => {
                // decode_entry already validated the record
                if let Err(e) = report.store.upsert(record) {
                    report.skipped.push(MalformedEntry {
                        key,
                        reason: e.to_string(),
                    });
                }
            }
            Err(reason) => {
                tracing::warn!(key = %key, reason = %reason, "skipping malformed entry");
                report.skipped.push(MalformedEntry { key, reason });
            }
        }
    }

    report
}
