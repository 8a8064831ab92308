//! Unified application error type.
//! All modules (store, storage, config, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Save to {path} did not take effect: {source}")]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Data file {0} is unreadable and no usable backup was found")]
    UnreadableDataFile(PathBuf),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hourly rate: {0}")]
    InvalidRate(String),

    // ---------------------------
    // Record errors
    // ---------------------------
    #[error("Invalid record for {date}: {reason}")]
    InvalidRecord { date: String, reason: String },

    #[error("No open record to punch out of")]
    NoOpenRecord,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    pub fn invalid_record(date: impl ToString, reason: impl Into<String>) -> Self {
        AppError::InvalidRecord {
            date: date.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
