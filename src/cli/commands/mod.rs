pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod punch;
pub mod report;

use crate::config::Config;
use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::storage::JsonStorage;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// Open the configured data file and report anything skipped while loading.
pub(crate) fn open_store(cfg: &Config) -> AppResult<(JsonStorage, RecordStore)> {
    let storage = JsonStorage::new(cfg.data_path());
    let report = storage.load()?;

    if report.recovered_from_backup {
        warning(format!(
            "Data file unreadable; loaded backup {}",
            storage.backup_path().display()
        ));
    }
    for skipped in &report.skipped {
        warning(skipped);
    }

    Ok((storage, report.store))
}

pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn date_or_today(s: &Option<String>) -> AppResult<NaiveDate> {
    match s {
        Some(d) => parse_date_arg(d),
        None => Ok(date::today()),
    }
}
