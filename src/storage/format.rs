//! On-disk JSON shape: `{ "YYYY-MM-DD": { clock_in, clock_out, break_minutes, hourly_rate, ... } }`.

use crate::models::WorkRecord;
use crate::utils::date::parse_date;
use crate::utils::time::{format_time, parse_time};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    #[serde(default)]
    pub break_minutes: u32,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
}

impl From<&WorkRecord> for PersistedRecord {
    fn from(r: &WorkRecord) -> Self {
        Self {
            clock_in: r.clock_in.map(format_time),
            clock_out: r.clock_out.map(format_time),
            break_minutes: r.break_minutes,
            hourly_rate: r.hourly_rate,
            location: r.location.clone(),
            project: r.project.clone(),
            memo: r.memo.clone(),
        }
    }
}

/// Decode one `key: value` entry. Errors are a human-readable reason.
pub fn decode_entry(key: &str, value: Value) -> Result<WorkRecord, String> {
    let date = parse_date(key)
        .filter(|d| d.format("%Y-%m-%d").to_string() == key)
        .ok_or_else(|| format!("date key '{}' is not YYYY-MM-DD", key))?;
    let raw: PersistedRecord =
        serde_json::from_value(value).map_err(|e| format!("bad record shape: {}", e))?;

    let mut record = WorkRecord::new(date);
    record.clock_in = decode_time("clock_in", raw.clock_in.as_deref())?;
    record.clock_out = decode_time("clock_out", raw.clock_out.as_deref())?;
    record.break_minutes = raw.break_minutes;
    record.hourly_rate = raw.hourly_rate;
    record.location = raw.location;
    record.project = raw.project;
    record.memo = raw.memo;

    record.validate().map_err(|e| e.to_string())?;
    Ok(record)
}

fn decode_time(field: &str, value: Option<&str>) -> Result<Option<NaiveTime>, String> {
    match value {
        None => Ok(None),
        Some("") => Ok(None),
        Some(s) => parse_time(s)
            .map(Some)
            .ok_or_else(|| format!("{} '{}' is not HH:MM", field, s)),
    }
}

/// Encode records into the persisted map, keyed and ordered by date.
pub fn encode<'a>(
    records: impl Iterator<Item = &'a WorkRecord>,
) -> BTreeMap<String, PersistedRecord> {
    records
        .map(|r| (r.date.format("%Y-%m-%d").to_string(), PersistedRecord::from(r)))
        .collect()
}
