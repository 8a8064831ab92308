// src/export/model.rs

use crate::core::calculator::{Rules, worked_minutes};
use crate::core::calculator::wage::record_wage;
use crate::models::WorkRecord;
use crate::utils::time::format_time;
use serde::Serialize;

/// One exported day, flattened for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub break_minutes: u32,
    pub worked_minutes: i64,
    pub wage: Option<f64>,
    pub location: String,
    pub project: String,
}

impl RecordExport {
    pub fn from_record(r: &WorkRecord, rules: &Rules) -> Self {
        let worked = worked_minutes(r, rules).minutes;
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            clock_in: r.clock_in.map(format_time).unwrap_or_default(),
            clock_out: r.clock_out.map(format_time).unwrap_or_default(),
            break_minutes: r.break_minutes,
            worked_minutes: worked,
            wage: record_wage(r, worked).map(|w| w.as_f64()),
            location: r.location.clone(),
            project: r.project.clone(),
        }
    }
}

/// Header per CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "clock_in",
        "clock_out",
        "break_minutes",
        "worked_minutes",
        "wage",
        "location",
        "project",
    ]
}

pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.clock_in.clone(),
        e.clock_out.clone(),
        e.break_minutes.to_string(),
        e.worked_minutes.to_string(),
        e.wage.map(|w| format!("{:.2}", w)).unwrap_or_default(),
        e.location.clone(),
        e.project.clone(),
    ]
}
