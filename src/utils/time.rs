//! `HH:MM` parsing and formatting, minute differences and rounding steps.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Round half-up to the nearest multiple of `step` minutes. Steps of 0 or 1 leave the value as is.
pub fn round_to_step(mins: i64, step: u32) -> i64 {
    if step <= 1 {
        return mins;
    }
    let r = step as i64;
    (mins + r / 2) / r * r
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
