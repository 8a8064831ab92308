use super::wage::Wage;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Non-blocking annotation attached to an aggregation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Warning {
    /// The break is longer than the clocked time; worked time counted as 0.
    BreakExceedsElapsed {
        date: NaiveDate,
        break_minutes: u32,
        elapsed_minutes: i64,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::BreakExceedsElapsed {
                date,
                break_minutes,
                elapsed_minutes,
            } => write!(
                f,
                "{}: break of {} min exceeds the {} min clocked; worked time counted as 0",
                date, break_minutes, elapsed_minutes
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OvertimeSplit {
    pub regular_minutes: i64,
    pub overtime_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub wage: Option<Wage>,
    pub overtime: OvertimeSplit,
    pub warnings: Vec<Warning>,
}

impl DailyTotal {
    pub fn break_exceeds_elapsed(&self) -> bool {
        has_break_warning(&self.warnings)
    }
}

/// One row of a week-at-a-glance view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBreakdown {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub wage: Option<Wage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotal {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub worked_minutes: i64,
    pub wage: Option<Wage>,
    pub partial_rate: bool,
    pub daily_breakdown: Vec<DayBreakdown>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub worked_minutes: i64,
    pub wage: Option<Wage>,
    pub partial_rate: bool,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Location,
    Project,
}

pub const UNSET_LABEL: &str = "(unset)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub worked_minutes: i64,
    pub days: usize,
}

pub(crate) fn has_break_warning(warnings: &[Warning]) -> bool {
    warnings
        .iter()
        .any(|w| matches!(w, Warning::BreakExceedsElapsed { .. }))
}
