use super::Rules;
use crate::models::{OvertimeSplit, Warning, WorkRecord};
use crate::utils::time::round_to_step;

/// Worked time for a single record, plus the warning raised while computing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkedTime {
    pub minutes: i64,
    pub warning: Option<Warning>,
}

/// Clocked time minus break, floored at 0.
///
/// Incomplete records count as 0 without a warning.
pub fn worked_minutes(record: &WorkRecord, rules: &Rules) -> WorkedTime {
    let Some(elapsed) = record.elapsed_minutes() else {
        return WorkedTime {
            minutes: 0,
            warning: None,
        };
    };

    let break_minutes = record.break_minutes as i64;
    if break_minutes > elapsed {
        tracing::debug!(
            date = %record.date,
            break_minutes,
            elapsed,
            "break exceeds clocked time, counting 0"
        );
        return WorkedTime {
            minutes: 0,
            warning: Some(Warning::BreakExceedsElapsed {
                date: record.date,
                break_minutes: record.break_minutes,
                elapsed_minutes: elapsed,
            }),
        };
    }

    WorkedTime {
        minutes: round_to_step(elapsed - break_minutes, rules.rounding_minutes),
        warning: None,
    }
}

pub fn split_overtime(worked: i64, rules: &Rules) -> OvertimeSplit {
    let overtime = (worked - rules.overtime_threshold_minutes).max(0);
    OvertimeSplit {
        regular_minutes: worked - overtime,
        overtime_minutes: overtime,
    }
}
