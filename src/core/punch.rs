//! Clock-in / clock-out at the current (or a given) time.

use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkRecord;
use chrono::{NaiveDate, NaiveTime};

/// Values applied to a fresh punch-in.
#[derive(Debug, Clone, Default)]
pub struct PunchDefaults {
    pub hourly_rate: Option<f64>,
    pub location: String,
}

pub struct PunchLogic;

impl PunchLogic {
    /// Start the day at `at`. An existing record for `date` is reopened:
    /// its clock-out and break are cleared, labels and rate are kept.
    pub fn punch_in(
        store: &mut RecordStore,
        date: NaiveDate,
        at: NaiveTime,
        defaults: &PunchDefaults,
    ) -> AppResult<WorkRecord> {
        let mut record = match store.get(date) {
            Some(existing) => existing.clone(),
            None => {
                let mut r = WorkRecord::new(date);
                r.location = defaults.location.clone();
                r
            }
        };

        record.clock_in = Some(at);
        record.clock_out = None;
        record.break_minutes = 0;
        if record.hourly_rate.is_none() {
            record.hourly_rate = defaults.hourly_rate;
        }

        store.upsert(record.clone())?;
        Ok(record)
    }

    /// Close the latest open record at `at`, applying `fixed_break` if no
    /// break was recorded.
    pub fn punch_out(
        store: &mut RecordStore,
        at: NaiveTime,
        fixed_break: u32,
    ) -> AppResult<WorkRecord> {
        let mut record = store.open_record().cloned().ok_or(AppError::NoOpenRecord)?;

        record.clock_out = Some(at);
        if record.break_minutes == 0 {
            record.break_minutes = fixed_break;
        }

        store.upsert(record.clone())?;
        Ok(record)
    }
}
