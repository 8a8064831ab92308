use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::WorkRecord;
use crate::models::record::break_minutes_from_window;
use chrono::{NaiveDate, NaiveTime};

/// How the user supplied the break for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakInput {
    Minutes(u32),
    Window { start: NaiveTime, end: NaiveTime },
}

/// Fields to change on a day's record; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub break_input: Option<BreakInput>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    pub project: Option<String>,
    pub memo: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Merge `edit` into the record for `date` (creating it if needed) and store it.
    ///
    /// `default_rate` fills the rate only when neither the edit nor the
    /// existing record carries one.
    pub fn apply(
        store: &mut RecordStore,
        date: NaiveDate,
        edit: RecordEdit,
        default_rate: Option<f64>,
    ) -> AppResult<WorkRecord> {
        let mut record = store
            .get(date)
            .cloned()
            .unwrap_or_else(|| WorkRecord::new(date));

        if let Some(t) = edit.clock_in {
            record.clock_in = Some(t);
        }
        if let Some(t) = edit.clock_out {
            record.clock_out = Some(t);
        }

        match edit.break_input {
            Some(BreakInput::Minutes(m)) => record.break_minutes = m,
            Some(BreakInput::Window { start, end }) => {
                record.break_minutes = break_minutes_from_window(date, start, end)?;
            }
            None => {}
        }

        record.hourly_rate = edit.hourly_rate.or(record.hourly_rate).or(default_rate);

        if let Some(loc) = edit.location {
            record.location = loc.trim().to_string();
        }
        if let Some(project) = edit.project {
            record.project = project.trim().to_string();
        }
        if let Some(memo) = edit.memo {
            record.memo = memo.trim().to_string();
        }

        store.upsert(record.clone())?;
        Ok(record)
    }
}
