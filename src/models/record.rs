use crate::errors::{AppError, AppResult};
use crate::utils::time::minutes_between;
use chrono::{NaiveDate, NaiveTime};

/// One day of work: clock-in/out times, break and optional rate.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkRecord {
    pub date: NaiveDate,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub break_minutes: u32,
    pub hourly_rate: Option<f64>,
    pub location: String,
    pub project: String,
    pub memo: String,
}

impl WorkRecord {
    /// Empty record for `date`: no times, no break, no rate.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            clock_in: None,
            clock_out: None,
            break_minutes: 0,
            hourly_rate: None,
            location: String::new(),
            project: String::new(),
            memo: String::new(),
        }
    }

    /// Convenience constructor for a complete day.
    pub fn with_times(date: NaiveDate, clock_in: NaiveTime, clock_out: NaiveTime) -> Self {
        Self {
            clock_in: Some(clock_in),
            clock_out: Some(clock_out),
            ..Self::new(date)
        }
    }

    pub fn break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    /// Set the break from a start/end window instead of a minute count.
    pub fn break_window(mut self, start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        self.break_minutes = break_minutes_from_window(self.date, start, end)?;
        Ok(self)
    }

    /// True when the day was started but not yet closed.
    pub fn is_open(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_none()
    }

    /// Minutes between clock-in and clock-out, before the break is taken off.
    pub fn elapsed_minutes(&self) -> Option<i64> {
        match (self.clock_in, self.clock_out) {
            (Some(start), Some(end)) => Some(minutes_between(start, end)),
            _ => None,
        }
    }

    /// Structural checks applied before a record enters the store.
    pub fn validate(&self) -> AppResult<()> {
        if self.clock_out.is_some() && self.clock_in.is_none() {
            return Err(AppError::invalid_record(
                self.date,
                "clock-out given without clock-in",
            ));
        }

        if let (Some(start), Some(end)) = (self.clock_in, self.clock_out)
            && end < start
        {
            return Err(AppError::invalid_record(
                self.date,
                format!(
                    "clock-out {} is before clock-in {} (overnight shifts are not supported)",
                    end.format("%H:%M"),
                    start.format("%H:%M")
                ),
            ));
        }

        if let Some(rate) = self.hourly_rate
            && (!rate.is_finite() || rate < 0.0)
        {
            return Err(AppError::invalid_record(
                self.date,
                format!("hourly rate must be a non-negative number, got {rate}"),
            ));
        }

        Ok(())
    }
}

/// Normalize a `break_start`/`break_end` pair to a minute count.
pub fn break_minutes_from_window(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> AppResult<u32> {
    let minutes = minutes_between(start, end);
    u32::try_from(minutes).map_err(|_| {
        AppError::invalid_record(
            date,
            format!(
                "break end {} is before break start {}",
                end.format("%H:%M"),
                start.format("%H:%M")
            ),
        )
    })
}
