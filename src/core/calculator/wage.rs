use crate::models::{Wage, WorkRecord};

/// Sums wage contributions over a window and rounds once at the end.
///
/// Every record in the window counts as either rated or unrated, whether or
/// not it has been clocked out yet.
#[derive(Debug, Default)]
pub struct WageAccumulator {
    rate_minutes: f64,
    rated: usize,
    unrated: usize,
}

impl WageAccumulator {
    pub fn add(&mut self, record: &WorkRecord, worked_minutes: i64) {
        match record.hourly_rate {
            Some(rate) => {
                self.rated += 1;
                self.rate_minutes += worked_minutes as f64 * rate;
            }
            None => self.unrated += 1,
        }
    }

    /// `None` when no record in the window carried a rate.
    pub fn wage(&self) -> Option<Wage> {
        (self.rated > 0).then(|| Wage::from_rate_minutes(self.rate_minutes))
    }

    /// Some records carry a rate and some do not.
    pub fn partial_rate(&self) -> bool {
        self.rated > 0 && self.unrated > 0
    }
}

/// Wage for a single record, rounded to the cent.
pub fn record_wage(record: &WorkRecord, worked_minutes: i64) -> Option<Wage> {
    record
        .hourly_rate
        .map(|rate| Wage::from_rate_minutes(worked_minutes as f64 * rate))
}
