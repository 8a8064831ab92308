use serde::Serialize;
use std::fmt;

/// A monetary amount already rounded to two decimal places.
///
/// Stored as integer minor units so totals are printed and compared exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Wage {
    cents: i64,
}

impl Wage {
    pub const ZERO: Wage = Wage { cents: 0 };

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Round `minutes × rate` sums (rate per hour) half-up to the cent.
    ///
    /// `rate_minutes` is `Σ minutes_i × rate_i`, left unrounded by callers.
    pub fn from_rate_minutes(rate_minutes: f64) -> Self {
        let cents = (rate_minutes * 100.0 / 60.0).round();
        Self {
            cents: cents as i64,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Wage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
