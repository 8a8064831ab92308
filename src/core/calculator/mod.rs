pub mod wage;
pub mod worked;

pub use worked::{WorkedTime, split_overtime, worked_minutes};

/// Calculation rules applied by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Worked time is rounded half-up to this step; 1 means exact minutes.
    pub rounding_minutes: u32,
    pub overtime_threshold_minutes: i64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            rounding_minutes: 1,
            overtime_threshold_minutes: 8 * 60,
        }
    }
}
