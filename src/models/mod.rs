pub mod record;
pub mod summary;
pub mod wage;

pub use record::WorkRecord;
pub use summary::{
    DailyTotal, DayBreakdown, GroupBy, GroupTotal, MonthlyTotal, OvertimeSplit, Warning,
    WeeklyTotal,
};
pub use wage::Wage;
