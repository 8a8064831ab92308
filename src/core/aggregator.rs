use crate::core::calculator::wage::{WageAccumulator, record_wage};
use crate::core::calculator::{Rules, split_overtime, worked_minutes};
use crate::core::store::RecordStore;
use crate::models::summary::UNSET_LABEL;
use crate::models::{
    DailyTotal, DayBreakdown, GroupBy, GroupTotal, MonthlyTotal, OvertimeSplit, Warning,
    WeeklyTotal,
};
use crate::utils::date::{days_between, month_bounds, week_bounds};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Read-only totals over a [`RecordStore`].
pub struct Aggregator;

/// Totals shared by the week and month windows.
struct WindowTotals {
    worked_minutes: i64,
    acc: WageAccumulator,
    warnings: Vec<Warning>,
    per_day: BTreeMap<NaiveDate, DayBreakdown>,
}

impl Aggregator {
    pub fn daily_total(store: &RecordStore, date: NaiveDate, rules: &Rules) -> DailyTotal {
        let Some(record) = store.get(date) else {
            return DailyTotal {
                date,
                worked_minutes: 0,
                wage: None,
                overtime: OvertimeSplit::default(),
                warnings: Vec::new(),
            };
        };

        let worked = worked_minutes(record, rules);
        DailyTotal {
            date,
            worked_minutes: worked.minutes,
            wage: record_wage(record, worked.minutes),
            overtime: split_overtime(worked.minutes, rules),
            warnings: worked.warning.into_iter().collect(),
        }
    }

    /// Totals for the Monday-first week containing `reference`.
    pub fn weekly_total(store: &RecordStore, reference: NaiveDate, rules: &Rules) -> WeeklyTotal {
        let (start, end) = week_bounds(reference);
        let totals = Self::window(store, start, end, rules);

        let daily_breakdown = days_between(start, end)
            .into_iter()
            .map(|date| {
                totals.per_day.get(&date).cloned().unwrap_or(DayBreakdown {
                    date,
                    worked_minutes: 0,
                    wage: None,
                })
            })
            .collect();

        WeeklyTotal {
            start,
            end,
            worked_minutes: totals.worked_minutes,
            wage: totals.acc.wage(),
            partial_rate: totals.acc.partial_rate(),
            daily_breakdown,
            warnings: totals.warnings,
        }
    }

    /// Totals for the calendar month containing `reference`.
    pub fn monthly_total(
        store: &RecordStore,
        reference: NaiveDate,
        rules: &Rules,
    ) -> MonthlyTotal {
        let (start, end) = month_bounds(reference);
        let totals = Self::window(store, start, end, rules);

        MonthlyTotal {
            start,
            end,
            worked_minutes: totals.worked_minutes,
            wage: totals.acc.wage(),
            partial_rate: totals.acc.partial_rate(),
            warnings: totals.warnings,
        }
    }

    /// Worked minutes per location or project within the month of `reference`.
    pub fn monthly_breakdown(
        store: &RecordStore,
        reference: NaiveDate,
        group_by: GroupBy,
        rules: &Rules,
    ) -> Vec<GroupTotal> {
        let (start, end) = month_bounds(reference);
        Self::breakdown(store, start, end, group_by, rules)
    }

    /// Worked minutes per location or project between `start` and `end`,
    /// both included, ordered by key.
    ///
    /// Records without a location are left out of the location grouping.
    /// Records without a project are grouped under [`UNSET_LABEL`].
    pub fn breakdown(
        store: &RecordStore,
        start: NaiveDate,
        end: NaiveDate,
        group_by: GroupBy,
        rules: &Rules,
    ) -> Vec<GroupTotal> {
        let mut groups: BTreeMap<String, GroupTotal> = BTreeMap::new();

        for record in store.range(start, end) {
            let key = match group_by {
                GroupBy::Location if record.location.is_empty() => continue,
                GroupBy::Location => record.location.clone(),
                GroupBy::Project if record.project.is_empty() => UNSET_LABEL.to_string(),
                GroupBy::Project => record.project.clone(),
            };

            let worked = worked_minutes(record, rules).minutes;
            let entry = groups.entry(key.clone()).or_insert(GroupTotal {
                key,
                worked_minutes: 0,
                days: 0,
            });
            entry.worked_minutes += worked;
            entry.days += 1;
        }

        groups.into_values().collect()
    }

    fn window(store: &RecordStore, start: NaiveDate, end: NaiveDate, rules: &Rules) -> WindowTotals {
        let mut totals = WindowTotals {
            worked_minutes: 0,
            acc: WageAccumulator::default(),
            warnings: Vec::new(),
            per_day: BTreeMap::new(),
        };

        for record in store.range(start, end) {
            let worked = worked_minutes(record, rules);
            totals.worked_minutes += worked.minutes;
            totals.acc.add(record, worked.minutes);
            totals.warnings.extend(worked.warning);
            totals.per_day.insert(
                record.date,
                DayBreakdown {
                    date: record.date,
                    worked_minutes: worked.minutes,
                    wage: record_wage(record, worked.minutes),
                },
            );
        }

        totals
    }
}
