use crate::errors::AppResult;
use crate::models::WorkRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory set of daily records, one per date, kept in date order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: BTreeMap<NaiveDate, WorkRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record at `record.date`.
    ///
    /// Rejects records that fail [`WorkRecord::validate`]; the store is left
    /// unchanged in that case.
    pub fn upsert(&mut self, record: WorkRecord) -> AppResult<()> {
        record.validate()?;
        tracing::debug!(date = %record.date, "upsert record");
        self.records.insert(record.date, record);
        Ok(())
    }

    pub fn get(&self, date: NaiveDate) -> Option<&WorkRecord> {
        self.records.get(&date)
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<WorkRecord> {
        self.records.remove(&date)
    }

    /// Records within `[start, end]`, ascending by date.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&WorkRecord> {
        if start > end {
            return Vec::new();
        }
        self.records.range(start..=end).map(|(_, r)| r).collect()
    }

    /// Latest record that was clocked in but not yet out.
    pub fn open_record(&self) -> Option<&WorkRecord> {
        self.records.values().rev().find(|r| r.is_open())
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
