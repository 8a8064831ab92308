#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use worktime::WorkRecord;

/// Binary under test, isolated from the user's real config directory.
pub fn wt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("worktime");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("RUST_LOG");
    cmd
}

/// A scratch HOME plus a data file path inside it.
pub fn setup_data(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let data = dir.path().join(format!("{}_work_data.json", name));
    (dir, data)
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

/// Complete day with a break and an optional rate.
pub fn day(date: &str, start: &str, end: &str, brk: u32, rate: Option<f64>) -> WorkRecord {
    let mut r = WorkRecord::with_times(d(date), t(start), t(end)).break_minutes(brk);
    r.hourly_rate = rate;
    r
}
