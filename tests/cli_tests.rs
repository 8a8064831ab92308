mod common;
use common::{d, setup_data, t, wt};
use predicates::prelude::*;
use std::fs;
use worktime::JsonStorage;

#[test]
fn test_init_creates_empty_data_file() {
    let (home, data) = setup_data("cli_init");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args(["--data", &data_s, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert_eq!(fs::read_to_string(&data).expect("data file").trim(), "{}");
}

#[test]
fn test_add_and_day_summary() {
    let (home, data) = setup_data("cli_add_day");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-03-03", "--in", "09:00", "--out", "18:00", "--break",
            "60", "--rate", "1500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("08:00"))
        .stdout(predicate::str::contains("12000.00"));

    wt(home.path())
        .args(["--data", &data_s, "day", "2025-03-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("480 min"))
        .stdout(predicate::str::contains("12000.00"));

    let saved = fs::read_to_string(&data).expect("data file");
    assert!(saved.contains("\"2025-03-03\""));
    assert!(saved.contains("\"clock_in\": \"09:00\""));
}

#[test]
fn test_add_merges_into_existing_day() {
    let (home, data) = setup_data("cli_merge");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args(["--data", &data_s, "add", "2025-03-03", "--in", "09:00"])
        .assert()
        .success();

    wt(home.path())
        .args([
            "--data",
            &data_s,
            "add",
            "2025-03-03",
            "--out",
            "17:30",
            "--break-start",
            "12:00",
            "--break-end",
            "12:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("08:00"));
}

#[test]
fn test_add_rejects_out_before_in() {
    let (home, data) = setup_data("cli_reject");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-03-03", "--in", "22:00", "--out", "06:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid record"));

    assert!(!data.exists());
}

#[test]
fn test_add_rejects_bad_time() {
    let (home, data) = setup_data("cli_bad_time");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args(["--data", &data_s, "add", "2025-03-03", "--in", "9h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_break_exceeding_shift_is_reported() {
    let (home, data) = setup_data("cli_break_warn");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-03-03", "--in", "09:00", "--out", "12:00", "--break",
            "240",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds"));
}

#[test]
fn test_week_partial_rate_note() {
    let (home, data) = setup_data("cli_week");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-03-03", "--in", "09:00", "--out", "17:00", "--rate",
            "10",
        ])
        .assert()
        .success();
    wt(home.path())
        .args(["--data", &data_s, "add", "2025-03-05", "--in", "09:00", "--out", "13:00"])
        .assert()
        .success();

    wt(home.path())
        .args(["--data", &data_s, "week", "2025-03-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-03 .. 2025-03-09"))
        .stdout(predicate::str::contains("720 min"))
        .stdout(predicate::str::contains("80.00"))
        .stdout(predicate::str::contains("partial data"));
}

#[test]
fn test_month_by_project() {
    let (home, data) = setup_data("cli_month");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-04-02", "--in", "09:00", "--out", "11:00", "--project",
            "Alpha",
        ])
        .assert()
        .success();

    wt(home.path())
        .args(["--data", &data_s, "month", "2025-04", "--by", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("120 min"));
}

#[test]
fn test_del_with_yes() {
    let (home, data) = setup_data("cli_del");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args(["--data", &data_s, "add", "2025-03-03", "--in", "09:00", "--out", "10:00"])
        .assert()
        .success();

    wt(home.path())
        .args(["--data", &data_s, "del", "2025-03-03", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    wt(home.path())
        .args(["--data", &data_s, "list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records"));
}

#[test]
fn test_del_without_confirmation_keeps_record() {
    let (home, data) = setup_data("cli_del_cancel");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args(["--data", &data_s, "add", "2025-03-03", "--in", "09:00", "--out", "10:00"])
        .assert()
        .success();

    wt(home.path())
        .args(["--data", &data_s, "del", "2025-03-03"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    assert!(fs::read_to_string(&data).expect("data").contains("2025-03-03"));
}

#[test]
fn test_punch_in_and_out() {
    let (home, data) = setup_data("cli_punch");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args(["--data", &data_s, "punch", "in", "--date", "2025-03-03", "--at", "08:30"])
        .assert()
        .success();

    // default fixed break of 60 minutes applies
    wt(home.path())
        .args(["--data", &data_s, "punch", "out", "--at", "17:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-03"))
        .stdout(predicate::str::contains("08:00"));

    wt(home.path())
        .args(["--data", &data_s, "punch", "out", "--at", "18:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No open record"));
}

#[test]
fn test_list_skips_malformed_entries() {
    let (home, data) = setup_data("cli_malformed");
    let data_s = data.to_string_lossy().to_string();
    fs::write(
        &data,
        r#"{
  "2025-03-03": { "clock_in": "09:00", "clock_out": "17:00", "break_minutes": 30, "hourly_rate": null },
  "2025-13-40": { "clock_in": "09:00", "clock_out": "17:00", "break_minutes": 0, "hourly_rate": null }
}"#,
    )
    .expect("write fixture");

    wt(home.path())
        .args(["--data", &data_s, "list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped entry '2025-13-40'"))
        .stdout(predicate::str::contains("07:30"));
}

#[test]
fn test_export_csv_filtered_by_project() {
    let (home, data) = setup_data("cli_export");
    let data_s = data.to_string_lossy().to_string();
    let out = home.path().join("out.csv");
    let out_s = out.to_string_lossy().to_string();

    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-03-03", "--in", "09:00", "--out", "17:00", "--rate",
            "20", "--project", "Alpha",
        ])
        .assert()
        .success();
    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-03-04", "--in", "09:00", "--out", "12:00",
            "--project", "Beta",
        ])
        .assert()
        .success();

    wt(home.path())
        .args([
            "--data", &data_s, "export", "--file", &out_s, "--range", "2025-03", "--project",
            "Alpha",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,clock_in,clock_out,break_minutes,worked_minutes,wage,location,project")
    );
    assert_eq!(lines.next(), Some("2025-03-03,09:00,17:00,0,480,160.00,,Alpha"));
    assert_eq!(lines.next(), None);

    // existing file is kept without --force
    wt(home.path())
        .args(["--data", &data_s, "export", "--file", &out_s])
        .assert()
        .failure();

    wt(home.path())
        .args([
            "--data", &data_s, "export", "--file", &out_s, "--format", "json", "--force",
        ])
        .assert()
        .success();
    let json = fs::read_to_string(&out).expect("exported json");
    assert!(json.contains("\"project\": \"Beta\""));
}

#[test]
fn test_month_summary_from_year_month() {
    let (home, data) = setup_data("cli_month_ym");
    let data_s = data.to_string_lossy().to_string();

    for date in ["2024-02-01", "2024-02-29", "2024-03-01"] {
        wt(home.path())
            .args(["--data", &data_s, "add", date, "--in", "09:00", "--out", "10:00"])
            .assert()
            .success();
    }

    wt(home.path())
        .args(["--data", &data_s, "month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month 2024-02-01 .. 2024-02-29"))
        .stdout(predicate::str::contains("120 min"));

    wt(home.path())
        .args(["--data", &data_s, "month", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2024-13"));
}

#[test]
fn test_punch_in_reopens_complete_day() {
    let (home, data) = setup_data("cli_punch_reopen");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args([
            "--data", &data_s, "add", "2025-03-03", "--in", "09:00", "--out", "17:00", "--break",
            "30", "--rate", "20", "--project", "Alpha",
        ])
        .assert()
        .success();

    wt(home.path())
        .args(["--data", &data_s, "punch", "in", "--date", "2025-03-03", "--at", "13:00"])
        .assert()
        .success();

    let report = JsonStorage::new(&data).load().expect("reload");
    let record = report.store.get(d("2025-03-03")).expect("record kept");
    assert_eq!(record.clock_in, Some(t("13:00")));
    assert_eq!(record.clock_out, None);
    assert_eq!(record.break_minutes, 0);
    assert_eq!(record.hourly_rate, Some(20.0));
    assert_eq!(record.project, "Alpha");
}

#[test]
fn test_totals_by_location_all_time() {
    let (home, data) = setup_data("cli_totals");
    let data_s = data.to_string_lossy().to_string();

    for (date, loc) in [("2024-06-03", "Home"), ("2025-03-03", "Home"), ("2025-03-04", "Office")] {
        wt(home.path())
            .args(["--data", &data_s, "add", date, "--in", "09:00", "--out", "11:00", "--loc", loc])
            .assert()
            .success();
    }

    wt(home.path())
        .args(["--data", &data_s, "totals", "--by", "location"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all time"))
        .stdout(predicate::str::contains("Home"))
        .stdout(predicate::str::contains("Office"))
        .stdout(predicate::str::contains("360 min"));

    wt(home.path())
        .args(["--data", &data_s, "totals", "--by", "location", "--period", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("240 min"));
}

#[test]
fn test_week_at_last_representable_date() {
    let (home, data) = setup_data("cli_week_edge");
    let data_s = data.to_string_lossy().to_string();

    wt(home.path())
        .args(["--data", &data_s, "week", "+262142-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 min"));
}
