mod common;
use common::{d, day, t};
use worktime::RecordStore;
use worktime::WorkRecord;
use worktime::errors::AppError;

#[test]
fn upsert_replaces_existing_date() {
    let mut store = RecordStore::new();
    store
        .upsert(day("2025-03-03", "09:00", "17:00", 30, None))
        .expect("first insert");
    store
        .upsert(day("2025-03-03", "10:00", "18:00", 45, Some(20.0)))
        .expect("replace");

    assert_eq!(store.len(), 1);
    let r = store.get(d("2025-03-03")).expect("record present");
    assert_eq!(r.clock_in, Some(t("10:00")));
    assert_eq!(r.break_minutes, 45);
    assert_eq!(r.hourly_rate, Some(20.0));
}

#[test]
fn remove_is_noop_for_missing_date() {
    let mut store = RecordStore::new();
    store
        .upsert(day("2025-03-03", "09:00", "17:00", 0, None))
        .expect("insert");

    assert!(store.remove(d("2025-03-04")).is_none());
    assert_eq!(store.len(), 1);
    assert!(store.remove(d("2025-03-03")).is_some());
    assert!(store.is_empty());
}

#[test]
fn range_is_inclusive_and_sorted() {
    let mut store = RecordStore::new();
    for date in ["2025-03-10", "2025-03-01", "2025-03-05", "2025-02-28"] {
        store
            .upsert(day(date, "09:00", "17:00", 0, None))
            .expect("insert");
    }

    let dates: Vec<_> = store
        .range(d("2025-03-01"), d("2025-03-10"))
        .iter()
        .map(|r| r.date)
        .collect();
    assert_eq!(dates, vec![d("2025-03-01"), d("2025-03-05"), d("2025-03-10")]);

    assert!(store.range(d("2025-03-10"), d("2025-03-01")).is_empty());
}

#[test]
fn rejects_clock_out_without_clock_in() {
    let mut store = RecordStore::new();
    let mut r = WorkRecord::new(d("2025-03-03"));
    r.clock_out = Some(t("17:00"));

    let err = store.upsert(r).expect_err("must be rejected");
    assert!(matches!(err, AppError::InvalidRecord { .. }));
    assert!(store.is_empty());
}

#[test]
fn rejects_overnight_and_negative_rate() {
    let mut store = RecordStore::new();

    let overnight = day("2025-03-03", "22:00", "06:00", 0, None);
    assert!(matches!(
        store.upsert(overnight),
        Err(AppError::InvalidRecord { .. })
    ));

    let negative = day("2025-03-03", "09:00", "17:00", 0, Some(-1.0));
    assert!(matches!(
        store.upsert(negative),
        Err(AppError::InvalidRecord { .. })
    ));

    let nan = day("2025-03-03", "09:00", "17:00", 0, Some(f64::NAN));
    assert!(store.upsert(nan).is_err());
}

#[test]
fn accepts_break_longer_than_shift() {
    let mut store = RecordStore::new();
    store
        .upsert(day("2025-03-03", "09:00", "12:00", 240, None))
        .expect("excess break is reported by the aggregator, not rejected");
    assert_eq!(store.len(), 1);
}

#[test]
fn break_window_is_normalized_to_minutes() {
    let r = WorkRecord::with_times(d("2025-03-03"), t("09:00"), t("18:00"))
        .break_window(t("12:15"), t("13:00"))
        .expect("valid window");
    assert_eq!(r.break_minutes, 45);

    let reversed =
        WorkRecord::with_times(d("2025-03-03"), t("09:00"), t("18:00")).break_window(t("13:00"), t("12:00"));
    assert!(reversed.is_err());
}

#[test]
fn open_record_is_latest_unclosed_day() {
    let mut store = RecordStore::new();
    let mut open_old = WorkRecord::new(d("2025-03-01"));
    open_old.clock_in = Some(t("09:00"));
    let mut open_new = WorkRecord::new(d("2025-03-04"));
    open_new.clock_in = Some(t("08:30"));

    store.upsert(open_old).expect("insert");
    store.upsert(open_new).expect("insert");
    store
        .upsert(day("2025-03-05", "09:00", "17:00", 0, None))
        .expect("insert");

    assert_eq!(store.open_record().map(|r| r.date), Some(d("2025-03-04")));
}
