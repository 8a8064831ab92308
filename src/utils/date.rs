use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Monday..Sunday of the ISO week containing `d`, clamped to the
/// representable date range.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = d.weekday().num_days_from_monday() as i64;
    let start = d
        .checked_sub_signed(Duration::days(offset))
        .unwrap_or(NaiveDate::MIN);
    let end = start
        .checked_add_signed(Duration::days(6))
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// First and last day of the calendar month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = d.with_day(1).unwrap_or(d);
    let next_month = if d.month() == 12 {
        NaiveDate::from_ymd_opt(d.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(d.year(), d.month() + 1, 1)
    };
    let end = next_month.and_then(|n| n.pred_opt()).unwrap_or(d);
    (start, end)
}

/// Every date from `start` to `end`, both included.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt())
        .take_while(|d| *d <= end)
        .collect()
}

/// Accepts `YYYY-MM-DD` or `YYYY-MM` and returns a date inside that month.
pub fn parse_month_or_date(p: &str) -> Option<NaiveDate> {
    parse_date(p).or_else(|| parse_date(&format!("{}-01", p.trim())))
}

/// Resolve a period keyword into inclusive bounds.
///
/// Supported: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, `all`, or `A:B` with any of the
/// first three forms on either side.
pub fn bounds_from_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    if p == "all" {
        return Ok((NaiveDate::MIN, NaiveDate::MAX));
    }

    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = bounds_from_period(a)?;
        let (_, end) = bounds_from_period(b)?;
        return Ok((start, end));
    }

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(dm) = parse_date(&format!("{}-01", p)) {
        return Ok(month_bounds(dm));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((start, end));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    month_bounds(today())
}

pub fn weekday_str(d: NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
