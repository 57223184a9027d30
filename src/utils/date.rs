//! Date utilities: flexible timestamp parsing, diary day labels, and the
//! period grammar shared by `list --period` and `export --range`.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Current-time-derived id for events, reminders, documents and widgets.
pub fn fresh_id() -> String {
    Local::now().timestamp_millis().to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse the timestamp formats that show up in stored events: RFC 3339,
/// naive `YYYY-MM-DDTHH:MM[:SS]`, the same with a space, or a bare date
/// (taken as midnight). Anything else is unusable as a sort key.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// Diary group header: "Monday, 3 August".
pub fn day_label(dt: &NaiveDateTime) -> String {
    dt.format("%A, %-d %B").to_string()
}

/// Compact day label used as the growth-series x-axis key: "03/08".
pub fn short_day_label(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m").to_string()
}

pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().unwrap();
    let end_date = *e.last().unwrap();

    let mut out = Vec::new();
    let mut d = start_date;

    while d <= end_date {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    Ok(out)
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().unwrap();
    }

    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timestamp_accepts_common_shapes() {
        assert!(parse_timestamp("2025-06-01T08:30:00").is_some());
        assert!(parse_timestamp("2025-06-01T08:30:00.123").is_some());
        assert!(parse_timestamp("2025-06-01T08:30:00+02:00").is_some());
        assert!(parse_timestamp("2025-06-01 08:30").is_some());
        assert!(parse_timestamp("2025-06-01").is_some());
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2025-13-01").is_none());
    }

    #[test]
    fn bare_date_is_midnight() {
        let dt = parse_timestamp("2025-06-01").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn short_label_pads() {
        let dt = parse_timestamp("2025-06-01T10:00:00").unwrap();
        assert_eq!(short_day_label(&dt), "01/06");
    }

    #[test]
    fn period_month_expands_to_all_days() {
        let days = generate_from_period("2025-02").unwrap();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    }
}
