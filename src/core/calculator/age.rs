//! Human-readable age calculation.
//!
//! Chrono has no built-in year/month/day diff, so the calendar borrowing
//! rules are implemented manually: day underflow borrows from the previous
//! month's length, month underflow borrows a year. Handles leap years and
//! varying month lengths.

use crate::utils::date::parse_timestamp;
use chrono::Datelike;

/// Returned when the target date is exactly the birth date.
pub const BIRTH_DAY_MARKER: &str = "On the birth day";

/// Returned when the target date is before the birth date.
pub const PRE_BIRTH_MARKER: &str = "Pre-birth";

/// Average Gregorian month length in days.
///
/// Deliberate approximation, not a calendar-exact month count: the
/// vaccination-schedule month markers are calibrated against it, so it
/// must not be "fixed" to real month arithmetic.
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Age at `target` as a compact string: `"2 years 3 m 5 d"`.
///
/// Only non-zero components are rendered. Invalid input on either side
/// degrades to an empty string; this never fails.
pub fn calculate_age(birth: &str, target: &str) -> String {
    let (Some(birth_ts), Some(target_ts)) = (parse_timestamp(birth), parse_timestamp(target))
    else {
        return String::new();
    };

    let b = birth_ts.date();
    let t = target_ts.date();

    let mut years = t.year() - b.year();
    let mut months = t.month() as i32 - b.month() as i32;
    let mut days = t.day() as i32 - b.day() as i32;

    // Fix day underflow by borrowing the previous month's length
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if t.month() == 1 {
            (t.year() - 1, 12)
        } else {
            (t.year(), t.month() - 1)
        };

        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    if years == 0 && months == 0 && days == 0 {
        return BIRTH_DAY_MARKER.to_string();
    }
    if years < 0 {
        return PRE_BIRTH_MARKER.to_string();
    }

    let mut result = String::new();
    if years > 0 {
        result.push_str(&format!("{} year{} ", years, if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        result.push_str(&format!("{} m ", months));
    }
    if days > 0 {
        result.push_str(&format!("{} d", days));
    }
    result.trim().to_string()
}

/// Age at `target` as a continuous month count, clamped to >= 0.
///
/// Uses [`AVG_DAYS_PER_MONTH`] rather than calendar months; downstream
/// month thresholds (vaccine due markers, plagiocephaly curve) expect
/// exactly this scale.
pub fn calculate_age_in_months(birth: &str, target: &str) -> f64 {
    let (Some(birth_ts), Some(target_ts)) = (parse_timestamp(birth), parse_timestamp(target))
    else {
        return 0.0;
    };

    let diff_ms = (target_ts - birth_ts).num_milliseconds() as f64;
    (diff_ms / (MS_PER_DAY * AVG_DAYS_PER_MONTH)).max(0.0)
}

/// Number of days in a given year/month (handles leap years).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // unreachable for valid chrono dates, keeps the function total
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Months, NaiveDate};

    #[test]
    fn plain_difference() {
        assert_eq!(calculate_age("2024-01-10", "2025-03-15"), "1 year 2 m 5 d");
        assert_eq!(calculate_age("2023-01-10", "2025-03-15"), "2 years 2 m 5 d");
    }

    #[test]
    fn zero_components_are_omitted() {
        assert_eq!(calculate_age("2024-01-10", "2025-01-10"), "1 year");
        assert_eq!(calculate_age("2024-01-10", "2024-03-10"), "2 m");
        assert_eq!(calculate_age("2024-01-10", "2024-01-15"), "5 d");
        assert_eq!(calculate_age("2024-01-10", "2025-03-10"), "1 year 2 m");
    }

    #[test]
    fn day_underflow_borrows_previous_month_length() {
        // Borrow from a 28-day February
        assert_eq!(calculate_age("2025-01-31", "2025-03-05"), "1 m 2 d");
        // Borrow from a leap-year February
        assert_eq!(calculate_age("2024-01-31", "2024-03-05"), "1 m 3 d");
    }

    #[test]
    fn month_underflow_borrows_year() {
        assert_eq!(calculate_age("2024-11-10", "2025-02-10"), "3 m");
        assert_eq!(calculate_age("2024-12-31", "2025-01-01"), "1 d");
    }

    #[test]
    fn birth_day_marker() {
        assert_eq!(calculate_age("2025-06-01", "2025-06-01"), BIRTH_DAY_MARKER);
        // Time of day on the same date does not matter
        assert_eq!(
            calculate_age("2025-06-01T04:00:00", "2025-06-01T22:00:00"),
            BIRTH_DAY_MARKER
        );
    }

    #[test]
    fn pre_birth_marker() {
        assert_eq!(calculate_age("2025-06-01", "2025-05-31"), PRE_BIRTH_MARKER);
        assert_eq!(calculate_age("2025-06-01", "2024-06-01"), PRE_BIRTH_MARKER);
    }

    #[test]
    fn invalid_input_yields_empty_string() {
        assert_eq!(calculate_age("", "2025-06-01"), "");
        assert_eq!(calculate_age("2025-06-01", "not-a-date"), "");
        assert_eq!(calculate_age("junk", "junk"), "");
    }

    /// Reconstruction property: birth + years + months + days lands back
    /// on target when the day offset is applied with calendar-aware
    /// borrowing (month shift unclamped, days counted from the shifted
    /// month start).
    #[test]
    fn age_components_reconstruct_target() {
        let pairs = [
            ("2024-02-29", "2025-03-01"),
            ("2024-01-31", "2025-03-30"),
            ("2023-12-15", "2025-01-14"),
            ("2025-01-01", "2025-12-31"),
            ("2024-06-10", "2026-06-09"),
        ];

        for (birth, target) in pairs {
            let b = NaiveDate::parse_from_str(birth, "%Y-%m-%d").unwrap();
            let t = NaiveDate::parse_from_str(target, "%Y-%m-%d").unwrap();

            // Recompute the raw components the same way the calculator does
            let rendered = calculate_age(birth, target);
            let (years, months, days) = parse_rendered(&rendered);

            let shifted_month_start = b
                .with_day(1)
                .unwrap()
                .checked_add_months(Months::new(years * 12 + months))
                .unwrap();
            let reconstructed = shifted_month_start
                .checked_add_days(chrono::Days::new((b.day() - 1 + days) as u64))
                .unwrap();

            assert_eq!(reconstructed, t, "({birth}, {target}) -> {rendered}");
        }
    }

    fn parse_rendered(s: &str) -> (u32, u32, u32) {
        let mut years = 0;
        let mut months = 0;
        let mut days = 0;
        let tokens: Vec<&str> = s.split_whitespace().collect();
        for pair in tokens.chunks(2) {
            let n: u32 = pair[0].parse().unwrap();
            match pair[1] {
                "year" | "years" => years = n,
                "m" => months = n,
                "d" => days = n,
                other => panic!("unexpected unit {other}"),
            }
        }
        (years, months, days)
    }

    #[test]
    fn months_float_is_monotonic_and_clamped() {
        let birth = "2025-01-01T00:00:00";
        let mut prev = -1.0;
        for target in [
            "2024-12-01", // before birth -> clamped to 0
            "2025-01-01",
            "2025-01-16",
            "2025-02-01",
            "2025-07-01",
            "2026-01-01",
        ] {
            let m = calculate_age_in_months(birth, target);
            assert!(m >= 0.0);
            assert!(m >= prev, "not monotonic at {target}");
            prev = m;
        }
    }

    #[test]
    fn months_float_uses_average_month_constant() {
        // Exactly 30.44 days after birth -> 1.0 month
        let m = calculate_age_in_months("2025-01-01T00:00:00", "2025-01-31T10:33:36");
        assert!((m - 1.0).abs() < 1e-6, "got {m}");
    }

    #[test]
    fn months_float_invalid_input_is_zero() {
        assert_eq!(calculate_age_in_months("", "2025-01-01"), 0.0);
        assert_eq!(calculate_age_in_months("2025-01-01", "nope"), 0.0);
    }
}
