//! Elapsed time between two `HH:MM` clock readings.

use crate::utils::time::{minutes_since_midnight, parse_time};

/// Fallback rendering for missing or malformed input.
pub const ZERO_DURATION: &str = "0h 0m";

/// Duration between two times of day as `"{h}h {m}m"`.
///
/// An end before the start is taken as crossing midnight exactly once;
/// multi-day spans are not representable. Missing or unparseable input
/// degrades to [`ZERO_DURATION`].
pub fn calculate_duration(start: &str, end: &str) -> String {
    let (Some(s), Some(e)) = (parse_time(start), parse_time(end)) else {
        return ZERO_DURATION.to_string();
    };

    let mut diff = minutes_since_midnight(e) - minutes_since_midnight(s);
    if diff < 0 {
        diff += 24 * 60;
    }

    format!("{}h {}m", diff / 60, diff % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_span() {
        assert_eq!(calculate_duration("09:00", "10:30"), "1h 30m");
        assert_eq!(calculate_duration("09:00", "09:00"), "0h 0m");
    }

    #[test]
    fn overnight_wraps_once() {
        assert_eq!(calculate_duration("20:00", "07:00"), "11h 0m");
        assert_eq!(calculate_duration("23:59", "00:01"), "0h 2m");
    }

    #[test]
    fn missing_or_bad_input_degrades() {
        assert_eq!(calculate_duration("", "10:00"), ZERO_DURATION);
        assert_eq!(calculate_duration("10:00", ""), ZERO_DURATION);
        assert_eq!(calculate_duration("25:00", "10:00"), ZERO_DURATION);
        assert_eq!(calculate_duration("soon", "later"), ZERO_DURATION);
    }
}
