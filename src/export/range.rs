use crate::core::calculator::age::days_in_month;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse `--range` into inclusive date bounds.
///
/// Supported:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `YYYY:YYYY`
/// - `YYYY-MM:YYYY-MM`
/// - `YYYY-MM-DD:YYYY-MM-DD`
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::Export(
                "start and end must have the same format".into(),
            ));
        }

        let (d1, _) = parse_single(start)?;
        let (_, d2) = parse_single(end)?;

        if d2 < d1 {
            return Err(AppError::Export("range end precedes range start".into()));
        }

        Ok((d1, d2))
    } else {
        parse_single(r.trim())
    }
}

/// One period expression expanded to its first and last day.
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::Export(format!("invalid year: {p}")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::Export(format!("invalid year: {p}")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::Export(format!("invalid year: {p}")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4]
                .parse()
                .map_err(|_| AppError::Export(format!("invalid month: {p}")))?;
            let m: u32 = p[5..7]
                .parse()
                .map_err(|_| AppError::Export(format!("invalid month: {p}")))?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::Export(format!("invalid month: {p}")))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, days_in_month(y, m))
                .ok_or_else(|| AppError::Export(format!("invalid month: {p}")))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::Export(format!("invalid date: {p}")))?;
            Ok((d, d))
        }
        _ => Err(AppError::Export(format!("unsupported range format: {p}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2025-06-18").unwrap(), (d("2025-06-18"), d("2025-06-18")));
    }

    #[test]
    fn ranges() {
        assert_eq!(
            parse_range("2024:2025").unwrap(),
            (d("2024-01-01"), d("2025-12-31"))
        );
        assert_eq!(
            parse_range("2025-06:2025-08").unwrap(),
            (d("2025-06-01"), d("2025-08-31"))
        );
        assert_eq!(
            parse_range("2025-06-01:2025-06-10").unwrap(),
            (d("2025-06-01"), d("2025-06-10"))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_range("June").is_err());
        assert!(parse_range("2025-06:2025").is_err());
        assert!(parse_range("2025-08:2025-06").is_err());
    }
}
