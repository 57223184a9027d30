use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EventExport;
use crate::export::range::parse_range;
use crate::state::AppState;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use crate::utils::path::expand_tilde;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;

/// High-level export logic over the diary.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the event list.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or a period expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` ranges)
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(pool, date_bounds)?;

        if rows.is_empty() {
            warning("No events found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                export_pdf(&rows, path, &title)?
            }
        }

        Ok(())
    }
}

/// Load events from the store, apply the bounds, and flatten to rows in
/// ascending timestamp order. With no bounds, records whose timestamp
/// does not parse are kept (at the end); with bounds they cannot be
/// compared and are skipped.
fn load_rows(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EventExport>> {
    let state = AppState::load(pool)?;

    let mut keyed: Vec<(Option<chrono::NaiveDateTime>, EventExport)> = state
        .events
        .iter()
        .filter_map(|e| {
            let ts = e.parsed_timestamp();
            match (bounds, ts) {
                (None, ts) => Some((ts, EventExport::from_event(e))),
                (Some(_), None) => None,
                (Some((start, end)), Some(ts)) => {
                    let d = ts.date();
                    (d >= start && d <= end).then(|| (Some(ts), EventExport::from_event(e)))
                }
            }
        })
        .collect();

    keyed.sort_by_key(|(ts, _)| match ts {
        Some(t) => (0, *t),
        None => (1, chrono::NaiveDateTime::MAX),
    });

    Ok(keyed.into_iter().map(|(_, row)| row).collect())
}

/// Title shown on the PDF header, derived from the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period.as_ref().filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return "Baby diary".to_string();
    };

    match p.len() {
        // YYYY
        4 => format!("Baby diary for year {}", p),

        // YYYY-MM
        7 => {
            let parts: Vec<&str> = p.split('-').collect();
            if parts.len() == 2 {
                format!("Baby diary for {} {}", month_name(parts[1]), parts[0])
            } else {
                "Baby diary".to_string()
            }
        }

        // YYYY-MM-DD
        10 => format!("Baby diary for {}", p),

        // start:end
        _ => match p.split_once(':') {
            Some((start, end)) => format!("Baby diary from {} to {}", start, end),
            None => "Baby diary".to_string(),
        },
    }
}
