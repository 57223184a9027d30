use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::{DayGroup, EventFilter, group_by_day};
use crate::core::calculator::duration::calculate_duration;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventDetail;
use crate::models::LoggedEvent;
use crate::state::AppState;
use crate::utils::colors::{RESET, color_for_category};
use crate::utils::date;
use crate::utils::formatting::bold;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, period } = cmd {
        let filter = EventFilter::parse(filter)
            .ok_or_else(|| AppError::InvalidEventKind(filter.clone()))?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let state = AppState::load(&pool)?;

        let bounds = resolve_period(period)?;
        let events: Vec<LoggedEvent> = match bounds {
            None => state.events.clone(),
            Some((start, end)) => state
                .events
                .iter()
                .filter(|e| match e.parsed_timestamp() {
                    Some(ts) => ts.date() >= start && ts.date() <= end,
                    None => false,
                })
                .cloned()
                .collect(),
        };

        let groups = group_by_day(&events, &filter);

        if groups.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        for group in &groups {
            print_group(group);
        }
    }

    Ok(())
}

/// `--period` resolves to inclusive date bounds; `all` or absence means
/// no date filtering.
fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let Some(p) = period else {
        return Ok(None);
    };
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let days = if let Some((start, end)) = p.split_once(':') {
        date::generate_range(start, end).map_err(AppError::InvalidDate)?
    } else {
        date::generate_from_period(p).map_err(AppError::InvalidDate)?
    };

    match (days.first(), days.last()) {
        (Some(first), Some(last)) => Ok(Some((*first, *last))),
        _ => Err(AppError::InvalidDate(p.clone())),
    }
}

fn print_group(group: &DayGroup) {
    println!("\n{}", bold(&group.label.to_uppercase()));

    for event in &group.events {
        let time = event
            .parsed_timestamp()
            .map(|ts| ts.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string());

        let kind = event.kind();
        let color = color_for_category(kind.category());

        let mut line = format!(
            "  {}  {}{}{}",
            time,
            color,
            kind.label(),
            RESET
        );

        let summary = event.detail.summary();
        if !summary.is_empty() {
            line.push_str(&format!("  {}", summary));
        }

        // The stored window only shows times; add the computed length
        if let EventDetail::Sleep { start, end, .. } = &event.detail {
            let (s, e) = (clock(start), clock(end));
            line.push_str(&format!("  [{}]", calculate_duration(&s, &e)));
        }

        line.push_str(&format!("  (id {})", event.id));
        println!("{}", line);

        if let Some(notes) = &event.notes {
            let opts = textwrap::Options::new(72)
                .initial_indent("         ")
                .subsequent_indent("         ");
            println!("{}", textwrap::fill(notes, &opts));
        }
    }
}

fn clock(iso: &str) -> String {
    date::parse_timestamp(iso)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}
