//! Event-list aggregations behind the diary, status and chart views.
//!
//! Every function here guards on timestamp validity before using a record
//! as a sort or bucket key: a malformed timestamp drops the record from
//! the aggregation, it never panics or errors.

use crate::models::reminder::Reminder;
use crate::models::{EventKind, LoggedEvent};
use crate::utils::date::{day_label, parse_date, short_day_label};
use chrono::{NaiveDate, NaiveDateTime};

/// Diary filter bar selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFilter {
    All,
    /// The milestone meta-category (all milestone kinds at once).
    Milestones,
    Kind(EventKind),
}

impl EventFilter {
    /// Parse the CLI filter key: `all`, `milestone`, or a kind name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(EventFilter::All),
            "milestone" | "milestones" => Some(EventFilter::Milestones),
            other => EventKind::from_str(other).map(EventFilter::Kind),
        }
    }

    pub fn matches(&self, kind: EventKind) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Milestones => kind.is_milestone(),
            EventFilter::Kind(k) => *k == kind,
        }
    }
}

/// One diary section: a calendar-day label and its events, newest first.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub label: String,
    pub events: Vec<LoggedEvent>,
}

/// Filter, then group by calendar-day label, newest day first; within a
/// day events keep descending-timestamp order. Records without a valid
/// timestamp are skipped.
pub fn group_by_day(events: &[LoggedEvent], filter: &EventFilter) -> Vec<DayGroup> {
    let mut valid: Vec<(NaiveDateTime, &LoggedEvent)> = events
        .iter()
        .filter(|e| filter.matches(e.kind()))
        .filter_map(|e| e.parsed_timestamp().map(|ts| (ts, e)))
        .collect();

    valid.sort_by(|a, b| b.0.cmp(&a.0));

    let mut groups: Vec<DayGroup> = Vec::new();
    for (ts, event) in valid {
        let label = day_label(&ts);
        match groups.iter().position(|g| g.label == label) {
            Some(i) => groups[i].events.push(event.clone()),
            None => groups.push(DayGroup {
                label,
                events: vec![event.clone()],
            }),
        }
    }

    groups
}

/// The most recent event matching `pred`, by timestamp. Ties keep the
/// first-encountered record. `None` when nothing matches.
pub fn latest_matching<'a, F>(events: &'a [LoggedEvent], pred: F) -> Option<&'a LoggedEvent>
where
    F: Fn(&LoggedEvent) -> bool,
{
    let mut best: Option<(NaiveDateTime, &LoggedEvent)> = None;

    for event in events.iter().filter(|e| pred(e)) {
        let Some(ts) = event.parsed_timestamp() else {
            continue;
        };
        if best.map(|(b, _)| ts > b).unwrap_or(true) {
            best = Some((ts, event));
        }
    }

    best.map(|(_, e)| e)
}

/// Latest event of one kind: current weight, last feeding, and so on.
pub fn latest_of_kind(events: &[LoggedEvent], kind: EventKind) -> Option<&LoggedEvent> {
    latest_matching(events, |e| e.kind() == kind)
}

/// Latest milestone of any kind, for the "last achievement" tile.
pub fn latest_milestone(events: &[LoggedEvent]) -> Option<&LoggedEvent> {
    latest_matching(events, |e| e.kind().is_milestone())
}

/// Whether a milestone kind has been logged at all; drives the
/// completed/pending toggle on the pinned-milestone list.
pub fn milestone_logged(events: &[LoggedEvent], kind: EventKind) -> bool {
    events.iter().any(|e| e.kind() == kind)
}

/// One x-axis point of the dual-axis growth chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthPoint {
    /// Compact day label (`"03/08"`), the chart's x-axis key.
    pub label: String,
    /// Timestamp of the first measurement seen that day, for ordering.
    pub timestamp: NaiveDateTime,
    pub weight_kg: Option<f64>,
    pub length_cm: Option<f64>,
}

/// Chronological weight/length series with same-day measurements merged
/// into a single point, so the chart never plots duplicate x-axis keys.
/// When a day holds several measurements of one type, the latest wins.
pub fn growth_series(events: &[LoggedEvent]) -> Vec<GrowthPoint> {
    use crate::models::EventDetail;

    let mut relevant: Vec<(NaiveDateTime, &LoggedEvent)> = events
        .iter()
        .filter(|e| matches!(e.kind(), EventKind::Weight | EventKind::Length))
        .filter_map(|e| e.parsed_timestamp().map(|ts| (ts, e)))
        .collect();

    relevant.sort_by_key(|(ts, _)| *ts);

    let mut points: Vec<GrowthPoint> = Vec::new();
    for (ts, event) in relevant {
        let label = short_day_label(&ts);

        let idx = match points.iter().position(|p| p.label == label) {
            Some(i) => i,
            None => {
                points.push(GrowthPoint {
                    label,
                    timestamp: ts,
                    weight_kg: None,
                    length_cm: None,
                });
                points.len() - 1
            }
        };
        let point = &mut points[idx];

        match &event.detail {
            EventDetail::Weight { kg } => point.weight_kg = Some(*kg),
            EventDetail::Length { cm } => point.length_cm = Some(*cm),
            _ => {}
        }
    }

    points.sort_by_key(|p| p.timestamp);
    points
}

/// Earliest reminder on or after `today`, the "next appointment" tile.
pub fn next_reminder<'a>(reminders: &'a [Reminder], today: NaiveDate) -> Option<&'a Reminder> {
    reminders
        .iter()
        .filter_map(|r| parse_date(&r.date).map(|d| (d, r)))
        .filter(|(d, _)| *d >= today)
        .min_by(|a, b| (a.0, &a.1.time).cmp(&(b.0, &b.1.time)))
        .map(|(_, r)| r)
}
