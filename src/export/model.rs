use crate::models::LoggedEvent;
use serde::Serialize;

/// Flat row shape shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub category: String,
    pub detail: String,
    pub notes: String,
}

impl EventExport {
    pub fn from_event(event: &LoggedEvent) -> Self {
        let (date, time) = match event.parsed_timestamp() {
            Some(ts) => (
                ts.format("%Y-%m-%d").to_string(),
                ts.format("%H:%M").to_string(),
            ),
            // Keep malformed timestamps visible rather than dropping the row
            None => (event.timestamp.clone(), String::new()),
        };

        Self {
            id: event.id.clone(),
            date,
            time,
            kind: event.kind().as_str().to_string(),
            category: event.kind().category().as_str().to_string(),
            detail: event.detail.summary(),
            notes: event.notes.clone().unwrap_or_default(),
        }
    }
}

/// Header for CSV / JSON / XLSX / PDF.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "date", "time", "kind", "category", "detail", "notes"]
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.date.clone(),
        e.time.clone(),
        e.kind.clone(),
        e.category.clone(),
        e.detail.clone(),
        e.notes.clone(),
    ]
}

pub(crate) fn events_to_table(events: &[EventExport]) -> Vec<Vec<String>> {
    events.iter().map(event_to_row).collect()
}
