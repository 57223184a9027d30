//! The application state object and its persistence boundary.
//!
//! Every command loads an [`AppState`] from the store, mutates it in
//! memory, and saves back the collections it touched. The event list is
//! owned here and changed only through whole-list replacement: append,
//! map-replace-by-id, filter-by-id-exclusion.

use crate::db::pool::DbPool;
use crate::db::state_store;
use crate::errors::AppResult;
use crate::models::document::BabyDocument;
use crate::models::profile::BabyProfile;
use crate::models::reminder::Reminder;
use crate::models::widget::DashboardWidget;
use crate::models::{EventKind, LoggedEvent};

pub const KEY_PROFILE: &str = "baby_profile";
pub const KEY_EVENTS: &str = "baby_events";
pub const KEY_REMINDERS: &str = "baby_reminders";
pub const KEY_DOCUMENTS: &str = "baby_documents";
pub const KEY_WIDGETS: &str = "baby_dashboard_widgets";
pub const KEY_PINNED: &str = "baby_pinned_milestones";
pub const KEY_THEME: &str = "app_theme";

/// Milestones surfaced on the status view until the user re-pins.
fn default_pinned() -> Vec<EventKind> {
    vec![EventKind::Smiled, EventKind::SatUp, EventKind::FirstTooth]
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub profile: BabyProfile,
    pub events: Vec<LoggedEvent>,
    pub reminders: Vec<Reminder>,
    pub documents: Vec<BabyDocument>,
    pub widgets: Vec<DashboardWidget>,
    pub pinned_milestones: Vec<EventKind>,
    pub dark_mode: bool,
}

impl AppState {
    /// Explicit load boundary: one read per logical key, every key
    /// falling back to its default when missing or corrupt.
    pub fn load(pool: &DbPool) -> AppResult<Self> {
        let conn = &pool.conn;

        let theme: String = state_store::load_or(conn, KEY_THEME, "light".to_string())?;

        Ok(Self {
            profile: state_store::load_or(conn, KEY_PROFILE, BabyProfile::default())?,
            events: state_store::load_or(conn, KEY_EVENTS, Vec::new())?,
            reminders: state_store::load_or(conn, KEY_REMINDERS, Vec::new())?,
            documents: state_store::load_or(conn, KEY_DOCUMENTS, Vec::new())?,
            widgets: state_store::load_or(conn, KEY_WIDGETS, Vec::new())?,
            pinned_milestones: state_store::load_or(conn, KEY_PINNED, default_pinned())?,
            dark_mode: theme == "dark",
        })
    }

    pub fn save_profile(&self, pool: &DbPool) -> AppResult<()> {
        state_store::save(&pool.conn, KEY_PROFILE, &self.profile)
    }

    pub fn save_events(&self, pool: &DbPool) -> AppResult<()> {
        state_store::save(&pool.conn, KEY_EVENTS, &self.events)
    }

    pub fn save_reminders(&self, pool: &DbPool) -> AppResult<()> {
        state_store::save(&pool.conn, KEY_REMINDERS, &self.reminders)
    }

    pub fn save_documents(&self, pool: &DbPool) -> AppResult<()> {
        state_store::save(&pool.conn, KEY_DOCUMENTS, &self.documents)
    }

    pub fn save_widgets(&self, pool: &DbPool) -> AppResult<()> {
        state_store::save(&pool.conn, KEY_WIDGETS, &self.widgets)
    }

    pub fn save_pinned(&self, pool: &DbPool) -> AppResult<()> {
        state_store::save(&pool.conn, KEY_PINNED, &self.pinned_milestones)
    }

    pub fn save_theme(&self, pool: &DbPool) -> AppResult<()> {
        let theme = if self.dark_mode { "dark" } else { "light" };
        state_store::save(&pool.conn, KEY_THEME, &theme)
    }

    // -----------------------------
    // Event-list replacement ops
    // -----------------------------

    pub fn add_event(&mut self, event: LoggedEvent) {
        self.events.push(event);
    }

    pub fn add_events(&mut self, events: Vec<LoggedEvent>) {
        self.events.extend(events);
    }

    /// Replace the event carrying the same id; `false` when absent.
    pub fn update_event(&mut self, updated: LoggedEvent) -> bool {
        let found = self.events.iter().any(|e| e.id == updated.id);
        if found {
            self.events = self
                .events
                .iter()
                .map(|e| {
                    if e.id == updated.id {
                        updated.clone()
                    } else {
                        e.clone()
                    }
                })
                .collect();
        }
        found
    }

    /// Drop the event with the given id; `false` when absent.
    pub fn delete_event(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    pub fn find_event(&self, id: &str) -> Option<&LoggedEvent> {
        self.events.iter().find(|e| e.id == id)
    }
}
