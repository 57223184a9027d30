use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Agenda entry: an upcoming appointment or to-do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    pub kind: ReminderKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Doctor,
    Vaccine,
    Other,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::Doctor => "doctor",
            ReminderKind::Vaccine => "vaccine",
            ReminderKind::Other => "other",
        }
    }
}
