use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A summary tile configured on the status view. Which tiles exist and in
/// what order is user state, persisted like everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardWidget {
    pub id: String,
    pub kind: WidgetKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    NextReminder,
    QuickActions,
    LastMilestone,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::NextReminder => "next_reminder",
            WidgetKind::QuickActions => "quick_actions",
            WidgetKind::LastMilestone => "last_milestone",
        }
    }
}
