use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A stored reference to a paper document (ID card, health card, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BabyDocument {
    pub id: String,
    pub title: String,
    pub kind: DocumentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Id,
    HealthCard,
    Prescription,
    Other,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Id => "id",
            DocumentKind::HealthCard => "health_card",
            DocumentKind::Prescription => "prescription",
            DocumentKind::Other => "other",
        }
    }
}
