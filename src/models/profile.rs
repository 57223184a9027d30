use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Singleton baby profile. Always replaced wholesale, never patched
/// field-by-field in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BabyProfile {
    pub name: String,
    /// Birth date as an ISO `YYYY-MM-DD` string, fed to the age calculator.
    pub birth_date: String,
    pub theme_color: ThemeColor,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Default for BabyProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            birth_date: String::new(),
            theme_color: ThemeColor::Blue,
            gender: Gender::Male,
            photo: None,
        }
    }
}

impl BabyProfile {
    pub fn is_configured(&self) -> bool {
        !self.name.is_empty() && !self.birth_date.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    Blue,
    Pink,
    Purple,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}
