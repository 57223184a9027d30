use serde::{Deserialize, Serialize};

/// Top-level grouping used by the diary filter bar and the status view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Food,
    Activity,
    Growth,
    Health,
    Milestone,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Food => "food",
            EventCategory::Activity => "activity",
            EventCategory::Growth => "growth",
            EventCategory::Health => "health",
            EventCategory::Milestone => "milestone",
        }
    }
}

/// Every loggable event kind, one per diary entry type.
///
/// The milestone kinds are flattened in here so the diary filter, the
/// pinned-milestone list and the `add` command can all name them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    // Food
    Breastfeeding,
    Bottle,
    BabyFood,
    Pumping,
    // Activity
    Diaper,
    Sleep,
    Stroll,
    Bath,
    // Growth
    Weight,
    Length,
    HeadCircumference,
    // Health
    Doctor,
    Vaccine,
    Temperature,
    Illness,
    Medication,
    // Milestone
    Smiled,
    SatUp,
    Crawled,
    FirstStep,
    Walked,
    FirstWord,
    FirstTooth,
    CustomMilestone,
}

pub const ALL_KINDS: [EventKind; 24] = [
    EventKind::Breastfeeding,
    EventKind::Bottle,
    EventKind::BabyFood,
    EventKind::Pumping,
    EventKind::Diaper,
    EventKind::Sleep,
    EventKind::Stroll,
    EventKind::Bath,
    EventKind::Weight,
    EventKind::Length,
    EventKind::HeadCircumference,
    EventKind::Doctor,
    EventKind::Vaccine,
    EventKind::Temperature,
    EventKind::Illness,
    EventKind::Medication,
    EventKind::Smiled,
    EventKind::SatUp,
    EventKind::Crawled,
    EventKind::FirstStep,
    EventKind::Walked,
    EventKind::FirstWord,
    EventKind::FirstTooth,
    EventKind::CustomMilestone,
];

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Breastfeeding => "breastfeeding",
            EventKind::Bottle => "bottle",
            EventKind::BabyFood => "baby_food",
            EventKind::Pumping => "pumping",
            EventKind::Diaper => "diaper",
            EventKind::Sleep => "sleep",
            EventKind::Stroll => "stroll",
            EventKind::Bath => "bath",
            EventKind::Weight => "weight",
            EventKind::Length => "length",
            EventKind::HeadCircumference => "head_circumference",
            EventKind::Doctor => "doctor",
            EventKind::Vaccine => "vaccine",
            EventKind::Temperature => "temperature",
            EventKind::Illness => "illness",
            EventKind::Medication => "medication",
            EventKind::Smiled => "smiled",
            EventKind::SatUp => "sat_up",
            EventKind::Crawled => "crawled",
            EventKind::FirstStep => "first_step",
            EventKind::Walked => "walked",
            EventKind::FirstWord => "first_word",
            EventKind::FirstTooth => "first_tooth",
            EventKind::CustomMilestone => "custom_milestone",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
    }

    pub fn category(&self) -> EventCategory {
        match self {
            EventKind::Breastfeeding
            | EventKind::Bottle
            | EventKind::BabyFood
            | EventKind::Pumping => EventCategory::Food,
            EventKind::Diaper | EventKind::Sleep | EventKind::Stroll | EventKind::Bath => {
                EventCategory::Activity
            }
            EventKind::Weight | EventKind::Length | EventKind::HeadCircumference => {
                EventCategory::Growth
            }
            EventKind::Doctor
            | EventKind::Vaccine
            | EventKind::Temperature
            | EventKind::Illness
            | EventKind::Medication => EventCategory::Health,
            EventKind::Smiled
            | EventKind::SatUp
            | EventKind::Crawled
            | EventKind::FirstStep
            | EventKind::Walked
            | EventKind::FirstWord
            | EventKind::FirstTooth
            | EventKind::CustomMilestone => EventCategory::Milestone,
        }
    }

    pub fn is_milestone(&self) -> bool {
        self.category() == EventCategory::Milestone
    }

    /// Human label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Breastfeeding => "Breastfeeding",
            EventKind::Bottle => "Bottle",
            EventKind::BabyFood => "Baby food",
            EventKind::Pumping => "Pumping",
            EventKind::Diaper => "Diaper",
            EventKind::Sleep => "Sleep",
            EventKind::Stroll => "Stroll",
            EventKind::Bath => "Bath",
            EventKind::Weight => "Weight",
            EventKind::Length => "Length",
            EventKind::HeadCircumference => "Head circumference",
            EventKind::Doctor => "Doctor visit",
            EventKind::Vaccine => "Vaccine",
            EventKind::Temperature => "Temperature",
            EventKind::Illness => "Illness",
            EventKind::Medication => "Medication",
            EventKind::Smiled => "Smiled",
            EventKind::SatUp => "Sat up",
            EventKind::Crawled => "Crawled",
            EventKind::FirstStep => "First steps",
            EventKind::Walked => "Walked",
            EventKind::FirstWord => "First word",
            EventKind::FirstTooth => "First tooth",
            EventKind::CustomMilestone => "Milestone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_str_round_trip() {
        for k in ALL_KINDS {
            assert_eq!(EventKind::from_str(k.as_str()), Some(k));
        }
    }

    #[test]
    fn from_str_accepts_dashes_and_case() {
        assert_eq!(
            EventKind::from_str("First-Tooth"),
            Some(EventKind::FirstTooth)
        );
        assert_eq!(EventKind::from_str("SLEEP"), Some(EventKind::Sleep));
        assert_eq!(EventKind::from_str("nap"), None);
    }

    #[test]
    fn milestone_kinds_are_milestones() {
        assert!(EventKind::FirstStep.is_milestone());
        assert!(EventKind::CustomMilestone.is_milestone());
        assert!(!EventKind::Sleep.is_milestone());
    }
}
