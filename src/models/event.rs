use super::kind::EventKind;
use crate::utils::date;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One diary entry.
///
/// `timestamp` is kept as the raw ISO-8601 string it was entered with: a
/// record with a malformed timestamp is still shown and editable, it just
/// cannot be sorted or grouped (see the aggregator's validity guards).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub id: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub detail: EventDetail,
}

impl LoggedEvent {
    /// Build a new event with a current-time-derived id.
    pub fn new(timestamp: String, notes: Option<String>, detail: EventDetail) -> Self {
        Self {
            id: date::fresh_id(),
            timestamp,
            notes,
            detail,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.detail.kind()
    }

    /// Timestamp parsed for ordering; `None` marks the record unusable
    /// as a sort key.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        date::parse_timestamp(&self.timestamp)
    }
}

/// Type-specific payload, one variant per event kind.
///
/// The serde tag lands next to `id`/`timestamp` when flattened into
/// [`LoggedEvent`], so a stored entry reads as one flat JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventDetail {
    Breastfeeding {
        side: BreastSide,
        duration_min: u32,
    },
    Bottle {
        content: BottleContent,
        amount_ml: u32,
    },
    BabyFood {
        meal: MealType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        consistency: Option<FoodConsistency>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        acceptance: Option<FoodAcceptance>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ingredients: Option<String>,
    },
    Pumping {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount_ml: Option<u32>,
    },
    Diaper {
        contents: Vec<DiaperContent>,
    },
    Sleep {
        start: String,
        end: String,
        kind: SleepKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        awakenings: Option<u32>,
    },
    Stroll {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_min: Option<u32>,
    },
    Bath,
    Weight {
        kg: f64,
    },
    Length {
        cm: f64,
    },
    HeadCircumference {
        cm: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plagiocephaly_asymmetry_mm: Option<f64>,
    },
    Temperature {
        celsius: f64,
    },
    Doctor {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specialty: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        doctor_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    Vaccine {
        vaccine_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        site: Option<VaccineSite>,
    },
    Illness {
        #[serde(default)]
        symptoms: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diagnosis: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        temperature: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        treatment: Option<String>,
    },
    Medication {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dosage: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
    },
    Milestone {
        kind: MilestoneKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl EventDetail {
    pub fn kind(&self) -> EventKind {
        match self {
            EventDetail::Breastfeeding { .. } => EventKind::Breastfeeding,
            EventDetail::Bottle { .. } => EventKind::Bottle,
            EventDetail::BabyFood { .. } => EventKind::BabyFood,
            EventDetail::Pumping { .. } => EventKind::Pumping,
            EventDetail::Diaper { .. } => EventKind::Diaper,
            EventDetail::Sleep { .. } => EventKind::Sleep,
            EventDetail::Stroll { .. } => EventKind::Stroll,
            EventDetail::Bath => EventKind::Bath,
            EventDetail::Weight { .. } => EventKind::Weight,
            EventDetail::Length { .. } => EventKind::Length,
            EventDetail::HeadCircumference { .. } => EventKind::HeadCircumference,
            EventDetail::Temperature { .. } => EventKind::Temperature,
            EventDetail::Doctor { .. } => EventKind::Doctor,
            EventDetail::Vaccine { .. } => EventKind::Vaccine,
            EventDetail::Illness { .. } => EventKind::Illness,
            EventDetail::Medication { .. } => EventKind::Medication,
            EventDetail::Milestone { kind, .. } => kind.event_kind(),
        }
    }

    /// One-line value rendering for the diary, status view and exports.
    pub fn summary(&self) -> String {
        use crate::utils::formatting::format_quantity;

        match self {
            EventDetail::Breastfeeding { side, duration_min } => {
                format!("{} · {} min", side_label(*side), duration_min)
            }
            EventDetail::Bottle { content, amount_ml } => {
                format!("{} · {} ml", bottle_label(*content), amount_ml)
            }
            EventDetail::BabyFood {
                meal, acceptance, ..
            } => {
                let meal = meal_label(*meal);
                match acceptance {
                    Some(a) => format!("{} · ate {}", meal, acceptance_label(*a)),
                    None => meal.to_string(),
                }
            }
            EventDetail::Pumping { amount_ml } => match amount_ml {
                Some(ml) => format!("{} ml", ml),
                None => String::new(),
            },
            EventDetail::Diaper { contents } => {
                let mut parts: Vec<&str> = Vec::new();
                if contents.contains(&DiaperContent::Pee) {
                    parts.push("pee");
                }
                if contents.contains(&DiaperContent::Poop) {
                    parts.push("poop");
                }
                parts.join(" + ")
            }
            EventDetail::Sleep {
                start,
                end,
                kind,
                awakenings,
            } => {
                let window = format!(
                    "{} → {} ({})",
                    clock_part(start),
                    clock_part(end),
                    match kind {
                        SleepKind::Night => "night",
                        SleepKind::Nap => "nap",
                    }
                );
                match awakenings {
                    Some(n) if *n > 0 => format!("{}, {} awakenings", window, n),
                    _ => window,
                }
            }
            EventDetail::Stroll { duration_min } => match duration_min {
                Some(min) => format!("{} min", min),
                None => String::new(),
            },
            EventDetail::Bath => String::new(),
            EventDetail::Weight { kg } => format_quantity(*kg, "kg"),
            EventDetail::Length { cm } => format_quantity(*cm, "cm"),
            EventDetail::HeadCircumference {
                cm,
                plagiocephaly_asymmetry_mm,
            } => match plagiocephaly_asymmetry_mm {
                Some(mm) => format!(
                    "{} · asymmetry {}",
                    format_quantity(*cm, "cm"),
                    format_quantity(*mm, "mm")
                ),
                None => format_quantity(*cm, "cm"),
            },
            EventDetail::Temperature { celsius } => format_quantity(*celsius, "°C"),
            EventDetail::Doctor {
                specialty,
                doctor_name,
                reason,
            } => [specialty, doctor_name, reason]
                .into_iter()
                .flatten()
                .cloned()
                .collect::<Vec<_>>()
                .join(" · "),
            EventDetail::Vaccine { vaccine_id, .. } => {
                match crate::models::vaccine::find(vaccine_id) {
                    Some(v) => v.name.to_string(),
                    None => vaccine_id.clone(),
                }
            }
            EventDetail::Illness {
                diagnosis,
                symptoms,
                ..
            } => match diagnosis {
                Some(d) => d.clone(),
                None => symptoms.join(", "),
            },
            EventDetail::Medication { name, dosage, .. } => match dosage {
                Some(d) => format!("{} · {}", name, d),
                None => name.clone(),
            },
            EventDetail::Milestone { label, .. } => label.clone().unwrap_or_default(),
        }
    }
}

fn clock_part(iso: &str) -> String {
    crate::utils::date::parse_timestamp(iso)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| iso.to_string())
}

fn side_label(side: BreastSide) -> &'static str {
    match side {
        BreastSide::Left => "left",
        BreastSide::Right => "right",
        BreastSide::Both => "both",
    }
}

fn bottle_label(content: BottleContent) -> &'static str {
    match content {
        BottleContent::Formula => "formula",
        BottleContent::BreastMilk => "breast milk",
        BottleContent::CowMilk => "cow milk",
        BottleContent::Water => "water",
        BottleContent::Juice => "juice",
    }
}

fn meal_label(meal: MealType) -> &'static str {
    match meal {
        MealType::Breakfast => "breakfast",
        MealType::Lunch => "lunch",
        MealType::Dinner => "dinner",
        MealType::Snack => "snack",
    }
}

fn acceptance_label(a: FoodAcceptance) -> &'static str {
    match a {
        FoodAcceptance::All => "everything",
        FoodAcceptance::Most => "most of it",
        FoodAcceptance::Some => "a little",
        FoodAcceptance::Refused => "nothing",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BreastSide {
    Left,
    Right,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BottleContent {
    Formula,
    BreastMilk,
    CowMilk,
    Water,
    Juice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FoodConsistency {
    Puree,
    Mashed,
    Pieces,
    Blw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FoodAcceptance {
    All,
    Most,
    Some,
    Refused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DiaperContent {
    Pee,
    Poop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SleepKind {
    Night,
    Nap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VaccineSite {
    ArmLeft,
    ArmRight,
    LegLeft,
    LegRight,
    Mouth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    Smiled,
    SatUp,
    Crawled,
    FirstStep,
    Walked,
    FirstWord,
    FirstTooth,
    Custom,
}

impl MilestoneKind {
    /// The flattened [`EventKind`] this milestone shows up as in filters
    /// and the pinned list.
    pub fn event_kind(&self) -> EventKind {
        match self {
            MilestoneKind::Smiled => EventKind::Smiled,
            MilestoneKind::SatUp => EventKind::SatUp,
            MilestoneKind::Crawled => EventKind::Crawled,
            MilestoneKind::FirstStep => EventKind::FirstStep,
            MilestoneKind::Walked => EventKind::Walked,
            MilestoneKind::FirstWord => EventKind::FirstWord,
            MilestoneKind::FirstTooth => EventKind::FirstTooth,
            MilestoneKind::Custom => EventKind::CustomMilestone,
        }
    }

    /// Reverse mapping, `None` for non-milestone kinds.
    pub fn from_event_kind(kind: EventKind) -> Option<Self> {
        match kind {
            EventKind::Smiled => Some(MilestoneKind::Smiled),
            EventKind::SatUp => Some(MilestoneKind::SatUp),
            EventKind::Crawled => Some(MilestoneKind::Crawled),
            EventKind::FirstStep => Some(MilestoneKind::FirstStep),
            EventKind::Walked => Some(MilestoneKind::Walked),
            EventKind::FirstWord => Some(MilestoneKind::FirstWord),
            EventKind::FirstTooth => Some(MilestoneKind::FirstTooth),
            EventKind::CustomMilestone => Some(MilestoneKind::Custom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_json_is_flat_and_tagged() {
        let ev = LoggedEvent {
            id: "1700000000000".into(),
            timestamp: "2025-06-01T08:30:00".into(),
            notes: None,
            detail: EventDetail::Weight { kg: 7.25 },
        };

        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "weight");
        assert_eq!(json["kg"], 7.25);
        assert_eq!(json["id"], "1700000000000");

        let back: LoggedEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), EventKind::Weight);
    }

    #[test]
    fn milestone_detail_maps_to_flat_kind() {
        let detail = EventDetail::Milestone {
            kind: MilestoneKind::FirstTooth,
            label: None,
        };
        assert_eq!(detail.kind(), EventKind::FirstTooth);
        assert!(detail.kind().is_milestone());
    }

    #[test]
    fn malformed_timestamp_is_not_orderable() {
        let ev = LoggedEvent {
            id: "x".into(),
            timestamp: "not-a-date".into(),
            notes: None,
            detail: EventDetail::Bath,
        };
        assert!(ev.parsed_timestamp().is_none());
    }
}
