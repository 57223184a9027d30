//! ANSI color helpers for terminal output.

use crate::models::EventCategory;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const ORANGE: &str = "\x1b[38;5;208m";

/// Category accent, mirroring the colored icon tiles of the diary.
pub fn color_for_category(cat: EventCategory) -> &'static str {
    match cat {
        EventCategory::Food => ORANGE,
        EventCategory::Activity => BLUE,
        EventCategory::Growth => GREEN,
        EventCategory::Health => RED,
        EventCategory::Milestone => YELLOW,
    }
}

/// Placeholder for an absent value; plain so table alignment holds.
pub fn placeholder(value: String) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value
    }
}
