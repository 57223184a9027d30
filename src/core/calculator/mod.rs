pub mod age;
pub mod aggregate;
pub mod duration;

pub use age::{calculate_age, calculate_age_in_months};
pub use aggregate::{EventFilter, group_by_day, growth_series, latest_of_kind};
pub use duration::calculate_duration;
