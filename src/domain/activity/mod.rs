//! Activity module - scheduled trip activities and their day-by-day agenda.

mod agenda;
mod aggregate;

pub use agenda::{ActivityAgenda, DayActivities};
pub use aggregate::{Activity, MAX_ACTIVITY_TITLE_LENGTH};
