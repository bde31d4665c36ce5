//! Activity command and query handlers.

mod create_activity;
mod list_activities;

pub use create_activity::{CreateActivityCommand, CreateActivityHandler};
pub use list_activities::{ListActivitiesHandler, ListActivitiesQuery};
