//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `trip` - Trip aggregate, its confirmation lifecycle and handler errors
//! - `participant` - Invited participants and their own confirmation state
//! - `activity` - Scheduled activities and the day-by-day agenda

pub mod activity;
pub mod foundation;
pub mod participant;
pub mod trip;
