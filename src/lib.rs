//! Journey - Group Trip Planning Service
//!
//! Trips are drafted by an owner, confirmed by email, and shared with
//! invited participants who confirm their attendance. Each trip carries a
//! day-by-day agenda of activities.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
