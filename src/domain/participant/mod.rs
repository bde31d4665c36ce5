//! Participant module.

mod aggregate;

pub use aggregate::Participant;
