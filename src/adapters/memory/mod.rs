//! In-memory adapters for tests and local development.

mod journey_store;

pub use journey_store::InMemoryJourneyStore;
