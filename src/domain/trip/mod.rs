//! Trip module - the trip aggregate and its lifecycle errors.

mod aggregate;
mod errors;

pub use aggregate::{
    Trip, TripOwner, MAX_DESTINATION_LENGTH, MAX_OWNER_NAME_LENGTH, MIN_DESTINATION_LENGTH,
};
pub use errors::{EntityRef, TripError};
