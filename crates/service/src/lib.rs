//! Service layer: the single access point for reading and writing records.
//! - One module per entity family; every operation is one logical store call.
//! - Multi-record writes (car + health, rsvp + counter) run in a transaction.
//! - Errors are classified in [`errors::ServiceError`].

pub mod errors;
pub mod user_service;
pub mod car_service;
pub mod booking_service;
pub mod event_service;
pub mod prediction_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
