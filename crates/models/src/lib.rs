//! Entities and write helpers for the Veluxe store.
//!
//! Every `create` assigns the record id; callers never choose identifiers.

pub mod errors;
pub mod db;
pub mod user;
pub mod car;
pub mod car_health;
pub mod booking;
pub mod event;
pub mod event_rsvp;
pub mod fixtures;

/// Fresh opaque identifier (UUID v4, hyphenated).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
