//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240701_000001_create_users;
mod m20240701_000002_create_cars;
mod m20240701_000003_create_car_health;
mod m20240701_000004_create_bookings;
mod m20240701_000005_create_events;
mod m20240701_000006_create_event_rsvps;
mod m20240701_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240701_000001_create_users::Migration),
            Box::new(m20240701_000002_create_cars::Migration),
            Box::new(m20240701_000003_create_car_health::Migration),
            Box::new(m20240701_000004_create_bookings::Migration),
            Box::new(m20240701_000005_create_events::Migration),
            Box::new(m20240701_000006_create_event_rsvps::Migration),
            // Indexes should always be applied last
            Box::new(m20240701_000007_add_indexes::Migration),
        ]
    }
}
