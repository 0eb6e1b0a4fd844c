//! Fixed sample data reconciled into the store at startup.

use crate::event::{BrandFilter, EventType, NewEvent};

/// The three showcase events. Titles are the dedup key.
pub fn sample_events() -> Vec<NewEvent> {
    vec![
        NewEvent {
            title: "Porsche Track Day".into(),
            description: "Exclusive track day at Laguna Seca for Porsche owners".into(),
            event_type: EventType::TrackDay,
            date: "2024-07-25".into(),
            location: "Laguna Seca Raceway, CA".into(),
            max_attendees: 50,
            current_attendees: 23,
            brands_filter: BrandFilter::of(&["Porsche"]),
        },
        NewEvent {
            title: "BMW & Mercedes Meetup".into(),
            description: "Luxury German auto meetup in Beverly Hills".into(),
            event_type: EventType::Meetup,
            date: "2024-08-10".into(),
            location: "Beverly Hills Hotel, CA".into(),
            max_attendees: 75,
            current_attendees: 45,
            brands_filter: BrandFilter::of(&["BMW", "Mercedes"]),
        },
        NewEvent {
            title: "Tesla Owners Exclusive".into(),
            description: "Private charging station unveiling and test drives".into(),
            event_type: EventType::Exclusive,
            date: "2024-08-20".into(),
            location: "Tesla Fremont Factory, CA".into(),
            max_attendees: 30,
            current_attendees: 18,
            brands_filter: BrandFilter::of(&["Tesla"]),
        },
    ]
}
