use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub service: String }

/// `membership_tier` is one of `Basic` (default), `Premium`, `Veluxe Elite`.
#[derive(ToSchema)]
pub struct NewUserDoc { pub name: String, pub email: String, pub phone: String, pub membership_tier: Option<String> }

#[derive(ToSchema)]
pub struct UserCreatedDoc { pub success: bool, pub user_id: String }

#[derive(ToSchema)]
pub struct NewCarDoc {
    pub user_id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub last_service_date: String,
    pub vin: String,
    pub color: String,
}

#[derive(ToSchema)]
pub struct CarAddedDoc { pub success: bool, pub car_id: String }

/// `pickup_type` is `white-glove` or `in-garage`; `status` defaults to `scheduled`.
#[derive(ToSchema)]
pub struct NewBookingDoc {
    pub user_id: String,
    pub car_id: String,
    pub service_type: String,
    pub pickup_type: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: Option<String>,
    pub special_instructions: Option<String>,
}

#[derive(ToSchema)]
pub struct BookingCreatedDoc { pub success: bool, pub booking_id: String }

#[derive(ToSchema)]
pub struct RsvpResponseDoc { pub success: bool, pub message: Option<String> }

#[derive(ToSchema)]
pub struct ForecastDoc {
    pub overall_health: String,
    pub next_service: String,
    pub alerts: Vec<String>,
    pub maintenance_score: i32,
}

#[derive(ToSchema)]
pub struct SeedReportDoc { pub success: bool, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::cars::add_car,
        crate::routes::cars::list_user_cars,
        crate::routes::cars::get_car_health,
        crate::routes::predictions::refresh_predictions,
        crate::routes::bookings::create_booking,
        crate::routes::bookings::list_user_bookings,
        crate::routes::events::list_events,
        crate::routes::events::rsvp,
        crate::routes::debug::init_events,
    ),
    components(
        schemas(
            HealthResponse,
            NewUserDoc,
            UserCreatedDoc,
            NewCarDoc,
            CarAddedDoc,
            NewBookingDoc,
            BookingCreatedDoc,
            RsvpResponseDoc,
            ForecastDoc,
            SeedReportDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "cars"),
        (name = "bookings"),
        (name = "events"),
        (name = "debug")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in [
            "/api/health",
            "/api/users",
            "/api/users/{id}",
            "/api/cars",
            "/api/cars/user/{user_id}",
            "/api/car-health/{car_id}",
            "/api/ai-predictions/{car_id}",
            "/api/bookings",
            "/api/bookings/user/{user_id}",
            "/api/events",
            "/api/events/{id}/rsvp",
            "/api/debug/init-events",
        ] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}
