use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

use server::startup;

async fn build_app() -> anyhow::Result<Router> {
    let state = startup::prepare(&configs::DatabaseConfig::in_memory()).await?;
    Ok(startup::build_app(state))
}

async fn send(app: &mut Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    // extractor rejections answer with plain text
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    Ok((status, value))
}

fn new_user() -> Value {
    json!({"name": "Ada Lovelace", "email": "ada@example.com", "phone": "+1-555-0100", "membership_tier": "Veluxe Elite"})
}

fn new_car(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "brand": "Porsche",
        "model": "911 Carrera",
        "year": 2023,
        "mileage": 4200,
        "last_service_date": "2024-05-01",
        "vin": "1HGCM82633A004352",
        "color": "Guards Red"
    })
}

#[tokio::test]
async fn health_reports_service_name() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = send(&mut app, "GET", "/api/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "service": "veluxe-backend"}));
    Ok(())
}

#[tokio::test]
async fn user_round_trip_and_missing_user() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let (status, body) = send(&mut app, "POST", "/api/users", Some(new_user())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let user_id = body["user_id"].as_str().unwrap_or_default().to_string();
    assert!(!user_id.is_empty());

    let (status, user) = send(&mut app, "GET", &format!("/api/users/{user_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], user_id.as_str());
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["membership_tier"], "Veluxe Elite");
    assert!(user["created_at"].is_string());

    let (status, body) = send(&mut app, "GET", "/api/users/does-not-exist", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found");
    Ok(())
}

#[tokio::test]
async fn unknown_membership_tier_is_rejected() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let mut user = new_user();
    user["membership_tier"] = json!("Platinum");
    let (status, _) = send(&mut app, "POST", "/api/users", Some(user)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn car_gets_baseline_health_and_forecast() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let (status, body) = send(&mut app, "GET", "/api/cars/user/nobody", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = send(&mut app, "POST", "/api/users", Some(new_user())).await?;
    let user_id = body["user_id"].as_str().unwrap_or_default().to_string();

    let (status, body) = send(&mut app, "POST", "/api/cars", Some(new_car(&user_id))).await?;
    assert_eq!(status, StatusCode::OK);
    let car_id = body["car_id"].as_str().unwrap_or_default().to_string();
    assert!(!car_id.is_empty());

    let (status, cars) = send(&mut app, "GET", &format!("/api/cars/user/{user_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cars.as_array().map(Vec::len), Some(1));
    assert_eq!(cars[0]["model"], "911 Carrera");
    assert_eq!(cars[0]["vin"], "1HGCM82633A004352");

    let (status, health) = send(&mut app, "GET", &format!("/api/car-health/{car_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["oil_status"], 85);
    assert_eq!(health["brake_status"], 92);
    assert_eq!(health["battery_status"], 88);
    assert_eq!(health["tire_status"], 76);

    let (status, forecast) = send(&mut app, "POST", &format!("/api/ai-predictions/{car_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(forecast["overall_health"], "Good");
    assert_eq!(forecast["maintenance_score"], 87);

    let (_, health) = send(&mut app, "GET", &format!("/api/car-health/{car_id}"), None).await?;
    assert_eq!(health["ai_predictions"]["maintenance_score"], 87);
    Ok(())
}

#[tokio::test]
async fn missing_car_health_is_not_found() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = send(&mut app, "GET", "/api/car-health/unknown", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Car health data not found");
    Ok(())
}

#[tokio::test]
async fn bookings_are_listed_per_user() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let booking = json!({
        "user_id": "u-1",
        "car_id": "c-1",
        "service_type": "Full Detail",
        "pickup_type": "white-glove",
        "appointment_date": "2024-07-01",
        "appointment_time": "10:00"
    });
    let (status, body) = send(&mut app, "POST", "/api/bookings", Some(booking)).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["booking_id"].is_string());

    let (status, list) = send(&mut app, "GET", "/api/bookings/user/u-1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["status"], "scheduled");
    assert_eq!(list[0]["special_instructions"], "");
    assert_eq!(list[0]["pickup_type"], "white-glove");

    let (_, list) = send(&mut app, "GET", "/api/bookings/user/u-2", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn rsvp_is_counted_once_per_user() -> anyhow::Result<()> {
    let mut app = build_app().await?;

    let (status, events) = send(&mut app, "GET", "/api/events", None).await?;
    assert_eq!(status, StatusCode::OK);
    let events = events.as_array().cloned().unwrap_or_default();
    assert_eq!(events.len(), 3);
    let track_day = events
        .iter()
        .find(|e| e["title"] == "Porsche Track Day")
        .cloned()
        .unwrap_or(Value::Null);
    assert_eq!(track_day["current_attendees"], 23);
    assert_eq!(track_day["brands_filter"], json!(["Porsche"]));
    let event_id = track_day["id"].as_str().unwrap_or_default().to_string();

    let uri = format!("/api/events/{event_id}/rsvp?user_id=u-42");
    let (status, body) = send(&mut app, "POST", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, body) = send(&mut app, "POST", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Already RSVP'd"}));

    let (_, events) = send(&mut app, "GET", "/api/events", None).await?;
    let attendees = events
        .as_array()
        .and_then(|all| all.iter().find(|e| e["id"] == event_id.as_str()))
        .map(|e| e["current_attendees"].clone());
    assert_eq!(attendees, Some(json!(24)));

    let (status, _) = send(&mut app, "POST", &format!("/api/events/{event_id}/rsvp"), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn init_events_is_idempotent() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, body) = send(&mut app, "GET", "/api/debug/init-events", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Initialized 0 sample events");

    let (_, events) = send(&mut app, "GET", "/api/events", None).await?;
    assert_eq!(events.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let mut app = build_app().await?;
    let (status, doc) = send(&mut app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/events/{id}/rsvp"].is_object());
    Ok(())
}
