mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::{ADMIN_USER, ALICE, BOB, TEACHER, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_attendance_ordered_by_date() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/attendances/100", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "attendence_date": "2025-05-27",
                "is_present_morning": true,
                "is_present_afternoon": true,
                "is_present_fullday": true
            },
            {
                "attendence_date": "2025-05-28",
                "is_present_morning": true,
                "is_present_afternoon": false,
                "is_present_fullday": false
            },
            {
                "attendence_date": "2025-05-29",
                "is_present_morning": false,
                "is_present_afternoon": false,
                "is_present_fullday": false
            }
        ])
    );
}

#[tokio::test]
async fn test_attendance_of_other_student_forbidden() {
    let app = TestApp::new();
    let token = app.token_for(BOB).await;

    let (status, _) = app.get("/api/attendances/100", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_attendance_empty_for_admin_view() {
    let app = TestApp::new();
    let token = app.token_for(ADMIN_USER).await;

    let (status, body) = app.get("/api/attendances/101", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_transports_ordered_by_route_number() {
    let app = TestApp::new();
    let token = app.token_for(TEACHER).await;

    let (status, body) = app.get("/api/transports/1", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let routes = body.as_array().unwrap();
    assert_eq!(routes.len(), 2);

    assert_eq!(routes[0]["route_number"], "R1");
    assert_eq!(routes[0]["driver_name"], "Otto Mann");
    assert_eq!(routes[0]["in_charge_name"], "Seymour Skinner");
    assert_eq!(routes[0]["vehicle_tracking_url"], "https://track.example/61");

    assert_eq!(routes[1]["route_number"], "R2");
    assert_eq!(routes[1]["in_charge_name"], "N/A");
    assert!(routes[1]["vehicle_gps_device_id"].is_null());
}

#[tokio::test]
async fn test_transports_unknown_school_empty() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/transports/2", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_events_unknown_school_empty() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/events/2", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = app.get("/api/events/999", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_events_newest_first_and_coloured() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, body) = app.get("/api/events/1", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().unwrap();
    let titles: Vec<_> = events.iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Sports day", "Assembly", "Science fair"]);

    assert_eq!(events[0]["color"], "Green");
    // An event happening right now is not in the past.
    assert_eq!(events[1]["color"], "Green");
    assert_eq!(events[2]["color"], "Red");
    assert_eq!(events[0]["date"], "2025-06-12T08:00:00");
}

#[tokio::test]
async fn test_event_colour_follows_clock() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    app.clock.advance(Duration::minutes(1));
    let (status, body) = app.get("/api/events/1", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[1]["title"], "Assembly");
    assert_eq!(body[1]["color"], "Red");
}

#[tokio::test]
async fn test_listing_rejects_non_numeric_school() {
    let app = TestApp::new();
    let token = app.token_for(ALICE).await;

    let (status, _) = app.get("/api/events/springfield", Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
