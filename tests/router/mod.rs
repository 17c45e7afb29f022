//! End-to-end tests through the full router, covering extraction and routing behavior
//! that calling handlers directly skips.

use axum::{http::StatusCode, Router};
use logbook::server::router;
use logbook_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::{
    util::{json_body, request},
    TestContextExt,
};

async fn app() -> Result<Router, TestError> {
    let test = TestBuilder::new().with_flight_tables().build().await?;

    Ok(router::routes().with_state(test.into_app_state()))
}

fn flight_body(flight_hours: f64, is_night: bool, is_solo: bool) -> serde_json::Value {
    json!({
        "date": "2025-10-01",
        "departureAirport": "KBOS",
        "arrivalAirport": "KJFK",
        "aircraftType": "Cessna 172",
        "flightHours": flight_hours,
        "isNight": is_night,
        "isSolo": is_solo,
    })
}

/// Expect the health check to respond without a caller ID
#[tokio::test]
async fn health_is_public() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request("GET", "/api/health", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Flight Logbook API is running");

    Ok(())
}

/// Expect unknown routes to receive the 404 envelope
#[tokio::test]
async fn unknown_route_not_found() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request("GET", "/api/pilots", Some(TEST_OWNER_ID), None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route /api/pilots not found");

    Ok(())
}

/// Expect 401 Unauthorized without a caller ID
#[tokio::test]
async fn unauthorized_without_caller_id() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request("GET", "/api/flights", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(resp).await?;
    assert_eq!(body["message"], "Authentication required");

    Ok(())
}

/// Expect 400 Bad Request for a caller ID that is not a UUID
#[tokio::test]
async fn bad_request_for_malformed_caller_id() -> Result<(), TestError> {
    let app = app().await?;

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/api/flights/totals")
        .header("x-user-id", "pilot-1")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await?;
    assert_eq!(body["message"], "Invalid user ID");

    Ok(())
}

/// Expect every missing field of a create body to be reported in one 400 response
#[tokio::test]
async fn bad_request_lists_every_missing_field() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request(
            "POST",
            "/api/flights",
            Some(TEST_OWNER_ID),
            Some(json!({
                "departureAirport": "KBOS",
                "aircraftType": "Cessna 172",
                "isNight": false,
                "isSolo": true,
            })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await?;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Validation failed: flightHours is required, arrivalAirport is required, date is required"
    );

    Ok(())
}

/// Expect 400 Bad Request with the envelope for a body that is not valid JSON
#[tokio::test]
async fn bad_request_for_malformed_body() -> Result<(), TestError> {
    let app = app().await?;

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/flights")
        .header("x-user-id", TEST_OWNER_ID.to_string())
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"date\": "))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await?;
    assert_eq!(body["success"], false);

    Ok(())
}

/// Expect 400 Bad Request for a flight ID that is not a UUID
#[tokio::test]
async fn bad_request_for_malformed_flight_id() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request(
            "GET",
            "/api/flights/not-a-uuid",
            Some(TEST_OWNER_ID),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect logging, reading totals, and deleting to keep totals in step with the flights
#[tokio::test]
async fn totals_follow_flight_changes() -> Result<(), TestError> {
    let app = app().await?;

    let mut night_flight_id = String::new();
    for (hours, is_night, is_solo) in [(2.5, false, true), (1.8, true, false), (3.2, false, true)] {
        let resp = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/flights",
                Some(TEST_OWNER_ID),
                Some(flight_body(hours, is_night, is_solo)),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = json_body(resp).await?;
        if is_night {
            night_flight_id = body["data"]["id"].as_str().unwrap().to_string();
        }
    }

    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            "/api/flights/totals",
            Some(TEST_OWNER_ID),
            None,
        ))
        .await
        .unwrap();
    let body = json_body(resp).await?;
    assert_eq!(body["data"]["totalHours"], 7.5);
    assert_eq!(body["data"]["dayHours"], 5.7);
    assert_eq!(body["data"]["nightHours"], 1.8);
    assert_eq!(body["data"]["soloHours"], 5.7);
    assert_eq!(body["data"]["totalFlights"], 3);

    let resp = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/flights/{}", night_flight_id),
            Some(TEST_OWNER_ID),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(request(
            "GET",
            "/api/flights/totals",
            Some(TEST_OWNER_ID),
            None,
        ))
        .await
        .unwrap();
    let body = json_body(resp).await?;
    assert_eq!(body["data"]["totalHours"], 5.7);
    assert_eq!(body["data"]["nightHours"], 0.0);
    assert_eq!(body["data"]["totalFlights"], 2);

    let resp = app
        .oneshot(request(
            "GET",
            "/api/flights/totals",
            Some(OTHER_OWNER_ID),
            None,
        ))
        .await
        .unwrap();
    let body = json_body(resp).await?;
    assert_eq!(body["data"]["totalFlights"], 0);

    Ok(())
}

/// Expect the OpenAPI document to list the flight endpoints
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request("GET", "/api/docs/openapi.json", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert!(body["paths"]["/api/flights"].is_object());
    assert!(body["paths"]["/api/flights/totals"].is_object());
    assert!(body["paths"]["/api/flights/{id}"].is_object());

    Ok(())
}
