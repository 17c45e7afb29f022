//! Tests for the update_flight endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use logbook::{
    model::flight::UpdateFlightDto,
    server::controller::{flight::update_flight, util::caller::CallerId},
};
use uuid::Uuid;

use super::*;

/// Expect 200 OK with the updated flight
#[tokio::test]
async fn success_with_updated_flight() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_flight_tables().build().await?;
    let flight_model = test
        .flight()
        .insert_mock_flight(TEST_OWNER_ID, 1.5, false, false)
        .await?;

    let changes = UpdateFlightDto {
        arrival_airport: Some("KLGA".to_string()),
        is_solo: Some(true),
        ..Default::default()
    };
    let result = update_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Path(flight_model.id)),
        Ok(Json(changes)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["data"]["arrivalAirport"], "KLGA");
    assert_eq!(body["data"]["isSolo"], true);
    assert_eq!(body["data"]["departureAirport"], "KBOS");

    Ok(())
}

/// Expect 400 Bad Request for an update without fields
#[tokio::test]
async fn bad_request_for_empty_update() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_flight_tables().build().await?;
    let flight_model = test
        .flight()
        .insert_mock_flight(TEST_OWNER_ID, 1.5, false, false)
        .await?;

    let result = update_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Path(flight_model.id)),
        Ok(Json(UpdateFlightDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await?;
    assert_eq!(body["message"], "Validation failed: No fields to update");

    Ok(())
}

/// Expect 404 Not Found for a flight that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_flight() -> Result<(), TestError> {
    let test = TestBuilder::new().with_flight_tables().build().await?;

    let changes = UpdateFlightDto {
        flight_hours: Some(2.0),
        ..Default::default()
    };
    let result = update_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Path(Uuid::new_v4())),
        Ok(Json(changes)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
