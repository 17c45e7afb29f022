//! Tests for the create_flight endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use logbook::server::controller::{flight::create_flight, util::caller::CallerId};

use super::*;

/// Expect 201 Created with the stored flight in the envelope
#[tokio::test]
async fn created_with_flight() -> Result<(), TestError> {
    let test = TestBuilder::new().with_flight_tables().build().await?;

    let result = create_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Json(create_flight_dto(2.5, false, true))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["flightHours"], 2.5);
    assert_eq!(body["data"]["departureAirport"], "KBOS");
    assert_eq!(body["data"]["userId"], TEST_OWNER_ID.to_string());

    Ok(())
}

/// Expect 400 Bad Request listing every invalid field
#[tokio::test]
async fn bad_request_for_invalid_flight() -> Result<(), TestError> {
    let test = TestBuilder::new().with_flight_tables().build().await?;

    let mut flight = create_flight_dto(0.0, false, false);
    flight.departure_airport = Some("BO".to_string());
    let result = create_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Json(flight)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await?;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Validation failed: Flight hours must be greater than 0, Invalid departure airport code"
    );

    Ok(())
}

/// Expect 500 Internal Server Error when the required tables don't exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Json(create_flight_dto(1.0, false, false))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await?;
    assert_eq!(body["message"], "Internal server error");

    Ok(())
}
