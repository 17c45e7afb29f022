//! Tests for the get_flight endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use logbook::server::controller::{flight::get_flight, util::caller::CallerId};
use uuid::Uuid;

use super::*;

/// Expect 200 OK with the caller's flight
#[tokio::test]
async fn success_for_owners_flight() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_flight_tables().build().await?;
    let flight_model = test
        .flight()
        .insert_mock_flight(TEST_OWNER_ID, 1.5, true, false)
        .await?;

    let result = get_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Path(flight_model.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["data"]["id"], flight_model.id.to_string());
    assert_eq!(body["data"]["isNight"], true);

    Ok(())
}

/// Expect 404 Not Found for a flight that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_flight() -> Result<(), TestError> {
    let test = TestBuilder::new().with_flight_tables().build().await?;

    let result = get_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Path(Uuid::new_v4())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await?;
    assert_eq!(body["message"], "Flight not found");

    Ok(())
}

/// Expect 404 Not Found for another owner's flight
#[tokio::test]
async fn not_found_for_other_owners_flight() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_flight_tables().build().await?;
    let flight_model = test
        .flight()
        .insert_mock_flight(OTHER_OWNER_ID, 1.5, false, false)
        .await?;

    let result = get_flight(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Path(flight_model.id)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
