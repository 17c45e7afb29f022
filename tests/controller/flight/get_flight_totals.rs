//! Tests for the get_flight_totals endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use logbook::server::controller::{
    flight::{create_flight, get_flight_totals},
    util::caller::CallerId,
};

use super::*;

/// Expect 200 OK with totals summed over the caller's flights
#[tokio::test]
async fn success_with_summed_totals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_flight_tables().build().await?;

    for (hours, is_night, is_solo) in [(2.5, false, true), (1.8, true, false), (3.2, false, true)] {
        create_flight(
            State(test.into_app_state()),
            CallerId(TEST_OWNER_ID),
            Ok(Json(create_flight_dto(hours, is_night, is_solo))),
        )
        .await
        .unwrap();
    }

    let result = get_flight_totals(State(test.into_app_state()), CallerId(TEST_OWNER_ID)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["data"]["totalHours"], 7.5);
    assert_eq!(body["data"]["dayHours"], 5.7);
    assert_eq!(body["data"]["nightHours"], 1.8);
    assert_eq!(body["data"]["soloHours"], 5.7);
    assert_eq!(body["data"]["totalFlights"], 3);

    Ok(())
}

/// Expect 200 OK with all-zero totals for a caller without flights
#[tokio::test]
async fn success_with_zero_totals_for_new_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_flight_tables().build().await?;

    let result = get_flight_totals(State(test.into_app_state()), CallerId(TEST_OWNER_ID)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["data"]["totalHours"], 0.0);
    assert_eq!(body["data"]["totalFlights"], 0);

    Ok(())
}
