//! Tests for the list_flights endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use logbook::{
    model::flight::ListFlightsQuery,
    server::controller::{flight::list_flights, util::caller::CallerId},
};

use super::*;

/// Expect 200 OK with the caller's flights and default pagination
#[tokio::test]
async fn success_with_default_pagination() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_flight_tables().build().await?;
    test.flight()
        .insert_mock_flight(TEST_OWNER_ID, 1.0, false, false)
        .await?;
    test.flight()
        .insert_mock_flight(TEST_OWNER_ID, 2.0, true, false)
        .await?;
    test.flight()
        .insert_mock_flight(OTHER_OWNER_ID, 3.0, false, false)
        .await?;

    let result = list_flights(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Query(ListFlightsQuery::default())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["pagination"]["limit"], 100);
    assert_eq!(body["pagination"]["offset"], 0);
    assert_eq!(body["pagination"]["count"], 2);

    Ok(())
}

/// Expect the requested page to be returned
#[tokio::test]
async fn success_with_requested_page() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_flight_tables().build().await?;
    for day in 1..=3 {
        test.flight()
            .insert_mock_flight_on(
                TEST_OWNER_ID,
                factory::flight_date(2025, 10, day),
                1.0,
                false,
                false,
            )
            .await?;
    }

    let query = ListFlightsQuery {
        limit: Some(1),
        offset: Some(1),
    };
    let result = list_flights(
        State(test.into_app_state()),
        CallerId(TEST_OWNER_ID),
        Ok(Query(query)),
    )
    .await;

    let resp = result.unwrap().into_response();
    let body = json_body(resp).await?;
    assert_eq!(body["data"][0]["date"], "2025-10-02");
    assert_eq!(body["pagination"]["limit"], 1);
    assert_eq!(body["pagination"]["offset"], 1);
    assert_eq!(body["pagination"]["count"], 1);

    Ok(())
}
