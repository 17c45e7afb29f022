//! Maps axum extractor rejections to validation errors so malformed requests get the
//! same `{ success: false, message }` envelope as every other client error.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use crate::server::error::{flight::FlightError, Error};

/// Unwraps a JSON request body
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| FlightError::Validation(vec![rejection.body_text()]).into())
}

/// Unwraps a path parameter
pub fn path_param<T>(path: Result<Path<T>, PathRejection>) -> Result<T, Error> {
    path.map(|Path(param)| param)
        .map_err(|rejection| FlightError::Validation(vec![rejection.body_text()]).into())
}

/// Unwraps query parameters
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| FlightError::Validation(vec![rejection.body_text()]).into())
}
