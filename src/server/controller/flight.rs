use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto, PaginationDto},
        flight::{CreateFlightDto, FlightDto, FlightTotalsDto, ListFlightsQuery, UpdateFlightDto},
    },
    server::{
        controller::util::{
            caller::CallerId,
            extract::{json_body, path_param, query_params},
        },
        error::Error,
        model::app::AppState,
        service::flight::FlightService,
    },
};

pub static FLIGHT_TAG: &str = "flight";

/// Page size used when the request does not specify one
pub const DEFAULT_PAGE_LIMIT: u64 = 100;
/// Largest page size a request may ask for
pub const MAX_PAGE_LIMIT: u64 = 1000;

/// Resolves requested pagination to `(limit, offset)`
///
/// A missing or zero limit falls back to [`DEFAULT_PAGE_LIMIT`], larger limits are capped
/// at [`MAX_PAGE_LIMIT`].
pub fn page_bounds(query: &ListFlightsQuery) -> (u64, u64) {
    let limit = match query.limit {
        None | Some(0) => DEFAULT_PAGE_LIMIT,
        Some(limit) => limit.min(MAX_PAGE_LIMIT),
    };

    (limit, query.offset.unwrap_or(0))
}

/// Log a new flight
#[utoipa::path(
    post,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    params(
        ("x-user-id" = Uuid, Header, description = "Owner ID of the caller")
    ),
    responses(
        (status = 201, description = "Flight logged", body = ApiResponse<FlightDto>),
        (status = 400, description = "Invalid flight or caller ID", body = ErrorDto),
        (status = 401, description = "Caller ID missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    CallerId(owner_id): CallerId,
    payload: Result<Json<CreateFlightDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let flight = json_body(payload)?;

    let flight_service = FlightService::new(&state.db);
    let flight = flight_service.create_flight(owner_id, flight).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(flight))))
}

/// List the caller's flights, most recent first
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    params(
        ("x-user-id" = Uuid, Header, description = "Owner ID of the caller"),
        ListFlightsQuery
    ),
    responses(
        (status = 200, description = "Page of flights", body = ApiResponse<Vec<FlightDto>>),
        (status = 400, description = "Invalid pagination or caller ID", body = ErrorDto),
        (status = 401, description = "Caller ID missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flights(
    State(state): State<AppState>,
    CallerId(owner_id): CallerId,
    query: Result<Query<ListFlightsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let query = query_params(query)?;
    let (limit, offset) = page_bounds(&query);

    let flight_service = FlightService::new(&state.db);
    let flights = flight_service.list_flights(owner_id, limit, offset).await?;

    let pagination = PaginationDto {
        limit,
        offset,
        count: flights.len() as u64,
    };

    Ok((StatusCode::OK, Json(ApiResponse::page(flights, pagination))))
}

/// Get the caller's flight hour totals
#[utoipa::path(
    get,
    path = "/api/flights/totals",
    tag = FLIGHT_TAG,
    params(
        ("x-user-id" = Uuid, Header, description = "Owner ID of the caller")
    ),
    responses(
        (status = 200, description = "Flight hour totals", body = ApiResponse<FlightTotalsDto>),
        (status = 400, description = "Invalid caller ID", body = ErrorDto),
        (status = 401, description = "Caller ID missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_totals(
    State(state): State<AppState>,
    CallerId(owner_id): CallerId,
) -> Result<impl IntoResponse, Error> {
    let flight_service = FlightService::new(&state.db);
    let totals = flight_service.get_flight_totals(owner_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(totals))))
}

/// Get one of the caller's flights
#[utoipa::path(
    get,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = Uuid, Path, description = "Flight ID"),
        ("x-user-id" = Uuid, Header, description = "Owner ID of the caller")
    ),
    responses(
        (status = 200, description = "Flight found", body = ApiResponse<FlightDto>),
        (status = 400, description = "Invalid flight or caller ID", body = ErrorDto),
        (status = 401, description = "Caller ID missing", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    CallerId(owner_id): CallerId,
    flight_id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let flight_id = path_param(flight_id)?;

    let flight_service = FlightService::new(&state.db);
    let flight = flight_service.get_flight(flight_id, owner_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(flight))))
}

/// Update any subset of one of the caller's flight fields
#[utoipa::path(
    put,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    request_body = UpdateFlightDto,
    params(
        ("id" = Uuid, Path, description = "Flight ID"),
        ("x-user-id" = Uuid, Header, description = "Owner ID of the caller")
    ),
    responses(
        (status = 200, description = "Flight updated", body = ApiResponse<FlightDto>),
        (status = 400, description = "Invalid fields, flight ID, or caller ID", body = ErrorDto),
        (status = 401, description = "Caller ID missing", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    CallerId(owner_id): CallerId,
    flight_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateFlightDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let flight_id = path_param(flight_id)?;
    let changes = json_body(payload)?;

    let flight_service = FlightService::new(&state.db);
    let flight = flight_service
        .update_flight(flight_id, owner_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(flight))))
}

/// Delete one of the caller's flights
#[utoipa::path(
    delete,
    path = "/api/flights/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = Uuid, Path, description = "Flight ID"),
        ("x-user-id" = Uuid, Header, description = "Owner ID of the caller")
    ),
    responses(
        (status = 200, description = "Flight deleted", body = MessageDto),
        (status = 400, description = "Invalid flight or caller ID", body = ErrorDto),
        (status = 401, description = "Caller ID missing", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    CallerId(owner_id): CallerId,
    flight_id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let flight_id = path_param(flight_id)?;

    let flight_service = FlightService::new(&state.db);
    flight_service.delete_flight(flight_id, owner_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Flight deleted successfully")),
    ))
}
