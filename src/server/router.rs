//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/flights` - Log a new flight
/// - `GET /api/flights` - List the caller's flights
/// - `GET /api/flights/totals` - Get the caller's flight hour totals
/// - `GET /api/flights/{id}` - Get a flight
/// - `PUT /api/flights/{id}` - Update a flight
/// - `DELETE /api/flights/{id}` - Delete a flight
/// - `GET /api/health` - Liveness check
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`. Requests matching no
/// route receive a 404 envelope. Every request is traced through `tower-http`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Flight Logbook", description = "Flight Logbook API"), tags(
        (name = controller::flight::FLIGHT_TAG, description = "Flight logging and totals API routes"),
        (name = controller::health::HEALTH_TAG, description = "Service health API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::flight::create_flight,
            controller::flight::list_flights
        ))
        .routes(routes!(controller::flight::get_flight_totals))
        .routes(routes!(
            controller::flight::get_flight,
            controller::flight::update_flight,
            controller::flight::delete_flight
        ))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::fallback::route_not_found)
        .layer(TraceLayer::new_for_http())
}
