//! HTTP controller endpoints for the flight logbook API.
//!
//! Axum handlers that resolve the caller, hand requests to the services, and wrap results
//! in the `{ success, data, message, pagination }` envelope. Handlers are documented with
//! utoipa for the OpenAPI document.

pub mod fallback;
pub mod flight;
pub mod health;
pub mod util;
