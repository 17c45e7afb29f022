//! Request and response types shared by the HTTP API.
//!
//! Every JSON body produced by the server is wrapped in [`api::ApiResponse`] or, on failure,
//! [`api::ErrorDto`]. Field names are serialized in camelCase to match the logbook frontend.

pub mod api;
pub mod flight;
