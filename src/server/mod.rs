//! Server application core modules.
//!
//! HTTP routing, request handling, flight validation, totals recalculation and database
//! access for the flight logbook API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
