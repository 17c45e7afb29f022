//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main logbook crate.

/// Type alias for flight database model.
pub type FlightModel = entity::flight::Model;

/// Type alias for per-owner flight totals database model.
pub type FlightTotalsModel = entity::flight_totals::Model;
