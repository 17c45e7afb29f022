//! `SeaORM` entities for the logbook schema.

pub mod prelude;

pub mod flight;
pub mod flight_totals;
