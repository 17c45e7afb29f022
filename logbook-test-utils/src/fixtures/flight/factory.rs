//! Factory functions for generating mock flight database models.
//!
//! These are in-memory model instances that don't require database interaction.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::model::{FlightModel, FlightTotalsModel};

/// Build a calendar date for a flight.
///
/// # Panics
/// Panics if the year, month and day do not form a valid date.
pub fn flight_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a mock flight model from Boston to New York in a Cessna 172.
///
/// # Arguments
/// - `owner_id` - Owner the flight is logged for
/// - `flight_hours` - Hours flown, should already be rounded to hundredths
/// - `is_night` - Whether the flight was flown at night
/// - `is_solo` - Whether the flight was flown solo
pub fn mock_flight_model(
    owner_id: Uuid,
    flight_hours: f64,
    is_night: bool,
    is_solo: bool,
) -> FlightModel {
    mock_flight_model_on(
        owner_id,
        flight_date(2025, 10, 1),
        flight_hours,
        is_night,
        is_solo,
    )
}

/// Create a mock flight model flown on the provided date.
pub fn mock_flight_model_on(
    owner_id: Uuid,
    date: NaiveDate,
    flight_hours: f64,
    is_night: bool,
    is_solo: bool,
) -> FlightModel {
    let now = Utc::now().naive_utc();
    FlightModel {
        id: Uuid::new_v4(),
        user_id: owner_id,
        date,
        departure_airport: "KBOS".to_string(),
        arrival_airport: "KJFK".to_string(),
        aircraft_type: "Cessna 172".to_string(),
        flight_hours,
        is_night,
        is_solo,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock totals model with every field set to zero.
pub fn mock_empty_totals_model(owner_id: Uuid) -> FlightTotalsModel {
    FlightTotalsModel {
        user_id: owner_id,
        total_hours: 0.0,
        day_hours: 0.0,
        night_hours: 0.0,
        solo_hours: 0.0,
        total_flights: 0,
        last_updated: Utc::now().naive_utc(),
    }
}
