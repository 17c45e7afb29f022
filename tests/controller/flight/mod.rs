//! Tests for flight controller endpoints.

mod create_flight;
mod get_flight;
mod get_flight_totals;
mod list_flights;
mod update_flight;

use logbook::model::flight::CreateFlightDto;

use super::*;

fn create_flight_dto(flight_hours: f64, is_night: bool, is_solo: bool) -> CreateFlightDto {
    CreateFlightDto {
        date: Some("2025-10-01".to_string()),
        departure_airport: Some("KBOS".to_string()),
        arrival_airport: Some("KJFK".to_string()),
        aircraft_type: Some("Cessna 172".to_string()),
        flight_hours: Some(flight_hours),
        is_night: Some(is_night),
        is_solo: Some(is_solo),
    }
}
