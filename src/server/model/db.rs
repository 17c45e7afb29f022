//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Type alias for a logged flight.
///
/// # Fields (from `entity::flight::Model`)
/// - `id` - Primary key, UUID v4
/// - `user_id` - Owner of the flight
/// - `date` - Calendar date of the flight
/// - `departure_airport` / `arrival_airport` - ICAO airport codes
/// - `aircraft_type` - Free text aircraft description
/// - `flight_hours` - Hours flown, rounded to hundredths
/// - `is_night` / `is_solo` - Flight condition flags
/// - `created_at` / `updated_at` - Record timestamps
pub type FlightModel = entity::flight::Model;

/// Type alias for an owner's derived flight hour totals.
///
/// # Fields (from `entity::flight_totals::Model`)
/// - `user_id` - Primary key, the owner
/// - `total_hours`, `day_hours`, `night_hours`, `solo_hours` - Summed hours
/// - `total_flights` - Number of flights
/// - `last_updated` - When the totals were last recalculated
pub type FlightTotalsModel = entity::flight_totals::Model;

impl From<FlightModel> for crate::model::flight::FlightDto {
    fn from(flight: FlightModel) -> Self {
        Self {
            id: flight.id,
            user_id: flight.user_id,
            date: flight.date,
            departure_airport: flight.departure_airport,
            arrival_airport: flight.arrival_airport,
            aircraft_type: flight.aircraft_type,
            flight_hours: flight.flight_hours,
            is_night: flight.is_night,
            is_solo: flight.is_solo,
            created_at: flight.created_at,
            updated_at: flight.updated_at,
        }
    }
}

impl From<FlightTotalsModel> for crate::model::flight::FlightTotalsDto {
    fn from(totals: FlightTotalsModel) -> Self {
        Self {
            user_id: totals.user_id,
            total_hours: totals.total_hours,
            day_hours: totals.day_hours,
            night_hours: totals.night_hours,
            solo_hours: totals.solo_hours,
            total_flights: totals.total_flights,
            last_updated: totals.last_updated,
        }
    }
}
