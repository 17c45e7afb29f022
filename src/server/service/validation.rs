//! Input validation for flight writes.
//!
//! Every failing field is collected so a single [`FlightError::Validation`] reports all of them.

use chrono::NaiveDate;

use crate::{
    model::flight::{CreateFlightDto, UpdateFlightDto},
    server::{
        data::flight::{FlightChanges, NewFlight},
        error::flight::FlightError,
        util::{hours::to_hundredths, time::parse_flight_date},
    },
};

/// Longest flight that can be logged in one record
pub const MAX_FLIGHT_HOURS: f64 = 10_000.0;

/// Checks whether a code is 3 or 4 uppercase ASCII letters
pub fn is_valid_airport_code(code: &str) -> bool {
    (3..=4).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[derive(Default)]
struct FlightValidator {
    errors: Vec<String>,
}

impl FlightValidator {
    /// Hours are checked as they will be stored, rounded to the hundredth
    fn flight_hours(&mut self, hours: f64) {
        if !hours.is_finite() || to_hundredths(hours) < 1 {
            self.errors
                .push("Flight hours must be greater than 0".to_string());
        } else if hours > MAX_FLIGHT_HOURS {
            self.errors.push(format!(
                "Flight hours must not exceed {}",
                MAX_FLIGHT_HOURS
            ));
        }
    }

    fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.errors.push(format!("{} is required", field));
        }

        value
    }

    fn boolean(&mut self, field: &str, value: Option<bool>) -> Option<bool> {
        if value.is_none() {
            self.errors.push(format!("{} must be a boolean", field));
        }

        value
    }

    fn airport(&mut self, direction: &str, code: &str) {
        if !is_valid_airport_code(code) {
            self.errors
                .push(format!("Invalid {} airport code", direction));
        }
    }

    fn date(&mut self, value: &str) -> Option<NaiveDate> {
        let date = parse_flight_date(value);
        if date.is_none() {
            self.errors.push("Invalid date format".to_string());
        }

        date
    }

    fn aircraft_type(&mut self, value: &str) {
        if value.trim().is_empty() {
            self.errors.push("Aircraft type is required".to_string());
        }
    }

    fn finish(self) -> Result<(), FlightError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FlightError::Validation(self.errors))
        }
    }
}

/// Validates every field of a new flight
///
/// Absent fields are reported alongside invalid ones.
pub fn validate_new_flight(flight: CreateFlightDto) -> Result<NewFlight, FlightError> {
    let mut validator = FlightValidator::default();

    let flight_hours = validator.required("flightHours", flight.flight_hours);
    if let Some(hours) = flight_hours {
        validator.flight_hours(hours);
    }
    let departure_airport = validator.required("departureAirport", flight.departure_airport);
    if let Some(code) = &departure_airport {
        validator.airport("departure", code);
    }
    let arrival_airport = validator.required("arrivalAirport", flight.arrival_airport);
    if let Some(code) = &arrival_airport {
        validator.airport("arrival", code);
    }
    let date = validator
        .required("date", flight.date)
        .and_then(|date| validator.date(&date));
    let aircraft_type = validator.required("aircraftType", flight.aircraft_type);
    if let Some(aircraft_type) = &aircraft_type {
        validator.aircraft_type(aircraft_type);
    }
    let is_night = validator.boolean("isNight", flight.is_night);
    let is_solo = validator.boolean("isSolo", flight.is_solo);

    validator.finish()?;

    match (
        date,
        departure_airport,
        arrival_airport,
        aircraft_type,
        flight_hours,
        is_night,
        is_solo,
    ) {
        (
            Some(date),
            Some(departure_airport),
            Some(arrival_airport),
            Some(aircraft_type),
            Some(flight_hours),
            Some(is_night),
            Some(is_solo),
        ) => Ok(NewFlight {
            date,
            departure_airport,
            arrival_airport,
            aircraft_type,
            flight_hours,
            is_night,
            is_solo,
        }),
        _ => Err(FlightError::Validation(vec![
            "Invalid flight".to_string()
        ])),
    }
}

/// Validates only the fields present in a partial update
///
/// An update without any fields is rejected.
pub fn validate_flight_changes(changes: UpdateFlightDto) -> Result<FlightChanges, FlightError> {
    if changes.is_empty() {
        return Err(FlightError::Validation(vec![
            "No fields to update".to_string()
        ]));
    }

    let mut validator = FlightValidator::default();

    if let Some(hours) = changes.flight_hours {
        validator.flight_hours(hours);
    }
    if let Some(code) = &changes.departure_airport {
        validator.airport("departure", code);
    }
    if let Some(code) = &changes.arrival_airport {
        validator.airport("arrival", code);
    }
    let date = changes.date.as_deref().and_then(|d| validator.date(d));
    if let Some(aircraft_type) = &changes.aircraft_type {
        validator.aircraft_type(aircraft_type);
    }

    validator.finish()?;

    Ok(FlightChanges {
        date,
        departure_airport: changes.departure_airport,
        arrival_airport: changes.arrival_airport,
        aircraft_type: changes.aircraft_type,
        flight_hours: changes.flight_hours,
        is_night: changes.is_night,
        is_solo: changes.is_solo,
    })
}
