use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged flight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub aircraft_type: String,
    pub flight_hours: f64,
    pub is_night: bool,
    pub is_solo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for logging a new flight
///
/// Every field is required. Fields are read as optional so that absent fields and an
/// unparseable `date` are reported together with every other failing field.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightDto {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    #[schema(required = true)]
    pub date: Option<String>,
    /// ICAO code, 3-4 uppercase letters
    #[serde(default)]
    #[schema(required = true)]
    pub departure_airport: Option<String>,
    /// ICAO code, 3-4 uppercase letters
    #[serde(default)]
    #[schema(required = true)]
    pub arrival_airport: Option<String>,
    #[serde(default)]
    #[schema(required = true)]
    pub aircraft_type: Option<String>,
    /// Greater than 0 and at most 10000, stored rounded to the hundredth
    #[serde(default)]
    #[schema(required = true)]
    pub flight_hours: Option<f64>,
    #[serde(default)]
    #[schema(required = true)]
    pub is_night: Option<bool>,
    #[serde(default)]
    #[schema(required = true)]
    pub is_solo: Option<bool>,
}

/// Request body for a partial flight update, absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_night: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_solo: Option<bool>,
}

impl UpdateFlightDto {
    /// Returns true when no field is present
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.departure_airport.is_none()
            && self.arrival_airport.is_none()
            && self.aircraft_type.is_none()
            && self.flight_hours.is_none()
            && self.is_night.is_none()
            && self.is_solo.is_none()
    }
}

/// Derived flight hour totals for a single pilot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightTotalsDto {
    pub user_id: Uuid,
    pub total_hours: f64,
    pub day_hours: f64,
    pub night_hours: f64,
    pub solo_hours: f64,
    pub total_flights: i64,
    pub last_updated: NaiveDateTime,
}

/// Pagination parameters for listing flights
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFlightsQuery {
    /// Page size, defaults to 100 and is capped at 1000
    pub limit: Option<u64>,
    /// Number of flights to skip, defaults to 0
    pub offset: Option<u64>,
}
