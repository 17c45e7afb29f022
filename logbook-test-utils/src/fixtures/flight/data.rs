use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{
    error::TestError,
    fixtures::flight::{factory, FlightFixtures},
    model::{FlightModel, FlightTotalsModel},
};

impl<'a> FlightFixtures<'a> {
    /// Insert a flight model as-is, keeping its ID and timestamps.
    pub async fn insert_flight(&self, flight: FlightModel) -> Result<FlightModel, TestError> {
        let flight = entity::flight::ActiveModel {
            id: ActiveValue::Set(flight.id),
            user_id: ActiveValue::Set(flight.user_id),
            date: ActiveValue::Set(flight.date),
            departure_airport: ActiveValue::Set(flight.departure_airport),
            arrival_airport: ActiveValue::Set(flight.arrival_airport),
            aircraft_type: ActiveValue::Set(flight.aircraft_type),
            flight_hours: ActiveValue::Set(flight.flight_hours),
            is_night: ActiveValue::Set(flight.is_night),
            is_solo: ActiveValue::Set(flight.is_solo),
            created_at: ActiveValue::Set(flight.created_at),
            updated_at: ActiveValue::Set(flight.updated_at),
        };

        Ok(entity::prelude::Flight::insert(flight)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    /// Insert a mock flight for the owner flown on the default test date.
    pub async fn insert_mock_flight(
        &self,
        owner_id: Uuid,
        flight_hours: f64,
        is_night: bool,
        is_solo: bool,
    ) -> Result<FlightModel, TestError> {
        self.insert_flight(factory::mock_flight_model(
            owner_id,
            flight_hours,
            is_night,
            is_solo,
        ))
        .await
    }

    /// Insert a mock flight for the owner flown on the provided date.
    pub async fn insert_mock_flight_on(
        &self,
        owner_id: Uuid,
        date: NaiveDate,
        flight_hours: f64,
        is_night: bool,
        is_solo: bool,
    ) -> Result<FlightModel, TestError> {
        self.insert_flight(factory::mock_flight_model_on(
            owner_id,
            date,
            flight_hours,
            is_night,
            is_solo,
        ))
        .await
    }

    /// Insert a totals row as-is, regardless of the owner's flights.
    pub async fn insert_totals(
        &self,
        totals: FlightTotalsModel,
    ) -> Result<FlightTotalsModel, TestError> {
        let totals = entity::flight_totals::ActiveModel {
            user_id: ActiveValue::Set(totals.user_id),
            total_hours: ActiveValue::Set(totals.total_hours),
            day_hours: ActiveValue::Set(totals.day_hours),
            night_hours: ActiveValue::Set(totals.night_hours),
            solo_hours: ActiveValue::Set(totals.solo_hours),
            total_flights: ActiveValue::Set(totals.total_flights),
            last_updated: ActiveValue::Set(totals.last_updated),
        };

        Ok(entity::prelude::FlightTotals::insert(totals)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
