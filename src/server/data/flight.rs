use chrono::{NaiveDate, Utc};
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Value,
};
use uuid::Uuid;

use crate::server::{model::db::FlightModel, util::hours::normalize_hours};

/// Fields of a flight about to be logged, already validated
#[derive(Clone, Debug)]
pub struct NewFlight {
    pub date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub aircraft_type: String,
    pub flight_hours: f64,
    pub is_night: bool,
    pub is_solo: bool,
}

/// Flight fields that may be changed by a partial update
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlightField {
    Date,
    DepartureAirport,
    ArrivalAirport,
    AircraftType,
    FlightHours,
    IsNight,
    IsSolo,
}

impl FlightField {
    /// Column each updatable field is stored in
    pub const fn column(self) -> entity::flight::Column {
        match self {
            Self::Date => entity::flight::Column::Date,
            Self::DepartureAirport => entity::flight::Column::DepartureAirport,
            Self::ArrivalAirport => entity::flight::Column::ArrivalAirport,
            Self::AircraftType => entity::flight::Column::AircraftType,
            Self::FlightHours => entity::flight::Column::FlightHours,
            Self::IsNight => entity::flight::Column::IsNight,
            Self::IsSolo => entity::flight::Column::IsSolo,
        }
    }
}

/// Validated partial update, `None` fields are left untouched
#[derive(Clone, Debug, Default)]
pub struct FlightChanges {
    pub date: Option<NaiveDate>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub aircraft_type: Option<String>,
    pub flight_hours: Option<f64>,
    pub is_night: Option<bool>,
    pub is_solo: Option<bool>,
}

impl FlightChanges {
    /// Pairs every present field with the value to write
    pub fn into_field_values(self) -> Vec<(FlightField, Value)> {
        let mut values = Vec::new();

        if let Some(date) = self.date {
            values.push((FlightField::Date, Value::from(date)));
        }
        if let Some(code) = self.departure_airport {
            values.push((FlightField::DepartureAirport, Value::from(code)));
        }
        if let Some(code) = self.arrival_airport {
            values.push((FlightField::ArrivalAirport, Value::from(code)));
        }
        if let Some(aircraft_type) = self.aircraft_type {
            values.push((FlightField::AircraftType, Value::from(aircraft_type)));
        }
        if let Some(hours) = self.flight_hours {
            values.push((FlightField::FlightHours, Value::from(normalize_hours(hours))));
        }
        if let Some(is_night) = self.is_night {
            values.push((FlightField::IsNight, Value::from(is_night)));
        }
        if let Some(is_solo) = self.is_solo {
            values.push((FlightField::IsSolo, Value::from(is_solo)));
        }

        values
    }
}

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    /// Creates a new instance of [`FlightRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Logs a new flight for the provided owner
    ///
    /// Flight hours are stored rounded to the hundredth.
    pub async fn create(&self, owner_id: Uuid, flight: NewFlight) -> Result<FlightModel, DbErr> {
        let now = Utc::now().naive_utc();

        let flight = entity::flight::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(owner_id),
            date: ActiveValue::Set(flight.date),
            departure_airport: ActiveValue::Set(flight.departure_airport),
            arrival_airport: ActiveValue::Set(flight.arrival_airport),
            aircraft_type: ActiveValue::Set(flight.aircraft_type),
            flight_hours: ActiveValue::Set(normalize_hours(flight.flight_hours)),
            is_night: ActiveValue::Set(flight.is_night),
            is_solo: ActiveValue::Set(flight.is_solo),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        flight.insert(self.db).await
    }

    pub async fn get(&self, flight_id: Uuid) -> Result<Option<FlightModel>, DbErr> {
        entity::prelude::Flight::find_by_id(flight_id)
            .one(self.db)
            .await
    }

    /// Gets a page of the owner's flights, most recent flight date first
    ///
    /// Flights on the same date are ordered by most recently logged first.
    pub async fn get_many_by_owner(
        &self,
        owner_id: Uuid,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<FlightModel>, DbErr> {
        entity::prelude::Flight::find()
            .filter(entity::flight::Column::UserId.eq(owner_id))
            .order_by_desc(entity::flight::Column::Date)
            .order_by_desc(entity::flight::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Applies a partial update to one of the owner's flights
    ///
    /// Returns `Ok(None)` when no flight with the provided ID belongs to the owner; no row is
    /// created in that case. An empty change set is rejected with [`DbErr::Custom`].
    pub async fn update(
        &self,
        flight_id: Uuid,
        owner_id: Uuid,
        changes: FlightChanges,
    ) -> Result<Option<FlightModel>, DbErr> {
        let values = changes.into_field_values();
        if values.is_empty() {
            return Err(DbErr::Custom("No fields to update".to_string()));
        }

        let mut update = entity::prelude::Flight::update_many();
        for (field, value) in values {
            update = update.col_expr(field.column(), Expr::value(value));
        }

        let result = update
            .col_expr(
                entity::flight::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::flight::Column::Id.eq(flight_id))
            .filter(entity::flight::Column::UserId.eq(owner_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get(flight_id).await
    }

    /// Deletes one of the owner's flights
    ///
    /// Returns OK regardless of the flight existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, flight_id: Uuid, owner_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Flight::delete_many()
            .filter(entity::flight::Column::Id.eq(flight_id))
            .filter(entity::flight::Column::UserId.eq(owner_id))
            .exec(self.db)
            .await
    }

    /// Gets `(flight_hours, is_night, is_solo)` for every flight the owner has logged
    pub async fn get_hours_by_owner(&self, owner_id: Uuid) -> Result<Vec<(f64, bool, bool)>, DbErr> {
        entity::prelude::Flight::find()
            .select_only()
            .column(entity::flight::Column::FlightHours)
            .column(entity::flight::Column::IsNight)
            .column(entity::flight::Column::IsSolo)
            .filter(entity::flight::Column::UserId.eq(owner_id))
            .into_tuple::<(f64, bool, bool)>()
            .all(self.db)
            .await
    }
}
