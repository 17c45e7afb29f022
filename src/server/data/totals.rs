use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::db::FlightTotalsModel;

/// Aggregates derived from an owner's full set of flights
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComputedTotals {
    pub total_hours: f64,
    pub day_hours: f64,
    pub night_hours: f64,
    pub solo_hours: f64,
    pub total_flights: i64,
}

pub struct FlightTotalsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightTotalsRepository<'a, C> {
    /// Creates a new instance of [`FlightTotalsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_owner(&self, owner_id: Uuid) -> Result<Option<FlightTotalsModel>, DbErr> {
        entity::prelude::FlightTotals::find_by_id(owner_id)
            .one(self.db)
            .await
    }

    /// Stores the owner's totals, overwriting every derived field of an existing row
    pub async fn upsert(
        &self,
        owner_id: Uuid,
        totals: ComputedTotals,
    ) -> Result<FlightTotalsModel, DbErr> {
        let totals = entity::flight_totals::ActiveModel {
            user_id: ActiveValue::Set(owner_id),
            total_hours: ActiveValue::Set(totals.total_hours),
            day_hours: ActiveValue::Set(totals.day_hours),
            night_hours: ActiveValue::Set(totals.night_hours),
            solo_hours: ActiveValue::Set(totals.solo_hours),
            total_flights: ActiveValue::Set(totals.total_flights),
            last_updated: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::FlightTotals::insert(totals)
            .on_conflict(
                OnConflict::column(entity::flight_totals::Column::UserId)
                    .update_columns([
                        entity::flight_totals::Column::TotalHours,
                        entity::flight_totals::Column::DayHours,
                        entity::flight_totals::Column::NightHours,
                        entity::flight_totals::Column::SoloHours,
                        entity::flight_totals::Column::TotalFlights,
                        entity::flight_totals::Column::LastUpdated,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
