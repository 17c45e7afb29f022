//! Per-owner flight totals recalculation.
//!
//! Totals are always rebuilt from the owner's complete set of flights, never adjusted
//! incrementally, so the stored row can be thrown away and recomputed at any time.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        flight::FlightRepository,
        totals::{ComputedTotals, FlightTotalsRepository},
    },
    error::Error,
    model::db::FlightTotalsModel,
    util::hours::{from_hundredths, to_hundredths},
};

/// Folds `(flight_hours, is_night, is_solo)` rows into totals.
///
/// Hours are summed in whole hundredths so `day_hours + night_hours == total_hours` holds exactly.
/// Fails with [`DbErr::Custom`] rather than wrapping when the stored hours are too large to sum.
pub fn compute_totals(flights: &[(f64, bool, bool)]) -> Result<ComputedTotals, DbErr> {
    let overflow = || DbErr::Custom("Flight hour totals overflow".to_string());

    let mut day = 0i64;
    let mut night = 0i64;
    let mut solo = 0i64;

    for &(hours, is_night, is_solo) in flights {
        let hundredths = to_hundredths(hours);

        if is_night {
            night = night.checked_add(hundredths).ok_or_else(overflow)?;
        } else {
            day = day.checked_add(hundredths).ok_or_else(overflow)?;
        }
        if is_solo {
            solo = solo.checked_add(hundredths).ok_or_else(overflow)?;
        }
    }

    let total = day.checked_add(night).ok_or_else(overflow)?;

    Ok(ComputedTotals {
        total_hours: from_hundredths(total),
        day_hours: from_hundredths(day),
        night_hours: from_hundredths(night),
        solo_hours: from_hundredths(solo),
        total_flights: flights.len() as i64,
    })
}

/// Service rebuilding the derived totals row of an owner.
pub struct TotalsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TotalsService<'a> {
    /// Creates a new instance of TotalsService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recalculates the owner's totals in a transaction of its own.
    ///
    /// On failure the transaction is rolled back and any previously stored totals are left
    /// untouched.
    ///
    /// # Returns
    /// - `Ok(FlightTotalsModel)` - The freshly stored totals
    /// - `Err(Error::DbErr)` - Reading flights or storing totals failed
    pub async fn recalculate(&self, owner_id: Uuid) -> Result<FlightTotalsModel, Error> {
        let txn = self.db.begin().await?;

        let totals = Self::recalculate_in(&txn, owner_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Recalculated totals for owner {}: {} flights, {} hours",
            owner_id,
            totals.total_flights,
            totals.total_hours
        );

        Ok(totals)
    }

    /// Recalculates the owner's totals on the provided connection.
    ///
    /// Pass a transaction to make the recalculation part of a larger unit of work; the caller
    /// is responsible for committing it.
    pub async fn recalculate_in<C: ConnectionTrait>(
        db: &C,
        owner_id: Uuid,
    ) -> Result<FlightTotalsModel, DbErr> {
        let flight_repo = FlightRepository::new(db);
        let totals_repo = FlightTotalsRepository::new(db);

        let flights = flight_repo.get_hours_by_owner(owner_id).await?;
        let totals = compute_totals(&flights)?;

        totals_repo.upsert(owner_id, totals).await
    }
}
