//! Flight service layer.
//!
//! Validates flight input and runs each mutation together with the owner's totals
//! recalculation, so stored totals always reflect the committed set of flights.


use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::flight::{CreateFlightDto, FlightDto, FlightTotalsDto, UpdateFlightDto},
    server::{
        data::{flight::FlightRepository, totals::FlightTotalsRepository},
        error::{flight::FlightError, Error},
        service::{
            totals::TotalsService,
            validation::{validate_flight_changes, validate_new_flight},
        },
    },
};

/// Service for logging, editing, and removing an owner's flights.
///
/// Every operation is scoped to the owner passed in; flights of other owners are reported
/// as not found.
pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    /// Creates a new instance of FlightService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a new flight and recalculates the owner's totals.
    ///
    /// # Returns
    /// - `Ok(FlightDto)` - The stored flight
    /// - `Err(Error::FlightError(FlightError::Validation))` - One or more fields are invalid
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was stored
    pub async fn create_flight(
        &self,
        owner_id: Uuid,
        flight: CreateFlightDto,
    ) -> Result<FlightDto, Error> {
        let new_flight = validate_new_flight(flight)?;

        let txn = self.db.begin().await?;

        let flight = FlightRepository::new(&txn)
            .create(owner_id, new_flight)
            .await?;
        TotalsService::recalculate_in(&txn, owner_id).await?;

        txn.commit().await?;

        tracing::info!("Logged flight {} for owner {}", flight.id, owner_id);

        Ok(flight.into())
    }

    /// Retrieves one of the owner's flights.
    ///
    /// # Returns
    /// - `Ok(FlightDto)` - The flight
    /// - `Err(Error::FlightError(FlightError::NotFound))` - No such flight for this owner
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_flight(&self, flight_id: Uuid, owner_id: Uuid) -> Result<FlightDto, Error> {
        let flight_repo = FlightRepository::new(self.db);

        match flight_repo.get(flight_id).await? {
            Some(flight) if flight.user_id == owner_id => Ok(flight.into()),
            _ => Err(FlightError::NotFound(flight_id).into()),
        }
    }

    /// Lists a page of the owner's flights, most recent first.
    pub async fn list_flights(
        &self,
        owner_id: Uuid,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<FlightDto>, Error> {
        let flight_repo = FlightRepository::new(self.db);

        let flights = flight_repo
            .get_many_by_owner(owner_id, limit, offset)
            .await?;

        Ok(flights.into_iter().map(FlightDto::from).collect())
    }

    /// Applies a partial update to one of the owner's flights and recalculates totals.
    ///
    /// Only the fields present are validated and written. A missing flight is never created.
    ///
    /// # Returns
    /// - `Ok(FlightDto)` - The updated flight
    /// - `Err(Error::FlightError(FlightError::Validation))` - No fields given, or a field is invalid
    /// - `Err(Error::FlightError(FlightError::NotFound))` - No such flight for this owner
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn update_flight(
        &self,
        flight_id: Uuid,
        owner_id: Uuid,
        changes: UpdateFlightDto,
    ) -> Result<FlightDto, Error> {
        let changes = validate_flight_changes(changes)?;

        let txn = self.db.begin().await?;

        let Some(flight) = FlightRepository::new(&txn)
            .update(flight_id, owner_id, changes)
            .await?
        else {
            // Dropping the transaction rolls it back
            return Err(FlightError::NotFound(flight_id).into());
        };
        TotalsService::recalculate_in(&txn, owner_id).await?;

        txn.commit().await?;

        tracing::info!("Updated flight {} for owner {}", flight_id, owner_id);

        Ok(flight.into())
    }

    /// Deletes one of the owner's flights and recalculates totals.
    ///
    /// # Returns
    /// - `Ok(())` - The flight was deleted
    /// - `Err(Error::FlightError(FlightError::NotFound))` - No such flight for this owner
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_flight(&self, flight_id: Uuid, owner_id: Uuid) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let result = FlightRepository::new(&txn)
            .delete(flight_id, owner_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(FlightError::NotFound(flight_id).into());
        }
        TotalsService::recalculate_in(&txn, owner_id).await?;

        txn.commit().await?;

        tracing::info!("Deleted flight {} for owner {}", flight_id, owner_id);

        Ok(())
    }

    /// Retrieves the owner's totals, computing and storing them first if none exist yet.
    pub async fn get_flight_totals(&self, owner_id: Uuid) -> Result<FlightTotalsDto, Error> {
        let totals_repo = FlightTotalsRepository::new(self.db);

        let totals = match totals_repo.get_by_owner(owner_id).await? {
            Some(totals) => totals,
            None => TotalsService::new(self.db).recalculate(owner_id).await?,
        };

        Ok(totals.into())
    }
}
