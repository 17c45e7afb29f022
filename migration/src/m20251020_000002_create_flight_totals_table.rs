use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightTotals::Table)
                    .if_not_exists()
                    .col(pk_uuid(FlightTotals::UserId))
                    .col(double(FlightTotals::TotalHours).default(0.0))
                    .col(double(FlightTotals::DayHours).default(0.0))
                    .col(double(FlightTotals::NightHours).default(0.0))
                    .col(double(FlightTotals::SoloHours).default(0.0))
                    .col(big_integer(FlightTotals::TotalFlights).default(0))
                    .col(timestamp(FlightTotals::LastUpdated))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightTotals::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FlightTotals {
    Table,
    UserId,
    TotalHours,
    DayHours,
    NightHours,
    SoloHours,
    TotalFlights,
    LastUpdated,
}
