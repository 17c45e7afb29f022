use sea_orm_migration::{prelude::*, schema::*};

static IDX_FLIGHT_USER_ID_DATE: &str = "idx_flight_user_id_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_uuid(Flight::Id))
                    .col(uuid(Flight::UserId))
                    .col(date(Flight::Date))
                    .col(string_len(Flight::DepartureAirport, 4))
                    .col(string_len(Flight::ArrivalAirport, 4))
                    .col(string(Flight::AircraftType))
                    .col(double(Flight::FlightHours))
                    .col(boolean(Flight::IsNight).default(false))
                    .col(boolean(Flight::IsSolo).default(false))
                    .col(timestamp(Flight::CreatedAt))
                    .col(timestamp(Flight::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Serves the owner-scoped listing and the recalculation rescan
        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_USER_ID_DATE)
                    .table(Flight::Table)
                    .col(Flight::UserId)
                    .col(Flight::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_USER_ID_DATE)
                    .table(Flight::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    UserId,
    Date,
    DepartureAirport,
    ArrivalAirport,
    AircraftType,
    FlightHours,
    IsNight,
    IsSolo,
    CreatedAt,
    UpdatedAt,
}
