use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_totals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub total_hours: f64,
    #[sea_orm(column_type = "Double")]
    pub day_hours: f64,
    #[sea_orm(column_type = "Double")]
    pub night_hours: f64,
    #[sea_orm(column_type = "Double")]
    pub solo_hours: f64,
    pub total_flights: i64,
    pub last_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
