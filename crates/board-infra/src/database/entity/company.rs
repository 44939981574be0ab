//! Companies entity backing the analytics summary. Read-only for the board.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub country: String,
    pub employees_count: i64,
    #[sea_orm(column_type = "Double")]
    pub price_usd: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for board_core::domain::Company {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country: model.country,
            employees_count: model.employees_count,
            price_usd: model.price_usd,
        }
    }
}
