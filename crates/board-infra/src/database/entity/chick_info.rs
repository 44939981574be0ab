//! Reference dataset entity (farm chick inventory). Read-only for the board.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chick_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub breed: String,
    pub gender: String,
    pub weight_g: i32,
    pub arrived_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for board_core::domain::ChickRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            breed: model.breed,
            gender: model.gender,
            weight_g: model.weight_g,
            arrived_at: model.arrived_at.into(),
        }
    }
}
