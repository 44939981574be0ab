//! Like entity for SeaORM.
//!
//! The composite primary key `(post_id, client_addr)` enforces at most one
//! like per address per post.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub post_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub client_addr: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for board_core::domain::Like {
    fn from(model: Model) -> Self {
        Self {
            post_id: model.post_id,
            client_addr: model.client_addr,
            created_at: model.created_at.into(),
        }
    }
}

impl From<board_core::domain::Like> for ActiveModel {
    fn from(like: board_core::domain::Like) -> Self {
        Self {
            post_id: Set(like.post_id),
            client_addr: Set(like.client_addr),
            created_at: Set(like.created_at.into()),
        }
    }
}
