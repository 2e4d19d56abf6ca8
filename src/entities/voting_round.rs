// ABOUTME: Voting round entity, one per level of a fractal
// ABOUTME: The winner reference is cleared rather than cascaded when that user is deleted

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voting_rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fractal_id: Option<i32>,
    pub level: i32,
    pub winner_id: Option<i32>,
    pub total_votes: i32,
    pub created_at: DateTime,
    pub completed_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fractal::Entity",
        from = "Column::FractalId",
        to = "super::fractal::Column::Id",
        on_delete = "Cascade"
    )]
    Fractal,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::WinnerId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Winner,
    #[sea_orm(has_many = "super::vote::Entity")]
    Votes,
}

impl Related<super::fractal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fractal.def()
    }
}

impl Related<super::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Votes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
