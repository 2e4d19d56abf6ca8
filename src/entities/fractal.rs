// ABOUTME: Fractal entity for one tournament bound to a Discord thread
// ABOUTME: Owned by its facilitator; participants and voting rounds hang off it

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fractals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub thread_id: String,
    pub name: String,
    pub guild_id: String,
    pub facilitator_id: Option<i32>,
    pub status: String,
    pub created_at: DateTime,
    pub completed_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FacilitatorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Facilitator,
    #[sea_orm(has_many = "super::participant::Entity")]
    Participants,
    #[sea_orm(has_many = "super::voting_round::Entity")]
    VotingRounds,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facilitator.def()
    }
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl Related<super::voting_round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VotingRounds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
