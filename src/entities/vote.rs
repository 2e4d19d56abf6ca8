// ABOUTME: Vote entity for a single ballot in a voting round
// ABOUTME: One ballot per voter per round; voter and candidate both reference users

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "votes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub voting_round_id: Option<i32>,
    pub voter_id: Option<i32>,
    pub candidate_id: Option<i32>,
    pub created_at: DateTime,
}

// Voter and candidate both point at users, so there is no single Related<user::Entity>.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::voting_round::Entity",
        from = "Column::VotingRoundId",
        to = "super::voting_round::Column::Id",
        on_delete = "Cascade"
    )]
    VotingRound,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::VoterId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Voter,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CandidateId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Candidate,
}

impl Related<super::voting_round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VotingRound.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
