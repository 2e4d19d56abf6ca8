// ABOUTME: User entity for a community member keyed by their Discord identity
// ABOUTME: Holds profile fields, an optional wallet, and participation/win counters

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub wallet_address: Option<String>,
    pub total_fractals: i32,
    pub total_wins: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fractal::Entity")]
    Fractals,
    #[sea_orm(has_many = "super::participant::Entity")]
    Participants,
}

impl Related<super::fractal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fractals.def()
    }
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
