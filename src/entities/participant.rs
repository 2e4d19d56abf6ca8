// ABOUTME: Participant entity recording a user's membership at one level of a fractal
// ABOUTME: (fractal, user, level) is unique; removed along with its fractal or user

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fractal_id: Option<i32>,
    pub user_id: Option<i32>,
    pub level: i32,
    pub created_at: DateTime,
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
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::fractal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fractal.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
