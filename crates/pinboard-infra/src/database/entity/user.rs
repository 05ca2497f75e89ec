//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birth_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for pinboard_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            birth_date: model.birth_date,
        }
    }
}

/// Conversion from a draft to a SeaORM ActiveModel; the id stays unset so the
/// database assigns it.
impl From<pinboard_core::domain::NewUser> for ActiveModel {
    fn from(user: pinboard_core::domain::NewUser) -> Self {
        Self {
            id: NotSet,
            name: Set(user.name),
            birth_date: Set(user.birth_date),
        }
    }
}
