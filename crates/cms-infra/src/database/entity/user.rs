//! User entity for SeaORM.

use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use cms_core::domain;

/// Stored form of [`domain::UserRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Role {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(200))", unique)]
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.role.is_not_set() {
            self.role = Set(Role::User);
        }
        Ok(self)
    }
}

impl From<Role> for domain::UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => domain::UserRole::User,
            Role::Admin => domain::UserRole::Admin,
        }
    }
}

impl From<domain::UserRole> for Role {
    fn from(role: domain::UserRole) -> Self {
        match role {
            domain::UserRole::User => Role::User,
            domain::UserRole::Admin => Role::Admin,
        }
    }
}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            role: model.role.into(),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<domain::User> for ActiveModel {
    fn from(user: domain::User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email),
            name: Set(user.name),
            role: Set(user.role.into()),
        }
    }
}

/// A new user leaves the id unset so the store assigns it.
impl From<domain::NewUser> for ActiveModel {
    fn from(user: domain::NewUser) -> Self {
        Self {
            id: user.id.map_or(NotSet, Set),
            email: Set(user.email),
            name: Set(user.name),
            role: Set(user.role.into()),
        }
    }
}
