//! Post entity for SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use cms_core::domain;

/// Stored form of [`domain::PostStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "String(StringLen::N(200))", unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(indexed)]
    pub author_id: i32,
    pub created_on: DateTimeUtc,
    pub updated_on: Option<DateTimeUtc>,
    pub status: Status,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.created_on.is_not_set() {
                self.created_on = Set(Utc::now());
            }
            if self.status.is_not_set() {
                self.status = Set(Status::Draft);
            }
        } else {
            // created_on is write-once
            self.created_on = NotSet;
            self.updated_on = Set(Some(Utc::now()));
        }
        Ok(self)
    }
}

impl From<Status> for domain::PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => domain::PostStatus::Draft,
            Status::Published => domain::PostStatus::Published,
        }
    }
}

impl From<domain::PostStatus> for Status {
    fn from(status: domain::PostStatus) -> Self {
        match status {
            domain::PostStatus::Draft => Status::Draft,
            domain::PostStatus::Published => Status::Published,
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            content: model.content,
            author_id: model.author_id,
            created_on: model.created_on,
            updated_on: model.updated_on,
            status: model.status.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<domain::Post> for ActiveModel {
    fn from(post: domain::Post) -> Self {
        Self {
            id: Set(post.id),
            slug: Set(post.slug),
            content: Set(post.content),
            author_id: Set(post.author_id),
            created_on: Set(post.created_on),
            updated_on: Set(post.updated_on),
            status: Set(post.status.into()),
        }
    }
}

/// Timestamps are left to the insert hook.
impl From<domain::NewPost> for ActiveModel {
    fn from(post: domain::NewPost) -> Self {
        Self {
            id: Set(post.id),
            slug: Set(post.slug),
            content: Set(post.content),
            author_id: Set(post.author_id),
            created_on: NotSet,
            updated_on: Set(None),
            status: Set(post.status.into()),
        }
    }
}
