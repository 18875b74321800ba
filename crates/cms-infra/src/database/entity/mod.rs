//! SeaORM entity definitions.

pub mod post;
pub mod user;

use sea_orm::{EntityTrait, PrimaryKeyTrait};

use cms_core::domain::{Post, User};

pub use post::Entity as PostEntity;
pub use user::Entity as UserEntity;

/// Links a SeaORM entity to the domain type stored in its table.
pub trait DomainEntity: EntityTrait {
    type Domain;
}

impl DomainEntity for UserEntity {
    type Domain = User;
}

impl DomainEntity for PostEntity {
    type Domain = Post;
}

pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;
