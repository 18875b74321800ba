//! Domain entities - the core business objects.

mod user;

mod post;

pub use post::{MAX_SLUG_LEN, NewPost, Post, PostStatus};
pub use user::{MAX_EMAIL_LEN, NewUser, User, UserRole};

use crate::error::DomainError;

/// Column constraints the store cannot enforce on its own, such as the
/// length limits SQLite ignores.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}
