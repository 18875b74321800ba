//! SQLite repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use cms_core::domain::{NewPost, NewUser, Post, User, Validate};
use cms_core::error::RepoError;
use cms_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::error::map_db_err;
use super::sqlite_base::SqliteBaseRepository;

/// SQLite user repository.
pub type SqliteUserRepository<'c, C> = SqliteBaseRepository<'c, UserEntity, C>;

/// SQLite post repository.
pub type SqlitePostRepository<'c, C> = SqliteBaseRepository<'c, PostEntity, C>;

/// Mask an email for logging to avoid PII in logs.
pub(crate) fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl<'c, C> UserRepository for SqliteUserRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        new_user.validate()?;
        tracing::debug!(user_email = %mask_email(&new_user.email), "Creating user");

        let active_model: user::ActiveModel = new_user.into();
        let model = active_model.insert(self.conn).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl<'c, C> PostRepository for SqlitePostRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        new_post.validate()?;
        tracing::debug!(
            post_id = %new_post.id,
            author_id = new_post.author_id,
            "Creating post"
        );

        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(self.conn).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .all(self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_with_author(&self, id: &str) -> Result<Option<(Post, User)>, RepoError> {
        let result = PostEntity::find_by_id(id.to_owned())
            .find_also_related(UserEntity)
            .one(self.conn)
            .await
            .map_err(map_db_err)?;

        match result {
            Some((post, Some(author))) => Ok(Some((post.into(), author.into()))),
            Some((post, None)) => Err(RepoError::ForeignKeyViolation(format!(
                "post {} references missing user {}",
                post.id, post.author_id
            ))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@x.com"), "***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
