use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
};

use cms_core::domain::Validate;
use cms_core::error::RepoError;
use cms_core::ports::BaseRepository;

use super::entity::{DomainEntity, PrimaryKeyOf};
use super::error::map_db_err;

/// Generic SQLite repository bound to a connection or an open transaction.
pub struct SqliteBaseRepository<'c, E, C>
where
    E: EntityTrait,
{
    pub(crate) conn: &'c C,
    _entity: PhantomData<E>,
}

impl<'c, E, C> SqliteBaseRepository<'c, E, C>
where
    E: EntityTrait,
{
    pub fn new(conn: &'c C) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<'c, E, C> BaseRepository<E::Domain, PrimaryKeyOf<E>> for SqliteBaseRepository<'c, E, C>
where
    E: DomainEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::Domain: From<E::Model> + Into<E::ActiveModel> + Validate + Send + Sync + 'static,
    PrimaryKeyOf<E>: Send + Sync + Clone + std::fmt::Debug + 'static,
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: PrimaryKeyOf<E>) -> Result<Option<E::Domain>, RepoError> {
        let result = E::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, entity: E::Domain) -> Result<E::Domain, RepoError> {
        entity.validate()?;

        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(self.conn).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: PrimaryKeyOf<E>) -> Result<(), RepoError> {
        tracing::debug!(table = E::default().table_name(), id = ?id, "Deleting row");

        let result = E::delete_by_id(id)
            .exec(self.conn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
