//! Metadata registry: the set of entity-to-table mappings and their DDL.

use sea_orm::sea_query::{IndexCreateStatement, Table, TableCreateStatement, TableDropStatement};
use sea_orm::{ConnectionTrait, DbBackend, EntityName, EntityTrait, Schema};

use cms_core::error::RepoError;

use super::entity::{PostEntity, UserEntity};
use super::error::map_db_err;

/// Registered tables, parents before children.
pub struct SchemaRegistry {
    backend: DbBackend,
}

impl SchemaRegistry {
    pub fn new(backend: DbBackend) -> Self {
        Self { backend }
    }

    pub fn table_names(&self) -> Vec<String> {
        vec![
            UserEntity.table_name().to_owned(),
            PostEntity.table_name().to_owned(),
        ]
    }

    pub fn create_table_statements(&self) -> Vec<TableCreateStatement> {
        vec![self.create_table(UserEntity), self.create_table(PostEntity)]
    }

    pub fn create_index_statements(&self) -> Vec<IndexCreateStatement> {
        let schema = Schema::new(self.backend);
        let mut stmts = schema.create_index_from_entity(UserEntity);
        stmts.extend(schema.create_index_from_entity(PostEntity));
        stmts
            .into_iter()
            .map(|mut stmt| stmt.if_not_exists().to_owned())
            .collect()
    }

    pub fn drop_table_statements(&self) -> Vec<TableDropStatement> {
        vec![
            Table::drop().table(PostEntity).if_exists().to_owned(),
            Table::drop().table(UserEntity).if_exists().to_owned(),
        ]
    }

    /// Create every registered table and index that does not exist yet.
    pub async fn create_all<C>(&self, db: &C) -> Result<(), RepoError>
    where
        C: ConnectionTrait,
    {
        for stmt in self.create_table_statements() {
            db.execute(self.backend.build(&stmt))
                .await
                .map_err(map_db_err)?;
        }
        for stmt in self.create_index_statements() {
            db.execute(self.backend.build(&stmt))
                .await
                .map_err(map_db_err)?;
        }
        tracing::info!(tables = ?self.table_names(), "Schema created");
        Ok(())
    }

    /// Drop every registered table, children first.
    pub async fn drop_all<C>(&self, db: &C) -> Result<(), RepoError>
    where
        C: ConnectionTrait,
    {
        for stmt in self.drop_table_statements() {
            db.execute(self.backend.build(&stmt))
                .await
                .map_err(map_db_err)?;
        }
        tracing::info!(tables = ?self.table_names(), "Schema dropped");
        Ok(())
    }

    fn create_table<E>(&self, entity: E) -> TableCreateStatement
    where
        E: EntityTrait,
    {
        Schema::new(self.backend)
            .create_table_from_entity(entity)
            .if_not_exists()
            .to_owned()
    }
}
