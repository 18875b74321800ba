//! Units of work over the shared pool.

use std::sync::Arc;

use sea_orm::{DatabaseTransaction, DbConn, TransactionTrait};

use cms_core::error::RepoError;

use super::error::map_txn_err;
use super::sqlite_repo::{SqlitePostRepository, SqliteUserRepository};

/// Hands out [`Session`]s. Cheap to clone and safe to share between tasks.
#[derive(Clone)]
pub struct SessionFactory {
    conn: Arc<DbConn>,
}

impl SessionFactory {
    pub(crate) fn new(conn: Arc<DbConn>) -> Self {
        Self { conn }
    }

    /// Start a new unit of work.
    pub async fn open(&self) -> Result<Session, RepoError> {
        let txn = self.conn.begin().await.map_err(map_txn_err)?;
        tracing::trace!("Session opened");
        Ok(Session { txn })
    }
}

/// One unit of work against the store.
///
/// Nothing is written until [`Session::commit`]. A session dropped without
/// committing is rolled back and its connection goes back to the pool.
/// A session must not be shared between concurrent tasks.
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub fn users(&self) -> SqliteUserRepository<'_, DatabaseTransaction> {
        SqliteUserRepository::new(&self.txn)
    }

    pub fn posts(&self) -> SqlitePostRepository<'_, DatabaseTransaction> {
        SqlitePostRepository::new(&self.txn)
    }

    /// The underlying transaction, for queries the repositories do not cover.
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), RepoError> {
        self.txn.commit().await.map_err(map_txn_err)?;
        tracing::trace!("Session committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), RepoError> {
        self.txn.rollback().await.map_err(map_txn_err)?;
        tracing::trace!("Session rolled back");
        Ok(())
    }
}
