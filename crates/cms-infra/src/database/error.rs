//! Translation of SeaORM errors into repository errors.

use sea_orm::{DbErr, SqlErr};

use cms_core::error::RepoError;

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => return RepoError::UniqueViolation(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return RepoError::ForeignKeyViolation(msg);
        }
        _ => {}
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

pub(crate) fn map_txn_err(err: DbErr) -> RepoError {
    match map_db_err(err) {
        RepoError::Query(msg) => RepoError::Transaction(msg),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_updated_maps_to_not_found() {
        assert!(matches!(
            map_db_err(DbErr::RecordNotUpdated),
            RepoError::NotFound
        ));
    }

    #[test]
    fn test_custom_error_maps_to_query() {
        assert!(matches!(
            map_db_err(DbErr::Custom("boom".into())),
            RepoError::Query(msg) if msg.contains("boom")
        ));
    }
}
