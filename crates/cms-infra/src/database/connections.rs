use std::env;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, DbConn};

use cms_core::error::RepoError;

use super::error::map_db_err;
use super::schema::SchemaRegistry;
use super::session::SessionFactory;

const DEFAULT_URL: &str = "sqlite://cms.db?mode=rwc";
const MEMORY_URL: &str = "sqlite::memory:";
/// Lifetime of the single in-memory connection; closing it loses the data.
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Configuration for the CMS database file.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    /// `None` keeps the pool default (30 minutes).
    pub max_lifetime: Option<Duration>,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Some(Duration::from_secs(300)),
            max_lifetime: None,
            sqlx_logging: true,
        }
    }

    /// A private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` gets its own database, so the
    /// pool is pinned to exactly one connection. Its idle timeout and max
    /// lifetime are both set to a year, since the pool defaults would close
    /// it (and drop every table) after 10 and 30 minutes.
    pub fn in_memory() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
            idle_timeout: Some(MEMORY_CONN_LIFETIME),
            max_lifetime: Some(MEMORY_CONN_LIFETIME),
            sqlx_logging: false,
            ..Self::new(MEMORY_URL)
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let defaults = Self::new(url);

        Self {
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_connections),
            ..defaults
        }
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(&self.url);
        opts.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(self.sqlx_logging);
        if let Some(idle) = self.idle_timeout {
            opts.idle_timeout(idle);
        }
        if let Some(lifetime) = self.max_lifetime {
            opts.max_lifetime(lifetime);
        }
        opts
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

/// Process-wide database handle: the shared pool plus the schema registry.
///
/// Created once with [`Database::init`] at startup and torn down with
/// [`Database::shutdown`].
///
/// # Example
/// ```ignore
/// let db = Database::init(&DatabaseConfig::from_env()).await?;
/// db.registry().create_all(db.conn()).await?;
///
/// let session = db.session().open().await?;
/// let user = session.users().create(NewUser::new("a@x.com", "A")).await?;
/// session.commit().await?;
///
/// db.shutdown().await?;
/// ```
pub struct Database {
    conn: Arc<DbConn>,
    registry: SchemaRegistry,
}

impl Database {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing database connection...");

        let conn = SeaDatabase::connect(config.connect_options())
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let registry = SchemaRegistry::new(conn.get_database_backend());
        tracing::info!(
            backend = ?conn.get_database_backend(),
            pool = config.max_connections,
            "Database connected"
        );

        Ok(Self {
            conn: Arc::new(conn),
            registry,
        })
    }

    /// A factory for units of work bound to this pool.
    pub fn session(&self) -> SessionFactory {
        SessionFactory::new(Arc::clone(&self.conn))
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Raw pool access, for schema setup. Writes made here are not transactional.
    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Check the pool can still reach the database.
    pub async fn ping(&self) -> Result<(), RepoError> {
        self.conn.ping().await.map_err(map_db_err)
    }

    /// Close every pooled connection.
    ///
    /// Fails while a [`SessionFactory`] handed out by [`Database::session`]
    /// is still alive.
    pub async fn shutdown(self) -> Result<(), RepoError> {
        tracing::info!("Closing database connection");
        let conn = Arc::try_unwrap(self.conn).map_err(|conn| {
            RepoError::Connection(format!(
                "database still shared by {} session factories",
                Arc::strong_count(&conn) - 1
            ))
        })?;
        conn.close()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_connection_outlives_pool_defaults() {
        let opts = DatabaseConfig::in_memory().connect_options();
        let day = Duration::from_secs(24 * 60 * 60);

        assert_eq!(opts.get_max_connections(), Some(1));
        assert!(opts.get_max_lifetime().unwrap() > day);
        assert!(opts.get_idle_timeout().unwrap() > day);
    }

    #[test]
    fn test_file_config_keeps_pool_default_lifetime() {
        let opts = DatabaseConfig::new("sqlite://cms.db?mode=rwc").connect_options();
        assert_eq!(opts.get_max_lifetime(), None);
        assert_eq!(opts.get_idle_timeout(), Some(Duration::from_secs(300)));
    }

    #[tokio::test]
    async fn test_shutdown_refuses_while_sessions_can_open() {
        let db = Database::init(&DatabaseConfig::in_memory()).await.unwrap();
        let factory = db.session();

        assert!(matches!(db.shutdown().await, Err(RepoError::Connection(_))));
        drop(factory);
    }

    #[tokio::test]
    async fn test_shutdown_closes_pool() {
        let db = Database::init(&DatabaseConfig::in_memory()).await.unwrap();
        {
            let session = db.session().open().await.unwrap();
            session.rollback().await.unwrap();
        }
        db.ping().await.unwrap();
        db.shutdown().await.unwrap();
    }
}
