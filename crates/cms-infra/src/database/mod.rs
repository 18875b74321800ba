//! Database connection, units of work and the SQLite-backed repositories.

mod connections;
mod error;
mod schema;
mod session;
mod sqlite_base;
pub mod sqlite_repo;

pub mod entity;

pub use connections::{Database, DatabaseConfig};
pub use schema::SchemaRegistry;
pub use session::{Session, SessionFactory};
pub use sqlite_base::SqliteBaseRepository;
pub use sqlite_repo::{SqlitePostRepository, SqliteUserRepository};
