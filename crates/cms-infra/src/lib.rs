//! # CMS Infrastructure
//!
//! SQLite persistence for the entities and ports defined in `cms-core`.
//!
//! [`Database::init`] opens the single shared pool at startup and
//! [`Database::shutdown`] closes it. Work happens inside a [`Session`],
//! which writes nothing until it is committed.

pub mod database;

pub use database::{Database, DatabaseConfig, SchemaRegistry, Session, SessionFactory};
