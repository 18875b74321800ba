//! # CMS Core
//!
//! The domain layer of the CMS persistence stack.
//! This crate holds the entities, their closed enumerations and the
//! repository ports, with zero database dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
