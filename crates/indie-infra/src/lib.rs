//! # Indie Infrastructure
//!
//! Concrete implementations of the ports defined in `indie-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL support via SeaORM; without it only the
//!   in-memory catalog is built

pub mod database;
pub mod memory;

pub use memory::InMemoryCatalog;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresCatalog};
