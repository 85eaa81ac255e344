//! # Indie Core
//!
//! The domain layer of the Indie for Life blog.
//! Category records, the per-request listing view model and the ports the
//! infrastructure layer implements. No database or HTTP dependencies live here.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod ports;

pub use catalog::load_category_listing;
pub use error::RepoError;
