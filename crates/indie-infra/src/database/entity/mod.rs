//! SeaORM entities mirroring the blog tables.

pub mod category;
pub mod post;
