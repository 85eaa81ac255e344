//! Domain entities - the core business objects.

mod category;
mod listing;

pub use category::{Category, DEFAULT_SWATCH_COLOR};
pub use listing::{CategoryListing, CategoryWithCount};
