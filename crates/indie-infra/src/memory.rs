//! In-memory catalog, used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;

use indie_core::domain::Category;
use indie_core::error::RepoError;
use indie_core::ports::{CategoryRepository, PostRepository};

/// Fixed set of categories and per-category post totals held in memory.
///
/// Name ordering uses Rust's string ordering rather than a database collation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    categories: Vec<Category>,
    post_counts: HashMap<i64, u64>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// File `count` more posts under `category_id`.
    pub fn with_posts(mut self, category_id: i64, count: u64) -> Self {
        *self.post_counts.entry(category_id).or_default() += count;
        self
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn list_by_name(&self) -> Result<Vec<Category>, RepoError> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

#[async_trait]
impl PostRepository for InMemoryCatalog {
    async fn count_by_category(&self, category_id: i64) -> Result<u64, RepoError> {
        Ok(self.post_counts.get(&category_id).copied().unwrap_or(0))
    }
}
