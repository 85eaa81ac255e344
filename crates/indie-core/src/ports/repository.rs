use async_trait::async_trait;

use crate::domain::Category;
use crate::error::RepoError;

/// Read access to the `categories` table.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by name ascending.
    async fn list_by_name(&self) -> Result<Vec<Category>, RepoError>;
}

/// Read access to the `posts` table.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Exact number of posts whose `category_id` equals `category_id`.
    async fn count_by_category(&self, category_id: i64) -> Result<u64, RepoError>;
}
