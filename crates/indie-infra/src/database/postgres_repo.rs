//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use indie_core::domain::Category;
use indie_core::error::RepoError;
use indie_core::ports::{CategoryRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};

fn repo_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// Categories and post counts backed by one PostgreSQL pool.
///
/// Share it behind an `Arc`; each query checks a connection out of the pool
/// and returns it when the query completes.
pub struct PostgresCatalog {
    db: DbConn,
}

impl PostgresCatalog {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), RepoError> {
        self.db.ping().await.map_err(repo_error)
    }

    #[cfg(test)]
    pub(crate) fn into_conn(self) -> DbConn {
        self.db
    }
}

#[async_trait]
impl CategoryRepository for PostgresCatalog {
    async fn list_by_name(&self) -> Result<Vec<Category>, RepoError> {
        let rows = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(rows = rows.len(), "Fetched categories");
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresCatalog {
    async fn count_by_category(&self, category_id: i64) -> Result<u64, RepoError> {
        let count = PostEntity::find()
            .filter(post::Column::CategoryId.eq(category_id))
            .count(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(category_id, count, "Counted posts for category");
        Ok(count)
    }
}
