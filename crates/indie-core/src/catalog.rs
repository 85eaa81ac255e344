//! Category listing aggregation.

use futures::future::try_join_all;

use crate::domain::{CategoryListing, CategoryWithCount};
use crate::error::RepoError;
use crate::ports::{CategoryRepository, PostRepository};

/// Load every category together with its post count.
///
/// Categories come back in name order. One count query is started per
/// category and all of them run concurrently; the first failing count aborts
/// the whole listing and nothing partial is returned.
pub async fn load_category_listing(
    categories: &dyn CategoryRepository,
    posts: &dyn PostRepository,
) -> Result<CategoryListing, RepoError> {
    let categories = categories.list_by_name().await?;
    if categories.is_empty() {
        return Ok(CategoryListing::Empty);
    }
    tracing::info!(categories = categories.len(), "Fetched categories, counting posts");

    let counts = try_join_all(
        categories
            .iter()
            .map(|category| posts.count_by_category(category.id)),
    )
    .await?;

    let merged = categories
        .into_iter()
        .zip(counts)
        .map(|(category, post_count)| CategoryWithCount {
            category,
            post_count,
        })
        .collect();

    Ok(CategoryListing::Populated(merged))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::Barrier;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::domain::Category;

    fn category(id: i64, name: &str) -> Category {
        let now = Utc::now();
        Category {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            color: "#10b981".to_string(),
            description: Some(format!("{} games", name)),
            created_at: now,
            updated_at: now,
        }
    }

    enum FakeCategories {
        Rows(Vec<Category>),
        Broken,
    }

    #[async_trait]
    impl CategoryRepository for FakeCategories {
        async fn list_by_name(&self) -> Result<Vec<Category>, RepoError> {
            match self {
                FakeCategories::Rows(rows) => Ok(rows.clone()),
                FakeCategories::Broken => Err(RepoError::Connection("refused".to_string())),
            }
        }
    }

    #[derive(Default)]
    struct FakePosts {
        counts: HashMap<i64, u64>,
        failing: Option<i64>,
        barrier: Option<Arc<Barrier>>,
    }

    #[async_trait]
    impl PostRepository for FakePosts {
        async fn count_by_category(&self, category_id: i64) -> Result<u64, RepoError> {
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            if self.failing == Some(category_id) {
                return Err(RepoError::Query("statement timeout".to_string()));
            }
            Ok(self.counts.get(&category_id).copied().unwrap_or(0))
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_single_category_with_posts() {
        let categories = FakeCategories::Rows(vec![category(1, "Platformer")]);
        let posts = FakePosts {
            counts: HashMap::from([(1, 3)]),
            ..Default::default()
        };

        let listing = load_category_listing(&categories, &posts).await.unwrap();

        assert_eq!(listing.total_categories(), 1);
        assert_eq!(listing.total_posts(), 3);
        assert_eq!(listing.categories()[0].category.slug, "platformer");
        assert_eq!(listing.categories()[0].post_count, 3);
    }

    #[tokio::test]
    async fn test_order_is_preserved_and_totals_add_up() {
        let categories = FakeCategories::Rows(vec![
            category(3, "Metroidvania"),
            category(1, "Platformer"),
            category(2, "Roguelike"),
        ]);
        let posts = FakePosts {
            counts: HashMap::from([(1, 4), (2, 7), (3, 1)]),
            ..Default::default()
        };

        let listing = load_category_listing(&categories, &posts).await.unwrap();

        let names: Vec<_> = listing
            .categories()
            .iter()
            .map(|c| c.category.name.as_str())
            .collect();
        assert_eq!(names, ["Metroidvania", "Platformer", "Roguelike"]);

        let summed: u64 = listing.categories().iter().map(|c| c.post_count).sum();
        assert_eq!(listing.total_posts(), summed);
        assert_eq!(listing.total_posts(), 12);
    }

    #[tokio::test]
    async fn test_category_without_posts_counts_zero() {
        let categories = FakeCategories::Rows(vec![category(1, "Puzzle")]);
        let posts = FakePosts::default();

        let listing = load_category_listing(&categories, &posts).await.unwrap();

        assert_eq!(listing.categories()[0].post_count, 0);
        assert_eq!(listing.total_posts(), 0);
    }

    #[tokio::test]
    async fn test_empty_store_is_not_an_error() {
        let categories = FakeCategories::Rows(Vec::new());
        let posts = FakePosts::default();

        let listing = load_category_listing(&categories, &posts).await.unwrap();

        assert_eq!(listing, CategoryListing::Empty);
        assert_eq!(listing.total_categories(), 0);
    }

    #[tokio::test]
    async fn test_category_query_failure_propagates() {
        let posts = FakePosts::default();

        let result = load_category_listing(&FakeCategories::Broken, &posts).await;

        assert!(matches!(result, Err(RepoError::Connection(_))));
    }

    #[tokio::test]
    async fn test_one_failing_count_fails_the_listing() {
        let categories = FakeCategories::Rows(vec![
            category(1, "Platformer"),
            category(2, "Roguelike"),
        ]);
        let posts = FakePosts {
            counts: HashMap::from([(1, 2)]),
            failing: Some(2),
            ..Default::default()
        };

        let result = load_category_listing(&categories, &posts).await;

        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    #[tokio::test]
    async fn test_counts_run_concurrently() {
        // Each count waits until every count has started; a sequential
        // fan-out would never get past the first one.
        let categories = FakeCategories::Rows(vec![
            category(1, "Platformer"),
            category(2, "Roguelike"),
            category(3, "Shooter"),
        ]);
        let posts = FakePosts {
            counts: HashMap::from([(1, 1), (2, 2), (3, 3)]),
            barrier: Some(Arc::new(Barrier::new(3))),
            ..Default::default()
        };

        let listing = tokio::time::timeout(
            Duration::from_secs(5),
            load_category_listing(&categories, &posts),
        )
        .await
        .expect("count queries were not issued concurrently")
        .unwrap();

        assert_eq!(listing.total_posts(), 6);
    }

    #[tokio::test]
    async fn test_row_count_logged_at_info_before_counts_fail() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let categories = FakeCategories::Rows(vec![
            category(1, "Platformer"),
            category(2, "Roguelike"),
        ]);
        let posts = FakePosts {
            failing: Some(1),
            ..Default::default()
        };

        let result = load_category_listing(&categories, &posts).await;

        assert!(result.is_err());
        let output = logs.contents();
        assert!(output.contains("INFO"), "{output}");
        assert!(output.contains("categories=2"), "{output}");
    }
}
