//! Application state - shared across all handlers.

use std::sync::Arc;

use indie_core::ports::{CategoryRepository, PostRepository};
use indie_infra::InMemoryCatalog;

#[cfg(feature = "postgres")]
use indie_infra::database::{self, PostgresCatalog};

use crate::config::{AppConfig, SiteConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub categories: Arc<dyn CategoryRepository>,
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<PostgresCatalog>>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Without `DATABASE_URL` the site runs on an empty in-memory catalog, so
    /// the categories page shows its empty state.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            let conn = database::connect(db_config)
                .await
                .map_err(|e| std::io::Error::other(format!("invalid database configuration: {e}")))?;
            let catalog = Arc::new(PostgresCatalog::new(conn));

            tracing::info!("Application state initialized (postgres)");
            return Ok(Self {
                site: Arc::new(config.site.clone()),
                categories: catalog.clone(),
                posts: catalog.clone(),
                db: Some(catalog),
            });
        }

        tracing::warn!("DATABASE_URL not set. Serving an empty in-memory catalog.");
        Ok(Self::in_memory(config.site.clone(), InMemoryCatalog::new()))
    }

    /// State backed by an in-memory catalog.
    pub fn in_memory(site: SiteConfig, catalog: InMemoryCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self::from_parts(site, catalog.clone(), catalog)
    }

    /// State over arbitrary repository implementations.
    pub fn from_parts(
        site: SiteConfig,
        categories: Arc<dyn CategoryRepository>,
        posts: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            site: Arc::new(site),
            categories,
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}
