//! Category listing page.

use actix_web::{HttpResponse, http::StatusCode, web};

use indie_core::domain::CategoryListing;
use indie_core::load_category_listing;

use crate::config::SiteConfig;
use crate::middleware::error::AppResult;
use crate::pages::{
    self, Caching, CategoriesEmptyPage, CategoriesErrorPage, CategoriesPage, CategoryCard,
    PageMeta,
};
use crate::state::AppState;

const DESCRIPTION: &str = "블로그의 모든 카테고리를 확인하고 관심 있는 주제의 글을 찾아보세요.";

/// GET /categories
///
/// Renders one of three pages: the populated grid, the empty state, or a
/// generic failure panel. Store errors are logged and never shown to readers.
pub async fn categories_page(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Loading category listing");

    let site: &SiteConfig = &state.site;
    let meta = PageMeta::new(site, "카테고리", DESCRIPTION);

    let (categories, posts) = (state.categories.as_ref(), state.posts.as_ref());
    tracing::debug!("Catalog repositories acquired");

    match load_category_listing(categories, posts).await {
        Ok(CategoryListing::Empty) => {
            tracing::info!("No categories found");
            pages::render(
                StatusCode::OK,
                Caching::NoStore,
                &CategoriesEmptyPage { site, meta },
            )
        }
        Ok(listing) => {
            tracing::info!(
                categories = listing.total_categories(),
                posts = listing.total_posts(),
                "Category listing loaded"
            );
            let page = CategoriesPage {
                site,
                meta,
                total_categories: listing.total_categories(),
                total_posts: listing.total_posts(),
                cards: listing.categories().iter().map(CategoryCard::from).collect(),
            };
            pages::render(StatusCode::OK, Caching::NoStore, &page)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load category listing");
            pages::render(
                StatusCode::INTERNAL_SERVER_ERROR,
                Caching::NoStore,
                &CategoriesErrorPage { site, meta },
            )
        }
    }
}
