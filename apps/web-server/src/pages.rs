//! Askama page templates and the view data they render.

use actix_web::{HttpResponse, http::StatusCode, http::header};
use askama::Template;

use indie_core::domain::CategoryWithCount;

use crate::config::SiteConfig;
use crate::middleware::error::AppResult;

/// `<title>` and description shared by the layout and its OpenGraph tags.
pub struct PageMeta {
    pub title: String,
    pub description: &'static str,
}

impl PageMeta {
    pub fn new(site: &SiteConfig, page: &str, description: &'static str) -> Self {
        Self {
            title: format!("{} | {}", page, site.name),
            description,
        }
    }
}

/// One card in the categories grid.
pub struct CategoryCard {
    pub name: String,
    pub href: String,
    pub color: String,
    pub description: String,
    pub post_count: u64,
}

impl From<&CategoryWithCount> for CategoryCard {
    fn from(entry: &CategoryWithCount) -> Self {
        let category = &entry.category;
        Self {
            name: category.name.clone(),
            href: category.path(),
            color: category.swatch_color().to_string(),
            description: category.description.clone().unwrap_or_default(),
            post_count: entry.post_count,
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage<'a> {
    pub site: &'a SiteConfig,
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "categories/list.html")]
pub struct CategoriesPage<'a> {
    pub site: &'a SiteConfig,
    pub meta: PageMeta,
    pub total_categories: usize,
    pub total_posts: u64,
    pub cards: Vec<CategoryCard>,
}

#[derive(Template)]
#[template(path = "categories/empty.html")]
pub struct CategoriesEmptyPage<'a> {
    pub site: &'a SiteConfig,
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "categories/error.html")]
pub struct CategoriesErrorPage<'a> {
    pub site: &'a SiteConfig,
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage<'a> {
    pub site: &'a SiteConfig,
    pub meta: PageMeta,
}

/// Cache policy attached to a rendered page.
#[derive(Debug, Clone, Copy)]
pub enum Caching {
    /// Rendered from live data on every request.
    NoStore,
    /// Fixed content.
    Public,
}

impl Caching {
    fn header_value(self) -> &'static str {
        match self {
            Caching::NoStore => "no-store",
            Caching::Public => "public, max-age=3600",
        }
    }
}

/// Render `page` into an HTML response.
pub fn render(status: StatusCode, caching: Caching, page: &impl Template) -> AppResult<HttpResponse> {
    let body = page.render()?;

    Ok(HttpResponse::build(status)
        .insert_header((header::CACHE_CONTROL, caching.header_value()))
        .content_type(header::ContentType::html())
        .body(body))
}
