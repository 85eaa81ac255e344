//! HTTP handlers and route configuration.

mod about;
mod categories;
mod health;
mod not_found;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/about", web::get().to(about::about_page))
        .route("/categories", web::get().to(categories::categories_page))
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        .default_service(web::to(not_found::not_found));
}
