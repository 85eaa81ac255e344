//! Fallback for routes this server does not own.

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};

use crate::middleware::error::AppResult;
use crate::pages::{self, Caching, NotFoundPage, PageMeta};
use crate::state::AppState;

pub async fn not_found(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::debug!(path = %req.path(), "No route matched");

    let page = NotFoundPage {
        site: &state.site,
        meta: PageMeta::new(
            &state.site,
            "페이지를 찾을 수 없습니다",
            "요청하신 페이지가 존재하지 않습니다.",
        ),
    };

    pages::render(StatusCode::NOT_FOUND, Caching::NoStore, &page)
}
