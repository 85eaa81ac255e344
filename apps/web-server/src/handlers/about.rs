//! Static About page.

use actix_web::{HttpResponse, http::StatusCode, web};

use crate::middleware::error::AppResult;
use crate::pages::{self, AboutPage, Caching, PageMeta};
use crate::state::AppState;

/// GET /about
pub async fn about_page(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let page = AboutPage {
        site: &state.site,
        meta: PageMeta::new(
            &state.site,
            "소개",
            "인디 게임을 사랑하는 주인장의 블로그 소개 페이지입니다.",
        ),
    };

    pages::render(StatusCode::OK, Caching::Public, &page)
}
