use axum::{
    Router,
    http::header::SET_COOKIE,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{flash, state::AppState};

pub mod api;
pub mod pages;
pub mod results;
pub mod scores;

/// Assemble the HTML pages, the JSON API and its Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(pages::routes::routes())
        .merge(scores::routes::routes())
        .merge(results::routes::routes())
        .nest("/api", api::routes::routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::ApiDoc::openapi()))
}

/// HTML page response, expiring the flash cookie once it has been shown.
pub(crate) fn html_response(html: String, clear_flash: bool) -> Response {
    if clear_flash {
        (
            AppendHeaders([(SET_COOKIE, flash::clear_cookie_header())]),
            Html(html),
        )
            .into_response()
    } else {
        Html(html).into_response()
    }
}
