use axum::{extract::State, http::HeaderMap, response::Response};
use storage::dto::feed::DEFAULT_FEED_LIMIT;

use super::services;
use crate::{error::WebError, features::html_response, render, state::AppState};

pub async fn show_results(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let (flash, had_cookie) = state.flash.read(&headers);

    let recent = services::get_recent_feed(state.db.pool(), DEFAULT_FEED_LIMIT).await?;
    let totals = services::get_leaderboard(state.db.pool()).await?;

    let html = render::results_page(&state.config.event_title, flash.as_ref(), &recent, &totals);

    Ok(html_response(html, had_cookie))
}
