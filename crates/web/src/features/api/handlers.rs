use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{feed::RecentFeedQuery, score::SubmitScoreRequest},
    models::{ScoreEntry, StudentTotal},
};

use crate::{
    error::WebError,
    features::{results, scores},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/scores",
    params(RecentFeedQuery),
    responses(
        (status = 200, description = "Most recent score entries, newest first", body = Vec<ScoreEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "scores"
)]
pub async fn list_recent_scores(
    State(state): State<AppState>,
    Query(query): Query<RecentFeedQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let entries = results::services::get_recent_feed(state.db.pool(), query.limit).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded", body = ScoreEntry),
        (status = 400, description = "Malformed body, score is not a number or required fields are missing")
    ),
    tag = "scores"
)]
pub async fn create_score(
    State(state): State<AppState>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(request) = payload?;

    let entry = scores::services::submit_score(state.db.pool(), &request).await?;

    tracing::info!(id = entry.id, "Score recorded through API");

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/scores/{id}",
    params(
        ("id" = i64, Path, description = "Score entry id")
    ),
    responses(
        (status = 204, description = "Entry deleted, or it did not exist")
    ),
    tag = "scores"
)]
pub async fn delete_score(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    scores::services::delete_score(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Total score per student, highest first", body = Vec<StudentTotal>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<Response, WebError> {
    let totals = results::services::get_leaderboard(state.db.pool()).await?;

    Ok(Json(totals).into_response())
}
