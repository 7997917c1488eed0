use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    http::HeaderMap,
    response::Response,
};
use storage::{dto::score::SubmitScoreRequest, services::scoring::ScoringError};

use super::services;
use crate::{
    features::html_response,
    flash::Flash,
    render,
    state::AppState,
};

pub async fn judges_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (flash, had_cookie) = state.flash.read(&headers);
    let html = render::judges_page(&state.config.event_title, flash.as_ref());
    html_response(html, had_cookie)
}

pub async fn submit_score(
    State(state): State<AppState>,
    form: Result<Form<SubmitScoreRequest>, FormRejection>,
) -> Response {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!("Rejected score form: {}", rejection.body_text());
            return state
                .flash
                .redirect("/judges", Flash::err("Could not read the submitted form"));
        }
    };

    let flash = match services::submit_score(state.db.pool(), &request).await {
        Ok(entry) => {
            tracing::info!(
                id = entry.id,
                programme = %entry.programme_code,
                student = %entry.student_id,
                "Score saved"
            );
            Flash::ok("Score saved")
        }
        Err(ScoringError::Validation(e)) => Flash::err(e.to_string()),
        Err(ScoringError::Storage(e)) => {
            tracing::error!("Failed to save score: {}", e);
            Flash::err("Could not save the score, please try again")
        }
    };

    state.flash.redirect("/judges", flash)
}

pub async fn delete_score(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let flash = match services::delete_score(state.db.pool(), id).await {
        Ok(()) => {
            tracing::info!(id, "Score entry deleted");
            Flash::ok(format!("Deleted entry #{}", id))
        }
        Err(e) => {
            tracing::error!("Failed to delete entry #{}: {}", id, e);
            Flash::err(format!("Could not delete entry #{}", id))
        }
    };

    state.flash.redirect("/results", flash)
}
