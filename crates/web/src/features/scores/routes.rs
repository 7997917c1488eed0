use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{delete_score, judges_form, submit_score};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/judges", get(judges_form).post(submit_score))
        .route("/results/:id/delete", post(delete_score))
}
