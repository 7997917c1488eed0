use axum::{Router, routing::get};

use super::handlers::show_results;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/results", get(show_results))
}
