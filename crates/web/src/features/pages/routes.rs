use axum::{Router, routing::get};

use super::handlers::home;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}
