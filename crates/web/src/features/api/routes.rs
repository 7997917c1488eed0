use std::time::Duration;

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{create_score, delete_score, get_leaderboard, list_recent_scores};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/scores", get(list_recent_scores).post(create_score))
        .route("/scores/:id", delete(delete_score))
        .route("/leaderboard", get(get_leaderboard))
        .layer(cors)
}
