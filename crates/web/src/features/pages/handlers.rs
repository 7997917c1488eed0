use axum::{extract::State, response::Html};

use crate::{render, state::AppState};

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render::home_page(&state.config.event_title))
}
