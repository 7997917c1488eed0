use utoipa::OpenApi;

pub mod handlers;
pub mod routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_recent_scores,
        handlers::create_score,
        handlers::delete_score,
        handlers::get_leaderboard,
    ),
    components(
        schemas(
            storage::dto::score::SubmitScoreRequest,
            storage::models::ScoreEntry,
            storage::models::StudentTotal,
        )
    ),
    tags(
        (name = "scores", description = "Score submission and recent activity"),
        (name = "leaderboard", description = "Per-student totals"),
    )
)]
pub struct ApiDoc;
