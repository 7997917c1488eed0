use sqlx::SqlitePool;
use storage::{
    error::Result,
    models::{ScoreEntry, StudentTotal},
    services::results,
};

/// Most recent entries, newest first
pub async fn get_recent_feed(pool: &SqlitePool, limit: u32) -> Result<Vec<ScoreEntry>> {
    results::get_recent_feed(pool, limit).await
}

/// Per-student totals, highest first
pub async fn get_leaderboard(pool: &SqlitePool) -> Result<Vec<StudentTotal>> {
    results::get_leaderboard(pool).await
}
