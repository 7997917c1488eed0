use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{ScoreEntry, StudentTotal};
use crate::repository::score::ScoreRepository;

pub use crate::dto::feed::DEFAULT_FEED_LIMIT;

/// Latest entries, newest first, at most `limit` of them
pub async fn get_recent_feed(pool: &SqlitePool, limit: u32) -> Result<Vec<ScoreEntry>> {
    let repo = ScoreRepository::new(pool);
    repo.query_recent(limit).await
}

/// Per-student totals, highest first
pub async fn get_leaderboard(pool: &SqlitePool) -> Result<Vec<StudentTotal>> {
    let repo = ScoreRepository::new(pool);
    repo.query_totals().await
}
