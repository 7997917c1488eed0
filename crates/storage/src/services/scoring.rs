use sqlx::SqlitePool;
use thiserror::Error;
use validator::Validate;

use crate::dto::score::{NewScoreEntry, SubmitScoreRequest};
use crate::error::{Result, StorageError};
use crate::models::ScoreEntry;
use crate::repository::score::ScoreRepository;

/// Submission rejected before reaching the database
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Score must be a number")]
    ScoreNotNumber,

    #[error("Required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Parse a typed score. Empty input is rejected rather than read as zero.
pub fn parse_score(raw: &str) -> std::result::Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .ok_or(ValidationError::ScoreNotNumber)
}

/// Trim and check a raw submission without touching storage
pub fn prepare_entry(
    request: &SubmitScoreRequest,
) -> std::result::Result<NewScoreEntry, ValidationError> {
    let score = parse_score(&request.score)?;

    let entry = NewScoreEntry {
        programme_code: request.programme_code.trim().to_string(),
        student_id: request.student_id.trim().to_string(),
        student_name: request.student_name.trim().to_string(),
        score,
        remarks: request
            .remarks
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    };

    if let Err(errors) = entry.validate() {
        // report in form order rather than HashMap order
        let missing = ["programme_code", "student_id", "student_name"]
            .into_iter()
            .filter(|field| errors.field_errors().contains_key(*field))
            .map(|field| field.replace('_', " "))
            .collect();
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(entry)
}

/// Validate and record a score, returning the stored entry
pub async fn submit_score(
    pool: &SqlitePool,
    request: &SubmitScoreRequest,
) -> std::result::Result<ScoreEntry, ScoringError> {
    let entry = prepare_entry(request)?;

    let repo = ScoreRepository::new(pool);
    let created = repo.insert(&entry).await?;

    tracing::debug!(
        id = created.id,
        programme = %created.programme_code,
        student = %created.student_id,
        "Score recorded"
    );

    Ok(created)
}

/// Delete an entry by id. A missing id is not an error.
pub async fn delete_score(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = ScoreRepository::new(pool);
    let removed = repo.delete_by_id(id).await?;

    if removed == 0 {
        tracing::debug!(id, "Delete requested for unknown score entry");
    }

    Ok(())
}
