use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Raw score submission, exactly as typed into the judges' form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    #[serde(default)]
    pub programme_code: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub student_name: String,
    /// Kept as text so that non-numeric input can be reported back to the judge.
    /// JSON clients may also send a plain number.
    #[serde(default, deserialize_with = "score_as_text")]
    #[schema(value_type = String, example = "8.5")]
    pub score: String,
    pub remarks: Option<String>,
}

fn score_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreInput {
        Text(String),
        Number(f64),
    }

    Ok(match ScoreInput::deserialize(deserializer)? {
        ScoreInput::Text(text) => text,
        ScoreInput::Number(number) => number.to_string(),
    })
}

/// A trimmed, parsed submission ready to be stored.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewScoreEntry {
    #[validate(length(min = 1, message = "Programme code is required"))]
    pub programme_code: String,

    #[validate(length(min = 1, message = "Student ID is required"))]
    pub student_id: String,

    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,

    pub score: f64,

    pub remarks: String,
}
