use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Number of entries shown in the recent-activity feed when no limit is given.
pub const DEFAULT_FEED_LIMIT: u32 = 50;

/// Largest feed the API will return in one response.
pub const MAX_FEED_LIMIT: u32 = 500;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RecentFeedQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_FEED_LIMIT
}

impl Default for RecentFeedQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEED_LIMIT,
        }
    }
}

impl RecentFeedQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > MAX_FEED_LIMIT {
            return Err(format!("limit must be between 1 and {}", MAX_FEED_LIMIT));
        }
        Ok(())
    }
}
