use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct HealthResponse {
    /// Health status, always "ok" once the server answers.
    pub status: String,
    /// Number of games currently stored.
    pub games: usize,
    /// Number of reviews currently stored.
    pub reviews: usize,
    /// Number of authors currently stored.
    pub authors: usize,
}

impl HealthResponse {
    /// Create a health response reporting the current table sizes.
    pub fn ok(games: usize, reviews: usize, authors: usize) -> Self {
        Self {
            status: "ok".to_string(),
            games,
            reviews,
            authors,
        }
    }
}
