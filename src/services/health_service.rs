use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness together with the size of each table.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let db = state.read().await;
    HealthResponse::ok(db.games.len(), db.reviews.len(), db.authors.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::default_seed, services::game_service, state::AppState};

    #[tokio::test]
    async fn health_reports_table_sizes() {
        let state = AppState::new(default_seed());
        game_service::delete_game(&state, "5").await.unwrap();

        assert_eq!(health_status(&state).await, HealthResponse::ok(4, 7, 3));
    }
}
