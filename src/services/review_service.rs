//! Review operations backing the `reviews`, `reviewById` and review mutation resolvers.

use tracing::debug;

use crate::{
    dao::models::{ReviewEntity, ReviewPatch},
    state::SharedState,
};

/// Every review, in store order.
pub async fn list_reviews(state: &SharedState) -> Vec<ReviewEntity> {
    state.read().await.reviews.all().to_vec()
}

/// Review with the given id, if any.
pub async fn find_review(state: &SharedState, id: &str) -> Option<ReviewEntity> {
    state.read().await.reviews.find(id).cloned()
}

/// Append a new review. The referenced game and author are not checked.
pub async fn add_review(
    state: &SharedState,
    rating: i32,
    content: String,
    author_id: String,
    game_id: String,
) -> ReviewEntity {
    let mut db = state.write().await;
    let review = db.reviews.insert_with(|id| ReviewEntity {
        id,
        rating,
        content,
        author_id,
        game_id,
    });
    debug!(
        id = %review.id,
        game_id = %review.game_id,
        author_id = %review.author_id,
        "review added"
    );
    review
}

/// Merge `patch` into the stored review, keeping its position in the table.
pub async fn update_review(
    state: &SharedState,
    id: &str,
    patch: ReviewPatch,
) -> Option<ReviewEntity> {
    let mut db = state.write().await;
    let updated = db.reviews.replace_with(id, |current| patch.merge(current));
    match &updated {
        Some(_) => debug!(id, "review updated"),
        None => debug!(id, "review to update not found"),
    }
    updated
}

/// Remove a review and return it as it was stored.
pub async fn delete_review(state: &SharedState, id: &str) -> Option<ReviewEntity> {
    let removed = state.write().await.reviews.remove(id);
    match &removed {
        Some(_) => debug!(id, "review deleted"),
        None => debug!(id, "review to delete not found"),
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::default_seed,
        dao::database::Seed,
        services::{author_service, game_service},
        state::AppState,
    };

    #[tokio::test]
    async fn first_review_in_empty_table_gets_id_one() {
        let state = AppState::new(Seed::default());
        let review = add_review(&state, 5, "ok".into(), "1".into(), "1".into()).await;

        assert_eq!(
            review,
            ReviewEntity {
                id: "1".into(),
                rating: 5,
                content: "ok".into(),
                author_id: "1".into(),
                game_id: "1".into(),
            }
        );
    }

    #[tokio::test]
    async fn added_review_resolves_its_edges() {
        let state = AppState::new(default_seed());
        let review = add_review(&state, 6, "fun".into(), "3".into(), "4".into()).await;

        let stored = find_review(&state, &review.id).await.unwrap();
        let game = game_service::find_game(&state, &stored.game_id).await.unwrap();
        let author = author_service::find_author(&state, &stored.author_id)
            .await
            .unwrap();
        assert_eq!(game.title, "Mario Kart");
        assert_eq!(author.name, "peach");
    }

    #[tokio::test]
    async fn dangling_references_resolve_to_none() {
        let state = AppState::new(default_seed());
        let review = add_review(&state, 1, "who?".into(), "99".into(), "98".into()).await;

        assert!(game_service::find_game(&state, &review.game_id).await.is_none());
        assert!(author_service::find_author(&state, &review.author_id).await.is_none());
    }

    #[tokio::test]
    async fn deleting_game_does_not_cascade() {
        let state = AppState::new(default_seed());
        let review = find_review(&state, "2").await.unwrap();
        assert_eq!(review.game_id, "1");

        game_service::delete_game(&state, "1").await.unwrap();
        author_service::delete_author(&state, "2").await.unwrap();

        let review = find_review(&state, "2").await.unwrap();
        assert!(game_service::find_game(&state, &review.game_id).await.is_none());
        assert!(author_service::find_author(&state, &review.author_id).await.is_none());
        assert_eq!(list_reviews(&state).await.len(), 7);
    }

    #[tokio::test]
    async fn update_keeps_unsupplied_fields() {
        let state = AppState::new(default_seed());
        let updated = update_review(
            &state,
            "3",
            ReviewPatch {
                rating: None,
                content: Some("changed my mind".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.rating, 7);
        assert_eq!(updated.content, "changed my mind");
        assert_eq!(list_reviews(&state).await[2], updated);
    }

    #[tokio::test]
    async fn delete_returns_removed_review() {
        let state = AppState::new(default_seed());
        let removed = delete_review(&state, "7").await.unwrap();

        assert_eq!(removed.rating, 10);
        assert!(find_review(&state, "7").await.is_none());
        assert!(delete_review(&state, "7").await.is_none());
    }
}
