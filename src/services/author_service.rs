//! Author operations backing the `authors`, `authorById` and author mutation resolvers.

use tracing::debug;

use crate::{
    dao::models::{AuthorEntity, AuthorPatch, ReviewEntity},
    state::SharedState,
};

/// Every author, in store order.
pub async fn list_authors(state: &SharedState) -> Vec<AuthorEntity> {
    state.read().await.authors.all().to_vec()
}

/// Author with the given id, if any.
pub async fn find_author(state: &SharedState, id: &str) -> Option<AuthorEntity> {
    state.read().await.authors.find(id).cloned()
}

/// Reviews written by an author; empty when they have none.
pub async fn reviews_by_author(state: &SharedState, author_id: &str) -> Vec<ReviewEntity> {
    state.read().await.reviews_by_author(author_id)
}

/// Append a new author with a freshly allocated identifier.
pub async fn add_author(state: &SharedState, name: String, verified: bool) -> AuthorEntity {
    let mut db = state.write().await;
    let author = db
        .authors
        .insert_with(|id| AuthorEntity { id, name, verified });
    debug!(id = %author.id, "author added");
    author
}

/// Merge `patch` into the stored author, keeping its position in the table.
pub async fn update_author(
    state: &SharedState,
    id: &str,
    patch: AuthorPatch,
) -> Option<AuthorEntity> {
    let mut db = state.write().await;
    let updated = db.authors.replace_with(id, |current| patch.merge(current));
    match &updated {
        Some(_) => debug!(id, "author updated"),
        None => debug!(id, "author to update not found"),
    }
    updated
}

/// Remove an author. Their reviews stay in place with a dangling `author_id`.
pub async fn delete_author(state: &SharedState, id: &str) -> Option<AuthorEntity> {
    let removed = state.write().await.authors.remove(id);
    match &removed {
        Some(_) => debug!(id, "author deleted"),
        None => debug!(id, "author to delete not found"),
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::default_seed, dao::database::Seed, state::AppState};

    #[tokio::test]
    async fn reviews_by_author_follows_store_order() {
        let state = AppState::new(default_seed());
        let ids: Vec<_> = reviews_by_author(&state, "2")
            .await
            .into_iter()
            .map(|review| review.id)
            .collect();

        assert_eq!(ids, vec!["2", "4", "5"]);
        assert!(reviews_by_author(&state, "42").await.is_empty());
    }

    #[tokio::test]
    async fn add_after_delete_does_not_collide() {
        let state = AppState::new(default_seed());
        delete_author(&state, "1").await.unwrap();

        let author = add_author(&state, "luigi".into(), false).await;
        assert_eq!(author.id, "4");

        let ids: Vec<_> = list_authors(&state)
            .await
            .into_iter()
            .map(|author| author.id)
            .collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[tokio::test]
    async fn oversized_seed_id_does_not_break_allocation() {
        let state = AppState::new(Seed {
            authors: vec![
                AuthorEntity {
                    id: "1".into(),
                    name: "mario".into(),
                    verified: true,
                },
                AuthorEntity {
                    id: u64::MAX.to_string(),
                    name: "luigi".into(),
                    verified: false,
                },
            ],
            ..Seed::default()
        });

        let first = add_author(&state, "peach".into(), true).await;
        let second = add_author(&state, "daisy".into(), true).await;
        assert_eq!((first.id.as_str(), second.id.as_str()), ("3", "4"));

        let ids: Vec<_> = list_authors(&state)
            .await
            .into_iter()
            .map(|author| author.id)
            .collect();
        assert_eq!(ids, vec!["1", "18446744073709551615", "3", "4"]);
    }

    #[tokio::test]
    async fn update_missing_author_is_none() {
        let state = AppState::new(default_seed());
        let patch = AuthorPatch {
            name: Some("bowser".into()),
            verified: None,
        };

        assert!(update_author(&state, "10", patch).await.is_none());
        assert_eq!(list_authors(&state).await, default_seed().authors);
    }

    #[tokio::test]
    async fn update_verified_keeps_name() {
        let state = AppState::new(default_seed());
        let patch = AuthorPatch {
            name: None,
            verified: Some(true),
        };

        let author = update_author(&state, "2", patch).await.unwrap();
        assert_eq!(author.name, "yoshi");
        assert!(author.verified);
        assert_eq!(find_author(&state, "2").await, Some(author));
    }
}
