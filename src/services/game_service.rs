//! Game operations backing the `games`, `gameById` and game mutation resolvers.

use tracing::debug;

use crate::{
    dao::models::{GameEntity, GamePatch, ReviewEntity},
    state::SharedState,
};

/// Every game, in store order.
pub async fn list_games(state: &SharedState) -> Vec<GameEntity> {
    state.read().await.games.all().to_vec()
}

/// Game with the given id, if any.
pub async fn find_game(state: &SharedState, id: &str) -> Option<GameEntity> {
    state.read().await.games.find(id).cloned()
}

/// Reviews attached to a game; empty when nothing references it.
pub async fn reviews_for_game(state: &SharedState, game_id: &str) -> Vec<ReviewEntity> {
    state.read().await.reviews_for_game(game_id)
}

/// Append a new game with a freshly allocated identifier.
pub async fn add_game(state: &SharedState, title: String, platform: Vec<String>) -> GameEntity {
    let mut db = state.write().await;
    let game = db.games.insert_with(|id| GameEntity {
        id,
        title,
        platform,
    });
    debug!(id = %game.id, "game added");
    game
}

/// Merge `patch` into the stored game, keeping its position in the table.
pub async fn update_game(state: &SharedState, id: &str, patch: GamePatch) -> Option<GameEntity> {
    let mut db = state.write().await;
    let updated = db.games.replace_with(id, |current| patch.merge(current));
    match &updated {
        Some(_) => debug!(id, "game updated"),
        None => debug!(id, "game to update not found"),
    }
    updated
}

/// Remove a game. Reviews pointing at it are left dangling.
pub async fn delete_game(state: &SharedState, id: &str) -> Option<GameEntity> {
    let removed = state.write().await.games.remove(id);
    match &removed {
        Some(_) => debug!(id, "game deleted"),
        None => debug!(id, "game to delete not found"),
    }
    removed
}
