use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::{
    dao::models::ReviewEntity,
    dto::{author::Author, game::Game},
    services::{author_service, game_service},
    state::SharedState,
};

/// A rating plus a short text written by an author about a game.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Review {
    /// Unique identifier.
    pub id: ID,
    /// Score given by the author.
    pub rating: i32,
    /// Review body.
    pub content: String,
    /// Identifier of the author, possibly dangling.
    #[graphql(name = "author_id")]
    pub author_id: ID,
    /// Identifier of the reviewed game, possibly dangling.
    #[graphql(name = "game_id")]
    pub game_id: ID,
}

#[ComplexObject]
impl Review {
    /// Reviewed game, or null when `game_id` no longer matches a game.
    async fn game(&self, ctx: &Context<'_>) -> Result<Option<Game>> {
        let state = ctx.data::<SharedState>()?;
        Ok(game_service::find_game(state, &self.game_id)
            .await
            .map(Game::from))
    }

    /// Writer of the review, or null when `author_id` no longer matches an author.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let state = ctx.data::<SharedState>()?;
        Ok(author_service::find_author(state, &self.author_id)
            .await
            .map(Author::from))
    }
}

impl From<ReviewEntity> for Review {
    fn from(entity: ReviewEntity) -> Self {
        Self {
            id: ID::from(entity.id),
            rating: entity.rating,
            content: entity.content,
            author_id: ID::from(entity.author_id),
            game_id: ID::from(entity.game_id),
        }
    }
}
