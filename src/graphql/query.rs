use async_graphql::{Context, ID, Object, Result};

use crate::{
    dto::{author::Author, game::Game, review::Review},
    services::{author_service, game_service, review_service},
    state::SharedState,
};

/// Read-only entry points.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every game, in store order.
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let state = ctx.data::<SharedState>()?;
        let games = game_service::list_games(state).await;
        Ok(games.into_iter().map(Game::from).collect())
    }

    /// Game with the given id, or null.
    async fn game_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let state = ctx.data::<SharedState>()?;
        Ok(game_service::find_game(state, &id).await.map(Game::from))
    }

    /// Every review, in store order.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<SharedState>()?;
        let reviews = review_service::list_reviews(state).await;
        Ok(reviews.into_iter().map(Review::from).collect())
    }

    /// Review with the given id, or null.
    async fn review_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let state = ctx.data::<SharedState>()?;
        Ok(review_service::find_review(state, &id)
            .await
            .map(Review::from))
    }

    /// Every author, in store order.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let state = ctx.data::<SharedState>()?;
        let authors = author_service::list_authors(state).await;
        Ok(authors.into_iter().map(Author::from).collect())
    }

    /// Author with the given id, or null.
    async fn author_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let state = ctx.data::<SharedState>()?;
        Ok(author_service::find_author(state, &id)
            .await
            .map(Author::from))
    }
}
