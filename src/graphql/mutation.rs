//! Create, update and delete entry points.
//!
//! Update and delete return null for an unknown id instead of raising an error.
//! Updates only touch the arguments that were supplied.

use async_graphql::{Context, ID, Object, Result};

use crate::{
    dao::models::{AuthorPatch, GamePatch, ReviewPatch},
    dto::{author::Author, game::Game, review::Review},
    services::{author_service, game_service, review_service},
    state::SharedState,
};

/// Write entry points.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a game.
    async fn add_game(
        &self,
        ctx: &Context<'_>,
        title: String,
        platform: Vec<String>,
    ) -> Result<Game> {
        let state = ctx.data::<SharedState>()?;
        Ok(game_service::add_game(state, title, platform).await.into())
    }

    /// Overwrite the supplied fields of a game. Null when the id is unknown.
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        platform: Option<Vec<String>>,
    ) -> Result<Option<Game>> {
        let state = ctx.data::<SharedState>()?;
        let patch = GamePatch { title, platform };
        Ok(game_service::update_game(state, &id, patch)
            .await
            .map(Game::from))
    }

    /// Remove a game, returning it. Its reviews are kept.
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let state = ctx.data::<SharedState>()?;
        Ok(game_service::delete_game(state, &id).await.map(Game::from))
    }

    /// Create a review. The referenced author and game do not need to exist.
    async fn add_review(
        &self,
        ctx: &Context<'_>,
        rating: i32,
        content: String,
        #[graphql(name = "author_id")] author_id: ID,
        #[graphql(name = "game_id")] game_id: ID,
    ) -> Result<Review> {
        let state = ctx.data::<SharedState>()?;
        let review =
            review_service::add_review(state, rating, content, author_id.0, game_id.0).await;
        Ok(review.into())
    }

    /// Overwrite the rating and/or content of a review. Null when the id is unknown.
    async fn update_review(
        &self,
        ctx: &Context<'_>,
        id: ID,
        rating: Option<i32>,
        content: Option<String>,
    ) -> Result<Option<Review>> {
        let state = ctx.data::<SharedState>()?;
        let patch = ReviewPatch { rating, content };
        Ok(review_service::update_review(state, &id, patch)
            .await
            .map(Review::from))
    }

    /// Remove a review, returning it.
    async fn delete_review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let state = ctx.data::<SharedState>()?;
        Ok(review_service::delete_review(state, &id)
            .await
            .map(Review::from))
    }

    /// Create an author.
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        verified: bool,
    ) -> Result<Author> {
        let state = ctx.data::<SharedState>()?;
        Ok(author_service::add_author(state, name, verified).await.into())
    }

    /// Overwrite the supplied fields of an author. Null when the id is unknown.
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        verified: Option<bool>,
    ) -> Result<Option<Author>> {
        let state = ctx.data::<SharedState>()?;
        let patch = AuthorPatch { name, verified };
        Ok(author_service::update_author(state, &id, patch)
            .await
            .map(Author::from))
    }

    /// Remove an author, returning them. Their reviews are kept.
    async fn delete_author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let state = ctx.data::<SharedState>()?;
        Ok(author_service::delete_author(state, &id)
            .await
            .map(Author::from))
    }
}
