use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::{
    dao::models::GameEntity,
    dto::review::Review,
    services::game_service,
    state::SharedState,
};

/// A video game that can be reviewed.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Game {
    /// Unique identifier.
    pub id: ID,
    /// Display title.
    pub title: String,
    /// Platforms the game ships on.
    pub platform: Vec<String>,
}

#[ComplexObject]
impl Game {
    /// Reviews pointing at this game, in store order. Never null.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<SharedState>()?;
        let reviews = game_service::reviews_for_game(state, &self.id).await;
        Ok(reviews.into_iter().map(Review::from).collect())
    }
}

impl From<GameEntity> for Game {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: ID::from(entity.id),
            title: entity.title,
            platform: entity.platform,
        }
    }
}
