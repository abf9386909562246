use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};

use crate::{
    dao::models::AuthorEntity,
    dto::review::Review,
    services::author_service,
    state::SharedState,
};

/// Someone who writes reviews.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    /// Unique identifier.
    pub id: ID,
    /// Display name.
    pub name: String,
    /// Whether the author identity has been verified.
    pub verified: bool,
}

#[ComplexObject]
impl Author {
    /// Reviews written by this author, in store order. Never null.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<SharedState>()?;
        let reviews = author_service::reviews_by_author(state, &self.id).await;
        Ok(reviews.into_iter().map(Review::from).collect())
    }
}

impl From<AuthorEntity> for Author {
    fn from(entity: AuthorEntity) -> Self {
        Self {
            id: ID::from(entity.id),
            name: entity.name,
            verified: entity.verified,
        }
    }
}
