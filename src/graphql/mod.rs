//! GraphQL schema over the games, reviews and authors tables.

mod mutation;
mod query;

use async_graphql::{EmptySubscription, Schema};

use crate::state::SharedState;

pub use self::{mutation::MutationRoot, query::QueryRoot};

/// Executable schema served on `/graphql`.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema and inject the shared state into the resolver context.
pub fn build_schema(state: SharedState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
