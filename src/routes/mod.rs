//! HTTP route trees.

use axum::Router;

use crate::{graphql::build_schema, state::SharedState};

/// Swagger UI for the REST routes.
pub mod docs;
/// GraphQL endpoint and explorer.
pub mod graphql;
/// Health check route.
pub mod health;

/// Compose all route trees, wiring in shared state, the GraphQL schema and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let schema = build_schema(state.clone());
    health::router()
        .merge(graphql::router(schema))
        .merge(docs::router())
        .with_state(state)
}
