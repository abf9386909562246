use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};

use crate::{graphql::AppSchema, state::SharedState};

const GRAPHQL_PATH: &str = "/graphql";

/// GraphQL endpoint: `POST` executes operations, `GET` serves the GraphiQL explorer.
pub fn router(schema: AppSchema) -> Router<SharedState> {
    Router::new().route(
        GRAPHQL_PATH,
        get(graphiql).post_service(GraphQL::new(schema)),
    )
}

/// Render the in-browser explorer pointed at the GraphQL endpoint.
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
