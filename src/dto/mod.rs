//! Wire types exposed by the GraphQL schema and REST routes.

/// GraphQL `Author` type.
pub mod author;
/// GraphQL `Game` type.
pub mod game;
/// Health check payload.
pub mod health;
/// GraphQL `Review` type.
pub mod review;
