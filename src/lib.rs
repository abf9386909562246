//! Library crate for game-reviews-back, exposing modules for binaries and integration tests.

/// Startup configuration and seed loading.
pub mod config;
/// In-memory tables and entity models.
pub mod dao;
/// GraphQL and REST wire types.
pub mod dto;
/// Error types.
pub mod error;
/// GraphQL schema roots.
pub mod graphql;
/// HTTP routes.
pub mod routes;
/// Operations over the shared database.
pub mod services;
/// Shared application state.
pub mod state;
