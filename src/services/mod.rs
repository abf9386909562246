/// Author CRUD and author -> reviews lookups.
pub mod author_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Game CRUD and game -> reviews lookups.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Review CRUD.
pub mod review_service;
