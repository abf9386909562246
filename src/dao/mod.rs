/// In-memory database holding the entity tables.
pub mod database;
/// Entity model definitions.
pub mod models;
/// Ordered table with identifier allocation.
pub mod table;
