use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dao::database::{Database, Seed};

/// Cheaply clonable handle to [`AppState`].
pub type SharedState = Arc<AppState>;

/// Central application state owning the in-memory database.
///
/// Every resolver takes the lock once for its whole operation, so mutations
/// are applied one at a time and readers never observe a half-applied change.
pub struct AppState {
    database: RwLock<Database>,
}

impl AppState {
    /// Construct a new [`AppState`] seeded with `seed`, wrapped in an [`Arc`] so it can be
    /// cloned cheaply.
    pub fn new(seed: Seed) -> SharedState {
        Arc::new(Self {
            database: RwLock::new(Database::seeded(seed)),
        })
    }

    /// Shared access for read-only resolvers.
    pub async fn read(&self) -> RwLockReadGuard<'_, Database> {
        self.database.read().await
    }

    /// Exclusive access for mutations.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Database> {
        self.database.write().await
    }
}
