//! Map store: the query interface over persisted rooms and exits.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer never talks to the database directly. It goes through
//! [`MapStore`], which the background loader calls off the UI thread. The
//! production implementation is [`SqliteMapStore`].

mod sqlite;

use std::collections::HashMap;

use map_canvas::zone::{Room, RoomId, ZoneId};

pub use sqlite::SqliteMapStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Read-only queries over the room/exit graph.
#[async_trait::async_trait]
pub trait MapStore: Send + Sync {
    /// Look up one room with its outgoing exits.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails. A missing room is `Ok(None)`.
    async fn room_by_id(&self, id: RoomId) -> Result<Option<Room>, StoreError>;

    /// All rooms of a zone keyed by id, each with its outgoing exits.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the query fails. An empty zone is an empty map.
    async fn rooms_by_zone_id(&self, zone_id: ZoneId) -> Result<HashMap<RoomId, Room>, StoreError>;
}
