//! Background zone loader.
//!
//! DESIGN
//! ======
//! Each load request is one task on the injected runtime. The task looks up
//! the current room, then every room of that room's zone, and sends the
//! result back over a channel. It never touches view state; the owning
//! thread applies the outcome when it drains the channel.

use std::collections::HashMap;
use std::sync::Arc;

use map_canvas::zone::{Room, RoomId};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::db::{MapStore, StoreError};

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;

/// Everything one load produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSnapshot {
    pub current_room: Option<Room>,
    pub rooms: HashMap<RoomId, Room>,
}

/// Result of one background load as seen by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(ZoneSnapshot),
    /// The store failed. The error was already logged.
    Failed,
}

/// Load `room_id` and the rest of its zone.
///
/// An unknown room is not an error: the snapshot has no current room and an
/// empty zone.
///
/// # Errors
///
/// Returns the first [`StoreError`] from either query.
pub async fn load_zone(store: &dyn MapStore, room_id: RoomId) -> Result<ZoneSnapshot, StoreError> {
    let Some(current_room) = store.room_by_id(room_id).await? else {
        warn!(room_id, "current room not found");
        return Ok(ZoneSnapshot::default());
    };
    let rooms = store.rooms_by_zone_id(current_room.zone_id).await?;
    Ok(ZoneSnapshot { current_room: Some(current_room), rooms })
}

/// Spawn one load on `runtime`. Exactly one outcome is sent on `tx`, even
/// when the query task panics.
pub fn spawn_load(
    runtime: &Handle,
    store: Arc<dyn MapStore>,
    room_id: RoomId,
    tx: UnboundedSender<LoadOutcome>,
) -> JoinHandle<()> {
    let inner = runtime.clone();
    runtime.spawn(async move {
        info!(room_id, "zone load started");
        let query = inner.spawn(async move { load_zone(store.as_ref(), room_id).await });
        let outcome = match query.await {
            Ok(Ok(snapshot)) => {
                info!(room_id, rooms = snapshot.rooms.len(), "zone load finished");
                LoadOutcome::Loaded(snapshot)
            }
            Ok(Err(e)) => {
                error!(error = %e, room_id, "error loading database");
                LoadOutcome::Failed
            }
            Err(e) => {
                error!(error = %e, room_id, "error loading database: load task aborted");
                LoadOutcome::Failed
            }
        };
        if tx.send(outcome).is_err() {
            warn!(room_id, "view dropped before zone load finished");
        }
    })
}
