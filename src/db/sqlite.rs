//! SQLite-backed [`MapStore`].
//!
//! DESIGN
//! ======
//! One pool per store, opened once at startup and shared by every load.
//! Exits are fetched with both endpoints joined in, so each exit carries the
//! zone and position of the rooms it connects without further lookups.
//!
//! ERROR HANDLING
//! ==============
//! Query failures propagate as [`StoreError`]. A stored color that does not
//! parse is not an error: the room falls back to the default fill and a
//! warning is logged.

use std::collections::HashMap;
use std::str::FromStr;

use map_canvas::consts::DEFAULT_ROOM_FILL;
use map_canvas::coord::Coordinate3D;
use map_canvas::zone::{Color, Exit, Room, RoomId, RoomRef, ZoneId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, warn};

use super::{MapStore, StoreError};

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 4;

const ROOM_COLUMNS: &str = "SELECT id, zone_id, x, y, z, color FROM rooms";

const EXIT_COLUMNS: &str = "SELECT e.from_room_id, e.direction,
        f.zone_id AS from_zone_id, f.x AS from_x, f.y AS from_y, f.z AS from_z,
        t.id AS to_id, t.zone_id AS to_zone_id, t.x AS to_x, t.y AS to_y, t.z AS to_z
     FROM exits e
     LEFT JOIN rooms f ON f.id = e.from_room_id
     LEFT JOIN rooms t ON t.id = e.to_room_id";

fn db_max_connections() -> u32 {
    std::env::var("MUDMAP_DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
}

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    id: i64,
    zone_id: i64,
    x: i64,
    y: i64,
    z: i64,
    color: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct ExitRow {
    from_room_id: i64,
    direction: i64,
    from_zone_id: Option<i64>,
    from_x: Option<i64>,
    from_y: Option<i64>,
    from_z: Option<i64>,
    to_id: Option<i64>,
    to_zone_id: Option<i64>,
    to_x: Option<i64>,
    to_y: Option<i64>,
    to_z: Option<i64>,
}

/// Room/exit queries over a SQLite map database.
#[derive(Debug, Clone)]
pub struct SqliteMapStore {
    pool: SqlitePool,
}

impl SqliteMapStore {
    /// Connect to `database_url` and apply the schema migrations.
    ///
    /// In-memory URLs get a single long-lived connection, since every SQLite
    /// memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration fails.
    pub async fn open(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(db_max_connections())
        };
        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("src/db/migrations").run(&pool).await?;

        info!(database_url, "map store opened");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Dropping the store closes them too.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn exits_from(&self, filter: &str, key: i64) -> Result<Vec<ExitRow>, StoreError> {
        let sql = format!("{EXIT_COLUMNS} WHERE {filter} ORDER BY e.id");
        let rows = sqlx::query_as::<_, ExitRow>(&sql)
            .bind(key)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl MapStore for SqliteMapStore {
    async fn room_by_id(&self, id: RoomId) -> Result<Option<Room>, StoreError> {
        let sql = format!("{ROOM_COLUMNS} WHERE id = ?");
        let Some(row) = sqlx::query_as::<_, RoomRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let mut room = room_from_row(row);
        room.exits = self
            .exits_from("e.from_room_id = ?", id)
            .await?
            .into_iter()
            .map(exit_from_row)
            .collect();
        Ok(Some(room))
    }

    async fn rooms_by_zone_id(&self, zone_id: ZoneId) -> Result<HashMap<RoomId, Room>, StoreError> {
        let sql = format!("{ROOM_COLUMNS} WHERE zone_id = ?");
        let mut rooms: HashMap<RoomId, Room> = sqlx::query_as::<_, RoomRow>(&sql)
            .bind(zone_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|row| (row.id, room_from_row(row)))
            .collect();

        for row in self.exits_from("f.zone_id = ?", zone_id).await? {
            if let Some(room) = rooms.get_mut(&row.from_room_id) {
                room.exits.push(exit_from_row(row));
            }
        }
        Ok(rooms)
    }
}

fn room_from_row(row: RoomRow) -> Room {
    let color = match row.color.as_deref() {
        None => DEFAULT_ROOM_FILL,
        Some(raw) => Color::from_hex(raw).unwrap_or_else(|| {
            warn!(room_id = row.id, color = raw, "unreadable room color; using default");
            DEFAULT_ROOM_FILL
        }),
    };
    Room {
        id: row.id,
        zone_id: row.zone_id,
        location: Coordinate3D::new(row.x, row.y, row.z),
        color,
        exits: Vec::new(),
    }
}

fn exit_from_row(row: ExitRow) -> Exit {
    let from = endpoint(Some(row.from_room_id), row.from_zone_id, row.from_x, row.from_y, row.from_z);
    let to = endpoint(row.to_id, row.to_zone_id, row.to_x, row.to_y, row.to_z);
    Exit { direction: row.direction, from, to }
}

fn endpoint(
    id: Option<i64>,
    zone_id: Option<i64>,
    x: Option<i64>,
    y: Option<i64>,
    z: Option<i64>,
) -> Option<RoomRef> {
    let (Some(id), Some(zone_id), Some(x), Some(y), Some(z)) = (id, zone_id, x, y, z) else {
        return None;
    };
    Some(RoomRef { id, zone_id, location: Coordinate3D::new(x, y, z) })
}
