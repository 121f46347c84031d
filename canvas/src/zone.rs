//! Zone model: rooms, exits, colors, and the in-memory zone room set.
//!
//! Rooms arrive from the host's store grouped by zone. Each exit carries
//! lightweight references to both of its endpoints so the renderer can place
//! it without another lookup. `ZoneRooms` holds the rooms of exactly one zone
//! and is replaced wholesale whenever a new load lands.

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{CARDINAL_DIRECTIONS, MAX_DRAWABLE_DIRECTION};
use crate::coord::Coordinate3D;

/// Unique, stable identifier for a room.
pub type RoomId = i64;

/// Identifier grouping rooms into one navigable cluster.
pub type ZoneId = i64;

// =============================================================
// Color
// =============================================================

/// RGBA display color. Serialized as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(0xFF, 0, 0);

    /// Opaque color from components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let (Ok(r), Ok(g), Ok(b)) = (byte(0), byte(2), byte(4)) else {
            return None;
        };
        let a = if hex.len() == 8 {
            match byte(6) {
                Ok(a) => a,
                Err(_) => return None,
            }
        } else {
            0xFF
        };
        Some(Self { r, g, b, a })
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// =============================================================
// Rooms and exits
// =============================================================

/// Non-owning reference to an exit endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    pub id: RoomId,
    pub zone_id: ZoneId,
    pub location: Coordinate3D<i64>,
}

/// A directed edge between two rooms.
///
/// Either endpoint is `None` when the store has no room for the referenced id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: i64,
    pub from: Option<RoomRef>,
    pub to: Option<RoomRef>,
}

/// Why an exit is not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSkip {
    /// Direction code at or above [`MAX_DRAWABLE_DIRECTION`].
    DirectionOutOfRange,
    /// One or both endpoints are unknown.
    MissingEndpoint,
    /// Endpoints are in different zones. No stub rendering exists for these yet.
    CrossZone,
}

/// An exit that passed validation, reduced to what the renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableExit {
    pub direction: i64,
    pub from: Coordinate3D<i64>,
    pub to: Coordinate3D<i64>,
}

impl Exit {
    /// Validate this exit for drawing.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExitSkip`] reason that applies.
    pub fn drawable(&self) -> Result<DrawableExit, ExitSkip> {
        if self.direction >= MAX_DRAWABLE_DIRECTION {
            return Err(ExitSkip::DirectionOutOfRange);
        }
        let (Some(from), Some(to)) = (self.from, self.to) else {
            return Err(ExitSkip::MissingEndpoint);
        };
        if from.zone_id != to.zone_id {
            return Err(ExitSkip::CrossZone);
        }
        Ok(DrawableExit { direction: self.direction, from: from.location, to: to.location })
    }

    /// Whether the direction code is one of the four non-diagonal directions.
    #[must_use]
    pub fn is_cardinal(&self) -> bool {
        CARDINAL_DIRECTIONS.contains(&self.direction)
    }
}

/// A room as loaded from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub zone_id: ZoneId,
    pub location: Coordinate3D<i64>,
    pub color: Color,
    pub exits: Vec<Exit>,
}

impl Room {
    /// Endpoint reference to this room.
    #[must_use]
    pub fn endpoint(&self) -> RoomRef {
        RoomRef { id: self.id, zone_id: self.zone_id, location: self.location }
    }
}

// =============================================================
// Zone room set
// =============================================================

/// Rooms of a single zone keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ZoneRooms {
    rooms: HashMap<RoomId, Room>,
}

impl ZoneRooms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every room with a new snapshot.
    pub fn load_snapshot(&mut self, rooms: HashMap<RoomId, Room>) {
        self.rooms = rooms;
    }

    #[must_use]
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// All rooms ordered by id, for deterministic draw order.
    #[must_use]
    pub fn sorted_rooms(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.values().collect();
        rooms.sort_by_key(|r| r.id);
        rooms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl FromIterator<Room> for ZoneRooms {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        Self { rooms: iter.into_iter().map(|r| (r.id, r)).collect() }
    }
}
