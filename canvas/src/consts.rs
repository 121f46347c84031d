//! Shared constants for the map canvas crate.

use crate::zone::Color;

// ── View ────────────────────────────────────────────────────────

/// Zoom factor a new view starts with.
pub const DEFAULT_ZOOM: f64 = 10.0;

// ── Exits ───────────────────────────────────────────────────────

/// Direction codes at or above this value are never drawn.
pub const MAX_DRAWABLE_DIRECTION: i64 = 9;

/// Direction codes for the four non-diagonal compass directions.
pub const CARDINAL_DIRECTIONS: [i64; 4] = [1, 3, 5, 7];

// ── Colors ──────────────────────────────────────────────────────

/// Stroke color for exit lines.
pub const EXIT_STROKE: Color = Color::BLACK;

/// Fill color for the current-room marker.
pub const CURRENT_ROOM_FILL: Color = Color::RED;

/// Fill color for rooms whose stored color is missing or unreadable.
pub const DEFAULT_ROOM_FILL: Color = Color::rgb(0x80, 0x80, 0x80);
