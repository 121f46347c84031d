//! Rendering: draws the zone map onto a host-supplied [`Surface`].
//!
//! This module is the only place that issues draw primitives. It receives
//! read-only views of the zone room set, the current room, and the projection
//! and produces fill/stroke calls. It does not mutate any view state.
//!
//! Layering, bottom first: exits on the center's z level, every room, then
//! the current-room marker.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;
use tracing::{debug, trace};

use crate::camera::{Point, Projection, Rect};
use crate::consts::{CURRENT_ROOM_FILL, EXIT_STROKE, MAX_DRAWABLE_DIRECTION};
use crate::zone::{Color, Exit, Room, ZoneRooms};

/// The drawing seam. Hosts implement this over their native 2D context.
pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Fill the oval inscribed in `rect`.
    fn fill_oval(&mut self, rect: Rect, color: Color);
    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color);
}

/// What one frame drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Rooms visited by the room layer.
    pub rooms: usize,
    /// Exits handed to the exit layer (rooms on the center's z level only).
    pub exits_considered: usize,
    /// Exits actually stroked.
    pub exits_drawn: usize,
    /// Exits in the drawable direction range that are not cardinal.
    pub non_cardinal_exits: usize,
    /// Whether the current-room marker was painted.
    pub marker: bool,
}

/// Draw the full scene.
///
/// Without a center nothing is drawn and the stats are all zero.
pub fn draw(
    surface: &mut dyn Surface,
    rooms: &ZoneRooms,
    current_room: Option<&Room>,
    projection: &Projection,
    viewport: Rect,
) -> FrameStats {
    let mut stats = FrameStats::default();
    let Some(center) = projection.center else {
        return stats;
    };
    let sorted = rooms.sorted_rooms();

    // Layer 1: exits leaving rooms on the center's level.
    for room in sorted.iter().filter(|r| r.location.z() == center.z()) {
        for exit in &room.exits {
            stats.exits_considered += 1;
            if is_non_cardinal(exit) {
                debug!(direction = exit.direction, "non-cardinal exit direction");
                stats.non_cardinal_exits += 1;
            }
            if draw_exit(surface, exit, projection, viewport) {
                stats.exits_drawn += 1;
            }
        }
    }

    // Layer 2: every room, whatever its level.
    for room in &sorted {
        draw_room(surface, room, projection);
        stats.rooms += 1;
    }

    // Layer 3: current-room marker on top.
    if let Some(room) = current_room {
        stats.marker = mark_current_room(surface, room, projection);
    }

    trace!(?stats, "frame drawn");
    stats
}

/// Fill a zoom-sized square at the room's projected position.
fn draw_room(surface: &mut dyn Surface, room: &Room, projection: &Projection) {
    let Some(at) = projection.project(room.location) else {
        return;
    };
    surface.fill_rect(Rect::centered(at, projection.zoom), room.color);
}

/// Direction codes below the drawable limit that are not one of the four cardinals.
fn is_non_cardinal(exit: &Exit) -> bool {
    exit.direction < MAX_DRAWABLE_DIRECTION && !exit.is_cardinal()
}

/// Stroke an exit when it validates and either end lands inside the viewport.
fn draw_exit(surface: &mut dyn Surface, exit: &Exit, projection: &Projection, viewport: Rect) -> bool {
    let drawable = match exit.drawable() {
        Ok(d) => d,
        Err(reason) => {
            trace!(?reason, direction = exit.direction, "exit skipped");
            return false;
        }
    };
    let (Some(from), Some(to)) = (projection.project(drawable.from), projection.project(drawable.to)) else {
        return false;
    };
    if !(viewport.contains(from) || viewport.contains(to)) {
        return false;
    }
    surface.stroke_line(from, to, EXIT_STROKE);
    true
}

/// Fill a circle of radius zoom/4 over the current room.
fn mark_current_room(surface: &mut dyn Surface, room: &Room, projection: &Projection) -> bool {
    let Some(at) = projection.project(room.location) else {
        return false;
    };
    surface.fill_oval(Rect::centered(at, projection.zoom / 2.0), CURRENT_ROOM_FILL);
    true
}

// =============================================================
// Recording surface
// =============================================================

/// One recorded draw primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillOval { rect: Rect, color: Color },
    StrokeLine { from: Point, to: Point, color: Color },
}

/// A [`Surface`] that records every primitive in call order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of recorded commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_oval(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillOval { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::StrokeLine { from, to, color });
    }
}
