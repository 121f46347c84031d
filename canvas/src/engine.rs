use std::collections::HashMap;

use tracing::debug;

use crate::camera::{Point, Projection, Rect};
use crate::consts::DEFAULT_ZOOM;
use crate::coord::Coordinate3D;
use crate::input::Button;
use crate::render::{self, FrameStats, Surface};
use crate::zone::{Room, RoomId, ZoneRooms};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input and load handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The view center moved to a new world coordinate.
    CenterChanged(Coordinate3D<i64>),
    /// State changed; the host should schedule a redraw.
    RenderNeeded,
}

/// Map canvas state: the zone room set, the current room, the center, and zoom.
///
/// Holds no store or surface handle so it can be driven and tested without
/// any I/O. The center is resolved at read time from an explicit override
/// (set by pointer re-centering) or, failing that, the current room's position.
#[derive(Debug, Clone)]
pub struct MapCore {
    pub rooms: ZoneRooms,
    pub viewport: Rect,
    current_room: Option<Room>,
    center_override: Option<Coordinate3D<i64>>,
    zoom: f64,
}

impl Default for MapCore {
    fn default() -> Self {
        Self {
            rooms: ZoneRooms::new(),
            viewport: Rect::from_size(0.0, 0.0),
            current_room: None,
            center_override: None,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A core with a non-default zoom. Zoom does not change after construction.
    #[must_use]
    pub fn with_zoom(zoom: f64) -> Self {
        Self { zoom, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the zone room set and the current room with a fresh load.
    pub fn load_snapshot(&mut self, current_room: Option<Room>, rooms: HashMap<RoomId, Room>) {
        self.current_room = current_room;
        self.rooms.load_snapshot(rooms);
    }

    /// Update the view bounds in surface units.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Rect::from_size(width, height);
    }

    // --- Input events ---

    /// Re-center on the world point under `screen_pt`.
    ///
    /// The new center keeps the current center's z (or 0 without one) and is
    /// no longer tied to a room, so the current room is cleared. With no
    /// center to invert against, nothing moves. A redraw is always requested.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        let z = self.center().map_or(0, |c| c.z());
        let mut actions = Vec::new();
        if let Some(world) = self.projection().surface_to_world(screen_pt) {
            let center = Coordinate3D::new(truncate(world.x), truncate(world.y), z);
            debug!(x = center.x(), y = center.y(), z = center.z(), "view re-centered");
            self.center_override = Some(center);
            self.current_room = None;
            actions.push(Action::CenterChanged(center));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Render ---

    /// Draw the current state onto `surface`.
    pub fn render(&self, surface: &mut dyn Surface) -> FrameStats {
        render::draw(surface, &self.rooms, self.current_room.as_ref(), &self.projection(), self.viewport)
    }

    // --- Queries ---

    /// The world point currently anchored at the viewport middle, if any.
    #[must_use]
    pub fn center(&self) -> Option<Coordinate3D<i64>> {
        self.center_override
            .or_else(|| self.current_room.as_ref().map(|r| r.location))
    }

    #[must_use]
    pub fn current_room(&self) -> Option<&Room> {
        self.current_room.as_ref()
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Projection for the current center, viewport, and zoom.
    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection::new(self.center(), self.viewport, self.zoom)
    }
}

/// World coordinates are integral; drop the fractional part toward zero.
#[allow(clippy::cast_possible_truncation)]
fn truncate(v: f64) -> i64 {
    v.trunc() as i64
}
