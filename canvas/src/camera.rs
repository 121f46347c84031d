//! World/surface coordinate transforms.
//!
//! World space is the integer room grid (y up). Surface space is the
//! floating-point drawing surface. The forward transform divides by zoom and
//! flips y; the inverse multiplies by zoom and does not flip. The two are not
//! inverses of each other and callers rely on each formula as written.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate3D;

/// A point in either surface or world (x/y plane) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size anchored at the origin.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// Square of side `side` centered on `center`.
    #[must_use]
    pub fn centered(center: Point, side: f64) -> Self {
        Self { x: center.x - side / 2.0, y: center.y - side / 2.0, width: side, height: side }
    }

    #[must_use]
    pub fn mid(&self) -> Point {
        Point { x: self.x + self.width / 2.0, y: self.y + self.height / 2.0 }
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom edges are not.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Projection state for one frame or one input event.
///
/// `center` is `None` when the view has neither a re-centered point nor a
/// current room; every transform then yields `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub center: Option<Coordinate3D<i64>>,
    pub mid: Point,
    pub zoom: f64,
}

impl Projection {
    #[must_use]
    pub fn new(center: Option<Coordinate3D<i64>>, bounds: Rect, zoom: f64) -> Self {
        Self { center, mid: bounds.mid(), zoom }
    }

    /// Map a world x/y point onto the surface.
    #[must_use]
    pub fn world_to_surface(&self, world: Point) -> Option<Point> {
        let (cx, cy) = self.center_xy()?;
        let dx = world.x - cx;
        let dy = -(world.y - cy);
        Some(Point { x: self.mid.x + dx / self.zoom, y: self.mid.y + dy / self.zoom })
    }

    /// Map a surface point back into world x/y.
    #[must_use]
    pub fn surface_to_world(&self, surface: Point) -> Option<Point> {
        let (cx, cy) = self.center_xy()?;
        Some(Point {
            x: (surface.x - self.mid.x) * self.zoom + cx,
            y: (surface.y - self.mid.y) * self.zoom + cy,
        })
    }

    /// Surface position of a room-grid coordinate. The z axis is ignored.
    #[must_use]
    pub fn project(&self, location: Coordinate3D<i64>) -> Option<Point> {
        self.world_to_surface(world_point(location))
    }

    fn center_xy(&self) -> Option<(f64, f64)> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return None;
        }
        let center = world_point(self.center?);
        Some((center.x, center.y))
    }
}

/// The x/y plane of a world coordinate as a floating-point point.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn world_point(location: Coordinate3D<i64>) -> Point {
    Point { x: location.x() as f64, y: location.y() as f64 }
}
