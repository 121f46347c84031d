#[cfg(test)]
#[path = "coord_test.rs"]
mod coord_test;

use serde::{Deserialize, Serialize};

/// A point on three axes of a numeric scalar type.
///
/// Used for room positions and for the view center. Any value is a legal
/// coordinate; there is no validation and no mutation after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate3D<T> {
    x: T,
    y: T,
    z: T,
}

impl<T: Copy> Coordinate3D<T> {
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn x(&self) -> T {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> T {
        self.y
    }

    #[must_use]
    pub const fn z(&self) -> T {
        self.z
    }

    /// Same x/y, different z.
    #[must_use]
    pub const fn with_z(&self, z: T) -> Self {
        Self { x: self.x, y: self.y, z }
    }
}

impl<T> From<(T, T, T)> for Coordinate3D<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}
