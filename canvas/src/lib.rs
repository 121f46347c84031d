//! Map projection and drawing core for the MUD map viewer.
//!
//! This crate is pure presentation logic with no I/O. It owns the in-memory
//! zone room set, the view center and zoom, the world/surface coordinate
//! transforms, pointer re-centering, and the draw orchestration that turns
//! rooms and exits into fill/stroke primitives. The host application is
//! responsible for loading rooms from a store, delivering pointer events, and
//! supplying a [`render::Surface`] to paint on.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::MapCore`] state, pointer handling, and host [`engine::Action`]s |
//! | [`zone`] | Rooms, exits, colors, and the per-zone room set |
//! | [`camera`] | Surface points/rects and the world/surface [`camera::Projection`] |
//! | [`coord`] | Generic [`coord::Coordinate3D`] value type |
//! | [`input`] | Pointer button identifiers |
//! | [`render`] | The [`render::Surface`] seam, scene drawing, and a recording surface |
//! | [`consts`] | Shared constants (default zoom, direction range, fixed colors) |

pub mod camera;
pub mod consts;
pub mod coord;
pub mod engine;
pub mod input;
pub mod render;
pub mod zone;
