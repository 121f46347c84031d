//! mudmap: host side of the MUD map viewer.
//!
//! The presentation core lives in the `map_canvas` crate. This crate
//! supplies what the core deliberately leaves out:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`db`] | `MapStore` trait and the SQLite implementation |
//! | [`loader`] | One-shot background zone loads |
//! | [`view`] | `MapView`, the UI-thread owner of `MapCore` |
//! | [`svg`] | SVG document surface |
//! | [`config`] | Flag/env configuration |

pub mod config;
pub mod db;
pub mod loader;
pub mod svg;
pub mod view;
