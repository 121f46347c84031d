//! Input model: pointer buttons delivered by the host.
//!
//! The host translates its native pointer events into view-local surface
//! coordinates and one of these buttons before calling into the engine.

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap). Re-centers the view.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}
