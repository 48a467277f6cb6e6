//! Input Controller - pointer events to drag sessions, flings and hover spins
//!
//! Every entry point takes a body id and mutates through the registry. A drag
//! belongs to the pointer that started it; events from any other pointer are
//! ignored.

mod drag;
mod hover;

pub use drag::{begin_drag, drag_to, end_drag, fling_velocity};
pub use hover::{begin_hover, end_hover};

/// Pointer device class reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Parse a DOM `pointerType`; unknown strings count as mouse.
    pub fn parse(s: &str) -> Self {
        match s {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }

    /// Hover only exists for devices that can point without pressing.
    pub fn can_hover(self) -> bool {
        !matches!(self, PointerKind::Touch)
    }
}
