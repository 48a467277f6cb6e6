//! Body - circular proxy for a floating shape
//!
//! Radius and mass are private and set once; everything else is plain
//! state mutated by the integrator, the resolver and the input controller.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{Body, DragSession, PointerSample};
