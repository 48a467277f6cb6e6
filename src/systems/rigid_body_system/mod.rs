//! BodyRegistry - the fixed set of floating-shape bodies and their viewport
//!
//! Per frame: `integrate` (friction, spin, drift, walls) then
//! `resolve_collisions` (all pairs, positional split + elastic impulse).
//! Dragged bodies are skipped by both; the pointer owns them.

mod collision;
mod integrate;
mod system;

pub use collision::{CollisionHit, ResolveStats};
pub use system::BodyRegistry;
