//! Systems operating on the body registry.

pub mod effects;
pub mod input;
pub mod rigid_body;
pub mod rigid_body_system;
