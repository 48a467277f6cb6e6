//! Effect Emitter - particle bursts for hovers and hard collisions
//!
//! Bursts are plain data handed to the rendering layer. Building one reads
//! body state but never writes it.

mod burst;

pub use burst::{collision_burst, hover_burst, EffectBurst, EffectKind, ParticleSpec, Trajectory};
