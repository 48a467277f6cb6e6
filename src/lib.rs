//! Drift Engine - floating-shape physics for the landing page, in WASM
//!
//! Layout:
//! - core/        - errors, console logging, seeded randomness
//! - domain/      - tunables, shape descriptors, page flow
//! - systems/     - bodies, integrator + collision resolver, input, effects
//! - simulation/  - owned context, frame loop, JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::effects;
pub use systems::input;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic reporting and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    log::info!("drift engine {} ready", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initial dash array/offset for a brush stroke of `length`, hiding it until
/// its card is revealed
#[wasm_bindgen]
pub fn brush_stroke_dash(length: f32) -> f32 {
    domain::pages::stroke_dash(length).dash_offset
}

pub use crate::core::SimError;
pub use domain::config::PhysicsConfig;
pub use domain::shape::{Bounds, ShapeDescriptor};
pub use simulation::{LoopState, Simulation, SimulationCore};
