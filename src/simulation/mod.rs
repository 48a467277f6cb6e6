//! SimulationCore - owned context for the floating-shape physics
//!
//! The host drives it with `frame(now_ms)` from its redraw callback and with
//! pointer/resize/page events in between. Everything runs on one thread; an
//! event's mutation is visible to the very next frame.
//!
//! Per frame: integrate free bodies -> resolve all pairs -> queue effect
//! bursts for hard hits -> write one transform per body.

use std::collections::VecDeque;

use crate::core::{SimError, SimRng};
use crate::domain::config::PhysicsConfig;
use crate::domain::pages::{Page, PageFlow, RevealBoard};
use crate::domain::shape::{Bounds, ShapeDescriptor};
use crate::effects::EffectBurst;
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{BodyRegistry, CollisionHit};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/frame.rs"]
mod frame;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Floats written per body: translate x, translate y, rotation (deg)
pub const TRANSFORM_STRIDE: usize = 3;

/// Oldest bursts are dropped past this if the host stops draining.
const MAX_PENDING_BURSTS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

pub struct SimulationCore {
    config: PhysicsConfig,
    registry: BodyRegistry,
    rng: SimRng,

    // Loop
    state: LoopState,
    started: bool,
    initialized: bool,
    last_frame_ms: Option<f64>,
    pending_resize: Option<(Bounds, f64)>,
    frame: u64,

    // Outputs
    transforms: Vec<f32>,
    effects: VecDeque<EffectBurst>,
    hits: Vec<CollisionHit>,

    // Page flow
    pages: PageFlow,
    reveals: RevealBoard,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    pub fn new(config: PhysicsConfig) -> Self {
        init::create_core(config, 0x5eed_f1a7)
    }

    /// Deterministic core for tests and replays.
    pub fn with_seed(config: PhysicsConfig, seed: u64) -> Self {
        init::create_core(config, seed)
    }

    /// Build bodies from the shapes on screen and pre-settle overlaps.
    /// No-op (returns 0) after the first successful call.
    pub fn initialize(&mut self, shapes: &[ShapeDescriptor], bounds: Bounds) -> Result<usize, SimError> {
        init::initialize(self, shapes, bounds)
    }

    pub fn is_initialized(&self) -> bool { self.initialized }

    pub fn body_count(&self) -> usize { self.registry.body_count() }

    pub fn registry(&self) -> &BodyRegistry { &self.registry }

    pub fn frame_count(&self) -> u64 { self.frame }

    pub fn config(&self) -> &PhysicsConfig {
        settings::config(self)
    }

    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), SimError> {
        settings::set_config(self, config)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === LOOP CONTROLLER ===

    /// Start the frame loop. Only the first call after initialization counts.
    pub fn start(&mut self) -> bool {
        frame::start(self)
    }

    pub fn pause(&mut self) {
        frame::pause(self);
    }

    pub fn resume(&mut self) {
        frame::resume(self);
    }

    pub fn state(&self) -> LoopState { self.state }

    pub fn is_started(&self) -> bool { self.started }

    /// Host redraw callback. Returns whether the host should schedule
    /// another frame (always, once started).
    pub fn frame(&mut self, now_ms: f64) -> bool {
        frame::frame(self, now_ms)
    }

    /// One physics step of `dt` nominal frames at host time `now_ms`.
    pub fn step(&mut self, dt: f32, now_ms: f64) {
        step::step(self, dt, now_ms);
    }

    /// Apply new viewport bounds immediately.
    pub fn resize(&mut self, bounds: Bounds) {
        frame::resize(self, bounds);
    }

    /// Debounced resize; applied by the first frame after the window passes.
    pub fn request_resize(&mut self, width: f32, height: f32, now_ms: f64) -> Result<(), SimError> {
        frame::request_resize(self, width, height, now_ms)
    }

    // === POINTER INPUT ===

    pub fn pointer_down(&mut self, id: u32, pointer_id: i32, x: f32, y: f32) -> Result<bool, SimError> {
        commands::pointer_down(self, id, pointer_id, Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, id: u32, pointer_id: i32, x: f32, y: f32, now_ms: f64) -> Result<bool, SimError> {
        commands::pointer_move(self, id, pointer_id, Vec2::new(x, y), now_ms)
    }

    /// Pointer-up and pointer-cancel both end the drag.
    pub fn pointer_up(&mut self, id: u32, pointer_id: i32) -> Result<Option<Vec2>, SimError> {
        commands::pointer_up(self, id, pointer_id)
    }

    pub fn pointer_enter(&mut self, id: u32, pointer_type: &str, now_ms: f64) -> Result<bool, SimError> {
        commands::pointer_enter(self, id, pointer_type, now_ms)
    }

    pub fn pointer_leave(&mut self, id: u32) -> Result<(), SimError> {
        commands::pointer_leave(self, id)
    }

    // === PAGES ===

    pub fn switch_page(&mut self, from: Page, to: Page, now_ms: f64) -> Result<(), SimError> {
        commands::switch_page(self, from, to, now_ms)
    }

    pub fn active_page(&self) -> Option<Page> { self.pages.active() }

    pub fn set_gallery_cards(&mut self, count: usize) {
        self.reveals = RevealBoard::new(count);
    }

    pub fn reveal_card(&mut self, card: usize) -> bool {
        self.reveals.reveal(card)
    }

    pub fn is_card_revealed(&self, card: usize) -> bool {
        self.reveals.is_revealed(card)
    }

    // === OUTPUTS ===

    /// `[x, y, rotation]` per body in creation order.
    pub fn transforms(&self) -> &[f32] { &self.transforms }

    pub fn transform_css(&self, id: u32) -> Result<String, SimError> {
        render_extract::transform_css(self, id)
    }

    /// Take every queued particle burst.
    pub fn drain_effects(&mut self) -> Vec<EffectBurst> {
        self.effects.drain(..).collect()
    }

    pub fn pending_effects(&self) -> usize { self.effects.len() }

    fn push_effect(&mut self, burst: EffectBurst) {
        push_bounded(&mut self.effects, burst);
    }
}

fn push_bounded(effects: &mut VecDeque<EffectBurst>, burst: EffectBurst) {
    if effects.len() >= MAX_PENDING_BURSTS {
        effects.pop_front();
    }
    effects.push_back(burst);
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
