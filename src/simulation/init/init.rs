use std::collections::VecDeque;

use crate::core::{SimError, SimRng};
use crate::domain::config::PhysicsConfig;
use crate::domain::pages::{PageFlow, RevealBoard};
use crate::domain::shape::{Bounds, ShapeDescriptor};
use crate::rigid_body::{Body, Vec2};
use crate::rigid_body_system::BodyRegistry;

use super::perf_stats::PerfStats;
use super::render_extract::write_transforms;
use super::{LoopState, SimulationCore};

pub(super) fn create_core(config: PhysicsConfig, seed: u64) -> SimulationCore {
    let page_delay = config.page_switch_delay_ms;
    SimulationCore {
        config,
        // Replaced by the real viewport in `initialize`.
        registry: BodyRegistry::new(Bounds { width: 1.0, height: 1.0 }),
        rng: SimRng::seeded(seed),
        state: LoopState::Running,
        started: false,
        initialized: false,
        last_frame_ms: None,
        pending_resize: None,
        frame: 0,
        transforms: Vec::new(),
        effects: VecDeque::new(),
        hits: Vec::new(),
        pages: PageFlow::new(page_delay),
        reveals: RevealBoard::new(0),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn initialize(
    sim: &mut SimulationCore,
    shapes: &[ShapeDescriptor],
    bounds: Bounds,
) -> Result<usize, SimError> {
    if sim.initialized {
        log::debug!("initialize called twice, ignoring");
        return Ok(0);
    }
    // Validate everything before touching state.
    let bounds = Bounds::new(bounds.width, bounds.height)?;
    for (index, shape) in shapes.iter().enumerate() {
        shape.check(index)?;
    }

    sim.registry.set_bounds(bounds);
    for shape in shapes {
        let (cx, cy) = shape.center();
        let radius = shape.width * 0.5 * sim.config.radius_shrink;
        let mut body = Body::new_circle(
            Vec2::new(cx, cy),
            radius,
            shape.width * 0.5,
            shape.height * 0.5,
            shape.color.clone(),
            0,
        );
        let speed = sim.config.initial_speed;
        body.velocity = Vec2::new(sim.rng.symmetric(speed), sim.rng.symmetric(speed));
        sim.registry.add_body(body);
    }

    let passes = sim.registry.settle(&sim.config, sim.config.settle_passes);
    sim.initialized = true;
    write_transforms(sim);

    log::info!(
        "initialized {} bodies in {}x{} ({} settle passes)",
        shapes.len(),
        bounds.width,
        bounds.height,
        passes
    );
    Ok(shapes.len())
}
