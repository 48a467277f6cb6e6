use crate::effects::collision_burst;

use super::render_extract::write_transforms;
use super::{push_bounded, PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore, dt: f32, now_ms: f64) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === INTEGRATE (free bodies, walls) ===
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let integrated = sim.registry.integrate(dt, &sim.config, &mut sim.rng);
    if let Some(t) = t0 {
        sim.perf_stats.integrate_ms = t.elapsed_ms();
    }

    // === RESOLVE PAIRS ===
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    sim.hits.clear();
    let stats = sim.registry.resolve_collisions(&sim.config, Some(now_ms), &mut sim.hits);
    if let Some(t) = t0 {
        sim.perf_stats.collide_ms = t.elapsed_ms();
    }

    // === EFFECTS ===
    let bodies = sim.registry.bodies();
    for hit in sim.hits.iter() {
        let burst = collision_burst(hit.contact, &bodies[hit.a], &bodies[hit.b], &sim.config, &mut sim.rng);
        push_bounded(&mut sim.effects, burst);
    }

    write_transforms(sim);
    sim.frame += 1;

    if perf_on {
        sim.perf_stats.bodies_integrated = integrated;
        sim.perf_stats.pairs_tested = stats.pairs_tested;
        sim.perf_stats.collisions_resolved = stats.impulses;
        sim.perf_stats.effects_emitted = sim.hits.len() as u32;
        if let Some(start) = step_start {
            sim.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}
