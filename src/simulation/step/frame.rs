use crate::core::SimError;
use crate::domain::pages::Visibility;
use crate::domain::shape::Bounds;

use super::{LoopState, SimulationCore};

pub(super) fn start(sim: &mut SimulationCore) -> bool {
    if sim.started || !sim.initialized {
        return false;
    }
    sim.started = true;
    sim.last_frame_ms = None;
    log::debug!("frame loop started");
    true
}

pub(super) fn pause(sim: &mut SimulationCore) {
    if sim.state == LoopState::Paused {
        return;
    }
    sim.state = LoopState::Paused;
    log::debug!("simulation paused at frame {}", sim.frame);
}

pub(super) fn resume(sim: &mut SimulationCore) {
    if sim.state == LoopState::Running {
        return;
    }
    sim.state = LoopState::Running;
    // The first resumed frame steps one nominal frame, not the paused gap.
    sim.last_frame_ms = None;
    log::debug!("simulation resumed");
}

pub(super) fn resize(sim: &mut SimulationCore, bounds: Bounds) {
    sim.registry.set_bounds(bounds);
    sim.pending_resize = None;
    log::debug!("viewport resized to {}x{}", bounds.width, bounds.height);
}

pub(super) fn request_resize(sim: &mut SimulationCore, width: f32, height: f32, now_ms: f64) -> Result<(), SimError> {
    let bounds = Bounds::new(width, height)?;
    sim.pending_resize = Some((bounds, now_ms));
    Ok(())
}

pub(super) fn frame(sim: &mut SimulationCore, now_ms: f64) -> bool {
    if !sim.started {
        return false;
    }

    if let Some((bounds, requested_ms)) = sim.pending_resize {
        if now_ms - requested_ms >= sim.config.resize_debounce_ms {
            resize(sim, bounds);
        }
    }

    if sim.pages.tick(now_ms) == Visibility::Show {
        resume(sim);
    }

    if sim.state == LoopState::Paused {
        return true;
    }

    let dt = match sim.last_frame_ms {
        Some(last) => (((now_ms - last) / sim.config.frame_ms) as f32).clamp(0.0, sim.config.max_dt),
        None => 1.0,
    };
    sim.last_frame_ms = Some(now_ms);

    sim.step(dt, now_ms);
    true
}
