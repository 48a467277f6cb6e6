use crate::core::SimError;
use crate::domain::pages::{Page, Visibility};
use crate::effects::hover_burst;
use crate::input::{self, PointerKind};
use crate::rigid_body::Vec2;

use super::SimulationCore;

pub(super) fn pointer_down(sim: &mut SimulationCore, id: u32, pointer_id: i32, pointer: Vec2) -> Result<bool, SimError> {
    input::begin_drag(&mut sim.registry, id, pointer_id, pointer)
}

pub(super) fn pointer_move(
    sim: &mut SimulationCore,
    id: u32,
    pointer_id: i32,
    pointer: Vec2,
    now_ms: f64,
) -> Result<bool, SimError> {
    input::drag_to(&mut sim.registry, id, pointer_id, pointer, now_ms, &sim.config)
}

pub(super) fn pointer_up(sim: &mut SimulationCore, id: u32, pointer_id: i32) -> Result<Option<Vec2>, SimError> {
    let released = input::end_drag(&mut sim.registry, id, pointer_id, &sim.config)?;
    if let Some(v) = released {
        log::trace!("body {id} flung at ({:.2}, {:.2})", v.x, v.y);
    }
    Ok(released)
}

pub(super) fn pointer_enter(sim: &mut SimulationCore, id: u32, pointer_type: &str, now_ms: f64) -> Result<bool, SimError> {
    let kind = PointerKind::parse(pointer_type);
    if !input::begin_hover(&mut sim.registry, id, kind, now_ms, &sim.config, &mut sim.rng)? {
        return Ok(false);
    }
    let burst = hover_burst(sim.registry.get(id)?, &sim.config, &mut sim.rng);
    sim.push_effect(burst);
    Ok(true)
}

pub(super) fn pointer_leave(sim: &mut SimulationCore, id: u32) -> Result<(), SimError> {
    input::end_hover(&mut sim.registry, id)
}

pub(super) fn switch_page(sim: &mut SimulationCore, from: Page, to: Page, now_ms: f64) -> Result<(), SimError> {
    if sim.pages.switch(from, to, now_ms)? == Visibility::Hide {
        sim.pause();
    }
    Ok(())
}
