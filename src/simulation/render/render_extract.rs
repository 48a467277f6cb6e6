use crate::core::SimError;

use super::{SimulationCore, TRANSFORM_STRIDE};

/// Write `[x, y, rotation]` for every body: the element's top-left translate
/// and its rotation in degrees.
pub(super) fn write_transforms(sim: &mut SimulationCore) {
    let needed = sim.registry.body_count() * TRANSFORM_STRIDE;
    if sim.transforms.len() != needed {
        sim.transforms.resize(needed, 0.0);
    }
    for (body, out) in sim
        .registry
        .bodies()
        .iter()
        .zip(sim.transforms.chunks_exact_mut(TRANSFORM_STRIDE))
    {
        let origin = body.element_origin();
        out[0] = origin.x;
        out[1] = origin.y;
        out[2] = body.rotation;
    }
}

pub(super) fn transform_css(sim: &SimulationCore, id: u32) -> Result<String, SimError> {
    let body = sim.registry.get(id)?;
    let origin = body.element_origin();
    Ok(format!(
        "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
        origin.x, origin.y, body.rotation
    ))
}
