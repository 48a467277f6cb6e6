use crate::core::{SimError, SimRng};
use crate::domain::config::PhysicsConfig;
use crate::rigid_body::Body;
use crate::rigid_body_system::BodyRegistry;

use super::PointerKind;

/// Pointer entered a body. Returns `true` when a hover burst should fire;
/// the body also gets a random spin.
pub fn begin_hover(
    registry: &mut BodyRegistry,
    id: u32,
    kind: PointerKind,
    now_ms: f64,
    cfg: &PhysicsConfig,
    rng: &mut SimRng,
) -> Result<bool, SimError> {
    let body = registry.get_mut(id)?;
    if !kind.can_hover()
        || body.hovered
        || body.is_dragging()
        || !Body::cooled_down(body.last_hover_ms, now_ms, cfg.hover_cooldown_ms)
    {
        return Ok(false);
    }

    body.hovered = true;
    body.last_hover_ms = Some(now_ms);
    body.angular_vel = rng.signed_range(cfg.hover_spin_min, cfg.hover_spin_max);
    Ok(true)
}

/// Pointer left a body; no cooldown applies.
pub fn end_hover(registry: &mut BodyRegistry, id: u32) -> Result<(), SimError> {
    registry.get_mut(id)?.hovered = false;
    Ok(())
}
