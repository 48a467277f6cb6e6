use std::collections::VecDeque;

use crate::core::SimError;
use crate::domain::config::PhysicsConfig;
use crate::rigid_body::{DragSession, PointerSample, Vec2};
use crate::rigid_body_system::BodyRegistry;

/// Grab a body. Returns `false` if another pointer already holds it.
pub fn begin_drag(registry: &mut BodyRegistry, id: u32, pointer_id: i32, pointer: Vec2) -> Result<bool, SimError> {
    let body = registry.get_mut(id)?;
    if body.is_dragging() {
        log::trace!("body {id} already held, ignoring pointer {pointer_id}");
        return Ok(false);
    }
    body.velocity = Vec2::zero();
    body.drag = Some(DragSession { pointer_id, offset: pointer - body.pos });
    body.pointer_history.clear();
    Ok(true)
}

/// Move a held body with its pointer and record a fling sample.
pub fn drag_to(
    registry: &mut BodyRegistry,
    id: u32,
    pointer_id: i32,
    pointer: Vec2,
    now_ms: f64,
    cfg: &PhysicsConfig,
) -> Result<bool, SimError> {
    let body = registry.get_mut(id)?;
    let Some(session) = body.drag.filter(|s| s.pointer_id == pointer_id) else {
        return Ok(false);
    };

    body.pos = pointer - session.offset;
    body.pointer_history.push_back(PointerSample { pos: body.pos, time_ms: now_ms });
    while body.pointer_history.len() > cfg.pointer_history_len {
        body.pointer_history.pop_front();
    }
    Ok(true)
}

/// Release a held body (pointer-up or cancel). Returns the fling velocity, or
/// `None` when the pointer does not own the drag.
pub fn end_drag(
    registry: &mut BodyRegistry,
    id: u32,
    pointer_id: i32,
    cfg: &PhysicsConfig,
) -> Result<Option<Vec2>, SimError> {
    let body = registry.get_mut(id)?;
    if body.drag.map_or(true, |s| s.pointer_id != pointer_id) {
        return Ok(None);
    }

    let velocity = fling_velocity(&body.pointer_history, cfg);
    body.velocity = velocity;
    body.drag = None;
    body.pointer_history.clear();
    Ok(Some(velocity))
}

/// Release velocity from recent samples, in pixels per nominal frame.
///
/// Uses the oldest sample inside the look-back window and the newest one,
/// capped at `max_fling_speed`.
pub fn fling_velocity(history: &VecDeque<PointerSample>, cfg: &PhysicsConfig) -> Vec2 {
    if history.len() < 2 {
        return Vec2::zero();
    }
    let Some(newest) = history.back() else {
        return Vec2::zero();
    };
    let Some(oldest) = history
        .iter()
        .find(|s| newest.time_ms - s.time_ms <= cfg.fling_window_ms)
    else {
        return Vec2::zero();
    };

    let elapsed_ms = newest.time_ms - oldest.time_ms;
    if elapsed_ms <= 0.0 {
        return Vec2::zero();
    }
    let frames = (elapsed_ms / cfg.frame_ms) as f32;
    ((newest.pos - oldest.pos) * (1.0 / frames)).clamp_length(cfg.max_fling_speed)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::domain::shape::Bounds;
    use crate::rigid_body::Body;

    fn registry() -> BodyRegistry {
        let mut reg = BodyRegistry::new(Bounds::new(1000.0, 800.0).unwrap());
        reg.add_body(Body::new_circle(Vec2::new(200.0, 200.0), 40.0, 53.0, 53.0, "pink".into(), 0));
        reg
    }

    fn samples(points: &[(f32, f32, f64)]) -> VecDeque<PointerSample> {
        points
            .iter()
            .map(|&(x, y, t)| PointerSample { pos: Vec2::new(x, y), time_ms: t })
            .collect()
    }

    #[test]
    fn grab_zeroes_velocity_and_keeps_offset() {
        let mut reg = registry();
        reg.get_mut(1).unwrap().velocity = Vec2::new(3.0, 3.0);
        assert!(begin_drag(&mut reg, 1, 7, Vec2::new(210.0, 190.0)).unwrap());

        let cfg = PhysicsConfig::default();
        assert!(drag_to(&mut reg, 1, 7, Vec2::new(310.0, 290.0), 16.0, &cfg).unwrap());
        let body = reg.get(1).unwrap();
        assert_eq!(body.velocity, Vec2::zero());
        assert_eq!(body.pos, Vec2::new(300.0, 300.0));
        assert_eq!(body.pointer_history.len(), 1);
    }

    #[test]
    fn foreign_pointers_are_ignored() {
        let mut reg = registry();
        let cfg = PhysicsConfig::default();
        begin_drag(&mut reg, 1, 1, Vec2::new(200.0, 200.0)).unwrap();

        assert!(!begin_drag(&mut reg, 1, 2, Vec2::new(0.0, 0.0)).unwrap());
        assert!(!drag_to(&mut reg, 1, 2, Vec2::new(900.0, 900.0), 10.0, &cfg).unwrap());
        assert_eq!(end_drag(&mut reg, 1, 2, &cfg).unwrap(), None);

        let body = reg.get(1).unwrap();
        assert_eq!(body.pos, Vec2::new(200.0, 200.0));
        assert!(body.is_dragging());
    }

    #[test]
    fn history_is_bounded() {
        let mut reg = registry();
        let cfg = PhysicsConfig::default();
        begin_drag(&mut reg, 1, 1, Vec2::new(200.0, 200.0)).unwrap();
        for i in 0..12 {
            drag_to(&mut reg, 1, 1, Vec2::new(200.0 + i as f32, 200.0), i as f64 * 10.0, &cfg).unwrap();
        }
        let history = &reg.get(1).unwrap().pointer_history;
        assert_eq!(history.len(), 5);
        assert_eq!(history.front().map(|s| s.time_ms), Some(70.0));
    }

    #[test]
    fn fling_uses_oldest_sample_in_window() {
        let cfg = PhysicsConfig::default();
        // t=0 falls outside the 80ms window relative to t=100.
        let h = samples(&[(0.0, 0.0, 0.0), (100.0, 0.0, 50.0), (130.0, 0.0, 100.0)]);
        let v = fling_velocity(&h, &cfg);
        let frames = (50.0 / 16.67) as f32;
        assert_relative_eq!(v.x, 30.0 / frames, epsilon = 1e-4);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn fling_is_capped_in_the_same_direction() {
        let cfg = PhysicsConfig::default();
        // 40 px/frame raw along a diagonal.
        let step = 40.0 * (60.0 / 16.67) as f32;
        let h = samples(&[(0.0, 0.0, 0.0), (step * 0.6, step * 0.8, 60.0)]);
        let v = fling_velocity(&h, &cfg);
        assert_relative_eq!(v.length(), 25.0, epsilon = 1e-3);
        assert_relative_eq!(v.x / v.y, 0.75, epsilon = 1e-4);
    }

    #[test]
    fn fling_never_exceeds_cap() {
        let cfg = PhysicsConfig::default();
        for dx in [1.0f32, 50.0, 500.0, 50_000.0] {
            let h = samples(&[(0.0, 0.0, 0.0), (dx, -dx, 1.0)]);
            assert!(fling_velocity(&h, &cfg).length() <= 25.0 + 1e-3);
        }
    }

    #[test]
    fn too_few_samples_release_at_rest() {
        let mut reg = registry();
        let cfg = PhysicsConfig::default();
        begin_drag(&mut reg, 1, 4, Vec2::new(200.0, 200.0)).unwrap();
        drag_to(&mut reg, 1, 4, Vec2::new(260.0, 200.0), 5.0, &cfg).unwrap();
        assert_eq!(end_drag(&mut reg, 1, 4, &cfg).unwrap(), Some(Vec2::zero()));

        let body = reg.get(1).unwrap();
        assert!(!body.is_dragging());
        assert!(body.pointer_history.is_empty());
    }

    #[test]
    fn same_timestamp_samples_release_at_rest() {
        let cfg = PhysicsConfig::default();
        let h = samples(&[(0.0, 0.0, 10.0), (30.0, 0.0, 10.0)]);
        assert_eq!(fling_velocity(&h, &cfg), Vec2::zero());
    }

    #[test]
    fn unknown_body_is_an_error() {
        let mut reg = registry();
        assert_eq!(begin_drag(&mut reg, 9, 1, Vec2::zero()), Err(SimError::UnknownBody(9)));
    }
}
