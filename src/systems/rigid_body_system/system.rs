use crate::core::{SimError, SimRng};
use crate::domain::config::PhysicsConfig;
use crate::domain::shape::Bounds;
use crate::rigid_body::Body;

use super::collision::{resolve_pairs, CollisionHit, ResolveStats};
use super::integrate::integrate_body;

/// Owns every body in creation order plus the viewport bounds
pub struct BodyRegistry {
    bodies: Vec<Body>,
    bounds: Bounds,
    next_id: u32,
}

impl BodyRegistry {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bodies: Vec::new(),
            bounds,
            next_id: 1,
        }
    }

    /// Register a body and return its id.
    pub fn add_body(&mut self, mut body: Body) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Ids are 1-based creation indices; bodies are never removed.
    pub fn get(&self, id: u32) -> Result<&Body, SimError> {
        id.checked_sub(1)
            .and_then(|i| self.bodies.get(i as usize))
            .ok_or(SimError::UnknownBody(id))
    }

    pub fn get_mut(&mut self, id: u32) -> Result<&mut Body, SimError> {
        id.checked_sub(1)
            .and_then(|i| self.bodies.get_mut(i as usize))
            .ok_or(SimError::UnknownBody(id))
    }

    /// Advance every non-dragged body by `dt` nominal frames.
    /// Returns the number of bodies integrated.
    pub fn integrate(&mut self, dt: f32, cfg: &PhysicsConfig, rng: &mut SimRng) -> u32 {
        let bounds = self.bounds;
        let mut moved = 0;
        for body in self.bodies.iter_mut() {
            if body.is_dragging() {
                continue;
            }
            integrate_body(body, dt, bounds, cfg, rng);
            moved += 1;
        }
        moved
    }

    /// One pass over all pairs. Hits are only reported when `now_ms` is given;
    /// the silent startup passes pass `None`.
    pub fn resolve_collisions(
        &mut self,
        cfg: &PhysicsConfig,
        now_ms: Option<f64>,
        hits: &mut Vec<CollisionHit>,
    ) -> ResolveStats {
        resolve_pairs(&mut self.bodies, cfg, now_ms, hits)
    }

    /// Repeat silent passes until nothing overlaps, at most `max_passes`.
    /// Returns the number of passes run, including the final clean one.
    pub fn settle(&mut self, cfg: &PhysicsConfig, max_passes: u32) -> u32 {
        let mut scratch = Vec::new();
        for pass in 0..max_passes {
            let stats = resolve_pairs(&mut self.bodies, cfg, None, &mut scratch);
            if stats.overlaps == 0 {
                return pass + 1;
            }
        }
        max_passes
    }
}
