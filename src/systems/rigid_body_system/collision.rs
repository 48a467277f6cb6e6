use crate::domain::config::PhysicsConfig;
use crate::rigid_body::{Body, Vec2};

/// Overlap (px) below which a pair counts as touching rather than
/// overlapping when deciding whether settling is done.
const SETTLE_SLOP: f32 = 0.01;

/// A collision fast enough to deserve a particle burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionHit {
    /// Indices into the registry, `a < b`
    pub a: usize,
    pub b: usize,
    /// Point on `a`'s boundary along the contact normal
    pub contact: Vec2,
    pub closing_speed: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolveStats {
    pub pairs_tested: u32,
    pub overlaps: u32,
    pub impulses: u32,
}

/// Borrow two distinct bodies mutably, `i < j`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

pub(super) fn resolve_pairs(
    bodies: &mut [Body],
    cfg: &PhysicsConfig,
    now_ms: Option<f64>,
    hits: &mut Vec<CollisionHit>,
) -> ResolveStats {
    let mut stats = ResolveStats::default();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            if a.is_dragging() || b.is_dragging() {
                continue;
            }
            stats.pairs_tested += 1;

            let delta = b.pos - a.pos;
            let dist = delta.length();
            let min_dist = a.radius() + b.radius();
            // Coincident centers have no normal; drift separates them later.
            if dist >= min_dist || dist <= 0.0 {
                continue;
            }

            let normal = delta * (1.0 / dist);
            let overlap = min_dist - dist;
            if overlap > SETTLE_SLOP {
                stats.overlaps += 1;
            }

            // Heavier body moves less.
            let total_mass = a.mass() + b.mass();
            a.pos -= normal * (overlap * b.mass() / total_mass);
            b.pos += normal * (overlap * a.mass() / total_mass);

            let approach = (b.velocity - a.velocity).dot(normal);
            if approach >= 0.0 {
                continue;
            }

            let impulse = -(1.0 + cfg.restitution) * approach / (1.0 / a.mass() + 1.0 / b.mass());
            a.velocity -= normal * (impulse / a.mass());
            b.velocity += normal * (impulse / b.mass());
            stats.impulses += 1;

            let Some(now) = now_ms else {
                continue;
            };
            let closing_speed = -approach;
            if closing_speed > cfg.collision_speed_threshold
                && Body::cooled_down(a.last_collision_ms, now, cfg.collision_cooldown_ms)
                && Body::cooled_down(b.last_collision_ms, now, cfg.collision_cooldown_ms)
            {
                a.last_collision_ms = Some(now);
                b.last_collision_ms = Some(now);
                hits.push(CollisionHit {
                    a: i,
                    b: j,
                    contact: a.pos + normal * a.radius(),
                    closing_speed,
                });
            }
        }
    }

    stats
}
