use crate::core::SimRng;
use crate::domain::config::PhysicsConfig;
use crate::domain::shape::Bounds;
use crate::rigid_body::{Body, Vec2};

/// One integration step for a free body: friction, spin, ambient drift,
/// motion, then wall reflection.
pub(super) fn integrate_body(body: &mut Body, dt: f32, bounds: Bounds, cfg: &PhysicsConfig, rng: &mut SimRng) {
    body.velocity *= cfg.friction.powf(dt);

    body.rotation += body.angular_vel * dt;
    body.angular_vel *= cfg.angular_damping;

    // Keep slow bodies wandering so the scene never freezes.
    if body.velocity.length() < cfg.idle_speed {
        body.velocity += Vec2::new(rng.symmetric(cfg.ambient_drift), rng.symmetric(cfg.ambient_drift));
    }

    body.pos += body.velocity * dt;

    reflect_walls(body, bounds, cfg.restitution);
}

/// Clamp to the viewport and bounce the offending velocity component inward.
pub(super) fn reflect_walls(body: &mut Body, bounds: Bounds, restitution: f32) {
    let r = body.radius();

    if body.pos.x - r < 0.0 {
        body.pos.x = r;
        body.velocity.x = body.velocity.x.abs() * restitution;
    } else if body.pos.x + r > bounds.width {
        body.pos.x = bounds.width - r;
        body.velocity.x = -body.velocity.x.abs() * restitution;
    }

    if body.pos.y - r < 0.0 {
        body.pos.y = r;
        body.velocity.y = body.velocity.y.abs() * restitution;
    } else if body.pos.y + r > bounds.height {
        body.pos.y = bounds.height - r;
        body.velocity.y = -body.velocity.y.abs() * restitution;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn body(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        let mut b = Body::new_circle(Vec2::new(x, y), 50.0, 66.0, 66.0, "teal".into(), 1);
        b.velocity = Vec2::new(vx, vy);
        b
    }

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn left_wall_clamps_and_bounces() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(1);
        let mut b = body(45.0, 300.0, -1.0, 0.0);
        integrate_body(&mut b, 1.0, bounds(), &cfg, &mut rng);
        assert_eq!(b.pos.x, 50.0);
        assert_relative_eq!(b.velocity.x, 0.985 * 0.6, epsilon = 1e-6);
    }

    #[test]
    fn body_at_rest_past_left_wall_ends_on_the_wall_moving_inward() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(9);
        let mut b = body(45.0, 300.0, 0.0, 0.0);
        integrate_body(&mut b, 1.0, bounds(), &cfg, &mut rng);
        assert_eq!(b.pos.x, 50.0);
        assert!(b.velocity.x >= 0.0);
        assert!(b.velocity.x <= cfg.ambient_drift * cfg.restitution + 1e-6);
    }

    #[test]
    fn right_and_bottom_walls_reflect_inward() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(2);
        let mut b = body(760.0, 560.0, 5.0, 4.0);
        integrate_body(&mut b, 1.0, bounds(), &cfg, &mut rng);
        assert_eq!(b.pos.x, 750.0);
        assert_eq!(b.pos.y, 550.0);
        assert_relative_eq!(b.velocity.x, -5.0 * 0.985 * 0.6, epsilon = 1e-5);
        assert_relative_eq!(b.velocity.y, -4.0 * 0.985 * 0.6, epsilon = 1e-5);
    }

    #[test]
    fn friction_scales_with_dt_but_spin_damping_does_not() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(3);
        let mut b = body(400.0, 300.0, 10.0, 0.0);
        b.angular_vel = 10.0;
        integrate_body(&mut b, 2.0, bounds(), &cfg, &mut rng);
        let v = 10.0 * 0.985f32.powf(2.0);
        assert_relative_eq!(b.velocity.x, v, epsilon = 1e-5);
        assert_relative_eq!(b.pos.x, 400.0 + v * 2.0, epsilon = 1e-4);
        assert_relative_eq!(b.rotation, 20.0, epsilon = 1e-5);
        assert_relative_eq!(b.angular_vel, 9.5, epsilon = 1e-5);
    }

    #[test]
    fn idle_bodies_pick_up_small_drift() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(4);
        let mut b = body(400.0, 300.0, 0.0, 0.0);
        integrate_body(&mut b, 1.0, bounds(), &cfg, &mut rng);
        assert!(b.velocity.x.abs() <= 0.025 && b.velocity.y.abs() <= 0.025);
        assert!(b.velocity.length() > 0.0);
    }
}
