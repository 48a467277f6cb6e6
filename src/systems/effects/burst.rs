use serde::Serialize;

use crate::core::SimRng;
use crate::domain::config::PhysicsConfig;
use crate::rigid_body::{Body, Vec2};

// Hover sparkles drift sideways and fall.
const HOVER_DRIFT_X: f32 = 30.0;
const HOVER_FALL_MIN: f32 = 40.0;
const HOVER_FALL_MAX: f32 = 90.0;
const HOVER_SIZE: (f32, f32) = (4.0, 9.0);
const HOVER_DURATION_MS: (f32, f32) = (900.0, 1500.0);
const HOVER_DELAY_MS: f32 = 200.0;

// Collision sparks fly out radially from the contact.
const SPARK_JITTER_DEG: f32 = 15.0;
const SPARK_DISTANCE: (f32, f32) = (20.0, 50.0);
const SPARK_SIZE: (f32, f32) = (3.0, 7.0);
const SPARK_DURATION_MS: (f32, f32) = (400.0, 700.0);
const SPARK_START_JITTER: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Hover,
    Collision,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Trajectory {
    /// Translate by (dx, dy) over the particle's life
    Fall { dx: f32, dy: f32 },
    /// Fly `distance` px along `angle_deg`
    #[serde(rename_all = "camelCase")]
    Radial { angle_deg: f32, distance: f32 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleSpec {
    /// Start position relative to the burst origin
    pub offset: Vec2,
    pub trajectory: Trajectory,
    pub size: f32,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub color: String,
}

/// One spawn request; each particle removes itself when its animation ends.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EffectBurst {
    pub kind: EffectKind,
    pub origin: Vec2,
    pub particles: Vec<ParticleSpec>,
}

pub fn hover_burst(body: &Body, cfg: &PhysicsConfig, rng: &mut SimRng) -> EffectBurst {
    let count = rng.count(cfg.hover_particles_min, cfg.hover_particles_max);
    let r = body.radius();
    let particles = (0..count)
        .map(|_| ParticleSpec {
            offset: Vec2::new(rng.symmetric(r), rng.symmetric(r)),
            trajectory: Trajectory::Fall {
                dx: rng.symmetric(HOVER_DRIFT_X),
                dy: rng.range(HOVER_FALL_MIN, HOVER_FALL_MAX),
            },
            size: rng.range(HOVER_SIZE.0, HOVER_SIZE.1),
            duration_ms: rng.range(HOVER_DURATION_MS.0, HOVER_DURATION_MS.1),
            delay_ms: rng.range(0.0, HOVER_DELAY_MS),
            color: body.color.clone(),
        })
        .collect();

    EffectBurst { kind: EffectKind::Hover, origin: body.pos, particles }
}

/// Sparks alternate between the two bodies' colors.
pub fn collision_burst(contact: Vec2, a: &Body, b: &Body, cfg: &PhysicsConfig, rng: &mut SimRng) -> EffectBurst {
    let count = rng.count(cfg.collision_particles_min, cfg.collision_particles_max);
    let step = 360.0 / count.max(1) as f32;
    let particles = (0..count)
        .map(|i| ParticleSpec {
            offset: Vec2::new(rng.symmetric(SPARK_START_JITTER), rng.symmetric(SPARK_START_JITTER)),
            trajectory: Trajectory::Radial {
                angle_deg: i as f32 * step + rng.symmetric(SPARK_JITTER_DEG),
                distance: rng.range(SPARK_DISTANCE.0, SPARK_DISTANCE.1),
            },
            size: rng.range(SPARK_SIZE.0, SPARK_SIZE.1),
            duration_ms: rng.range(SPARK_DURATION_MS.0, SPARK_DURATION_MS.1),
            delay_ms: 0.0,
            color: if i % 2 == 0 { a.color.clone() } else { b.color.clone() },
        })
        .collect();

    EffectBurst { kind: EffectKind::Collision, origin: contact, particles }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(color: &str) -> Body {
        Body::new_circle(Vec2::new(100.0, 100.0), 30.0, 40.0, 40.0, color.into(), 1)
    }

    #[test]
    fn hover_burst_counts_and_colors() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(5);
        let b = body("#abc");
        for _ in 0..50 {
            let burst = hover_burst(&b, &cfg, &mut rng);
            assert!((10..=14).contains(&burst.particles.len()));
            assert!(burst.particles.iter().all(|p| p.color == "#abc"));
            assert!(burst
                .particles
                .iter()
                .all(|p| p.offset.x.abs() <= 30.0 && p.offset.y.abs() <= 30.0));
        }
    }

    #[test]
    fn collision_burst_alternates_colors() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(6);
        let burst = collision_burst(Vec2::new(5.0, 5.0), &body("red"), &body("blue"), &cfg, &mut rng);
        assert!((6..=10).contains(&burst.particles.len()));
        assert_eq!(burst.kind, EffectKind::Collision);
        assert_eq!(burst.particles[0].color, "red");
        assert_eq!(burst.particles[1].color, "blue");
        assert!(matches!(burst.particles[0].trajectory, Trajectory::Radial { .. }));
    }

    #[test]
    fn bursts_serialize_for_the_renderer() {
        let cfg = PhysicsConfig::default();
        let mut rng = SimRng::seeded(8);
        let burst = hover_burst(&body("green"), &cfg, &mut rng);
        let json = serde_json::to_value(&burst).unwrap();
        assert_eq!(json["kind"], "hover");
        assert_eq!(json["particles"][0]["trajectory"]["type"], "fall");
        assert!(json["particles"][0]["durationMs"].is_number());
    }
}
