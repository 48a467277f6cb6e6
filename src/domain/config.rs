use serde::{Deserialize, Serialize};

use crate::core::SimError;

const MAX_POINTER_HISTORY: usize = 64;
const MAX_BURST_PARTICLES: u32 = 256;
const MAX_SETTLE_PASSES: u32 = 1000;

/// Every tunable of the floating-shape simulation.
///
/// Velocities are in pixels per nominal frame, angles in degrees, times in
/// milliseconds. Missing JSON fields fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Collision radius = half the rendered width times this.
    pub radius_shrink: f32,
    /// Initial velocity per axis is uniform in `[-initial_speed, initial_speed)`.
    pub initial_speed: f32,
    /// Linear velocity multiplier per unit dt.
    pub friction: f32,
    /// Angular velocity multiplier per frame (not scaled by dt).
    pub angular_damping: f32,
    pub idle_speed: f32,
    pub ambient_drift: f32,
    /// Bounce factor shared by walls and body pairs.
    pub restitution: f32,
    pub max_dt: f32,
    pub frame_ms: f64,

    pub fling_window_ms: f64,
    pub pointer_history_len: usize,
    pub max_fling_speed: f32,

    pub hover_cooldown_ms: f64,
    pub hover_spin_min: f32,
    pub hover_spin_max: f32,
    pub hover_particles_min: u32,
    pub hover_particles_max: u32,

    pub collision_speed_threshold: f32,
    pub collision_cooldown_ms: f64,
    pub collision_particles_min: u32,
    pub collision_particles_max: u32,

    /// Upper bound on silent overlap-resolution passes at startup.
    pub settle_passes: u32,
    pub resize_debounce_ms: f64,
    /// Delay between deactivating one page and activating the next.
    pub page_switch_delay_ms: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            radius_shrink: 0.75,
            initial_speed: 1.0,
            friction: 0.985,
            angular_damping: 0.95,
            idle_speed: 0.3,
            ambient_drift: 0.025,
            restitution: 0.6,
            max_dt: 2.0,
            frame_ms: 16.67,

            fling_window_ms: 80.0,
            pointer_history_len: 5,
            max_fling_speed: 25.0,

            hover_cooldown_ms: 2500.0,
            hover_spin_min: 8.0,
            hover_spin_max: 15.0,
            hover_particles_min: 10,
            hover_particles_max: 14,

            collision_speed_threshold: 2.0,
            collision_cooldown_ms: 800.0,
            collision_particles_min: 6,
            collision_particles_max: 10,

            settle_passes: 20,
            resize_debounce_ms: 250.0,
            page_switch_delay_ms: 100.0,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let unit = |name: &str, v: f32| -> Result<(), SimError> {
            if v.is_finite() && (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(SimError::Config(format!("{name} must be in [0, 1], got {v}")))
            }
        };
        unit("radiusShrink", self.radius_shrink)?;
        unit("friction", self.friction)?;
        unit("angularDamping", self.angular_damping)?;
        unit("restitution", self.restitution)?;

        let non_negative = |name: &str, v: f64| -> Result<(), SimError> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(SimError::Config(format!("{name} must be finite and >= 0, got {v}")))
            }
        };
        non_negative("initialSpeed", self.initial_speed.into())?;
        non_negative("idleSpeed", self.idle_speed.into())?;
        non_negative("ambientDrift", self.ambient_drift.into())?;
        non_negative("maxFlingSpeed", self.max_fling_speed.into())?;
        non_negative("flingWindowMs", self.fling_window_ms)?;
        non_negative("hoverCooldownMs", self.hover_cooldown_ms)?;
        non_negative("hoverSpinMin", self.hover_spin_min.into())?;
        non_negative("hoverSpinMax", self.hover_spin_max.into())?;
        non_negative("collisionSpeedThreshold", self.collision_speed_threshold.into())?;
        non_negative("collisionCooldownMs", self.collision_cooldown_ms)?;
        non_negative("resizeDebounceMs", self.resize_debounce_ms)?;
        non_negative("pageSwitchDelayMs", self.page_switch_delay_ms)?;

        if !(self.frame_ms.is_finite() && self.frame_ms > 0.0) {
            return Err(SimError::Config("frameMs must be positive".into()));
        }
        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            return Err(SimError::Config("maxDt must be positive".into()));
        }
        if !(2..=MAX_POINTER_HISTORY).contains(&self.pointer_history_len) {
            return Err(SimError::Config(format!(
                "pointerHistoryLen must be in [2, {MAX_POINTER_HISTORY}]"
            )));
        }
        if self.hover_particles_max > MAX_BURST_PARTICLES
            || self.collision_particles_max > MAX_BURST_PARTICLES
        {
            return Err(SimError::Config(format!(
                "particle counts must not exceed {MAX_BURST_PARTICLES}"
            )));
        }
        if self.settle_passes > MAX_SETTLE_PASSES {
            return Err(SimError::Config(format!(
                "settlePasses must not exceed {MAX_SETTLE_PASSES}"
            )));
        }
        if self.hover_spin_min > self.hover_spin_max
            || self.hover_particles_min > self.hover_particles_max
            || self.collision_particles_min > self.collision_particles_max
        {
            return Err(SimError::Config("min/max pairs are inverted".into()));
        }
        Ok(())
    }
}
