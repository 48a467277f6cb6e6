use std::collections::VecDeque;

use super::vec2::Vec2;

/// Drag session owned by exactly one pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    /// Pointer position minus body center at grab time.
    pub offset: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub time_ms: f64,
}

/// Circle body standing in for one floating shape
pub struct Body {
    // === Physics State ===
    /// Center, viewport-local pixels
    pub pos: Vec2,
    /// Pixels per nominal frame
    pub velocity: Vec2,
    /// Degrees
    pub rotation: f32,
    /// Degrees per frame
    pub angular_vel: f32,
    /// Stable id (1-based creation index)
    pub id: u32,

    // === Shape, fixed at creation ===
    radius: f32,
    mass: f32,
    /// Half of the rendered box, used to place the element's top-left corner
    pub half_width: f32,
    pub half_height: f32,
    pub color: String,

    // === Interaction ===
    pub drag: Option<DragSession>,
    pub pointer_history: VecDeque<PointerSample>,
    pub hovered: bool,
    pub last_hover_ms: Option<f64>,
    pub last_collision_ms: Option<f64>,
}

impl Body {
    /// Create a body; mass is radius squared.
    pub fn new_circle(center: Vec2, radius: f32, half_width: f32, half_height: f32, color: String, id: u32) -> Self {
        Self {
            pos: center,
            velocity: Vec2::zero(),
            rotation: 0.0,
            angular_vel: 0.0,
            id,
            radius,
            mass: radius * radius,
            half_width,
            half_height,
            color,
            drag: None,
            pointer_history: VecDeque::new(),
            hovered: false,
            last_hover_ms: None,
            last_collision_ms: None,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Top-left translate of the rendered element
    pub fn element_origin(&self) -> Vec2 {
        Vec2::new(self.pos.x - self.half_width, self.pos.y - self.half_height)
    }

    /// True once `cooldown_ms` has passed since `last`, or if it never fired.
    #[inline]
    pub(crate) fn cooled_down(last: Option<f64>, now_ms: f64, cooldown_ms: f64) -> bool {
        last.map_or(true, |t| now_ms - t >= cooldown_ms)
    }
}
