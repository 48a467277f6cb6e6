use serde::{Deserialize, Serialize};

use crate::core::SimError;

/// Rendered geometry of one floating shape, relative to the viewport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Fill color sampled from the shape's artwork (any CSS color).
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#ffffff".to_string()
}

impl ShapeDescriptor {
    pub fn new(left: f32, top: f32, width: f32, height: f32, color: impl Into<String>) -> Self {
        Self { left, top, width, height, color: color.into() }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub(crate) fn check(&self, index: usize) -> Result<(), SimError> {
        if !(self.left.is_finite() && self.top.is_finite()) {
            return Err(SimError::InvalidShape { index, reason: "position is not finite" });
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(SimError::InvalidShape { index, reason: "width must be positive" });
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(SimError::InvalidShape { index, reason: "height must be positive" });
        }
        Ok(())
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Size of the containing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(SimError::InvalidBounds { width, height })
        }
    }
}
