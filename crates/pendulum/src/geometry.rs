use serde::{Deserialize, Serialize};

/// A position in the plane of the leg, relative to the hip.
///
/// Uses a y-up frame, so a hanging leg has negative `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Joint positions captured at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Joint between femur and tibia.
    pub knee: Point,

    /// Free end of the tibia.
    pub ankle: Point,
}
