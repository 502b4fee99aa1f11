// Imports
use serde::{Deserialize, Serialize};

/// A single point record of a stroke, holding its world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "stroke_point")]
pub struct StrokePoint {
    /// The world-space position.
    #[serde(rename = "position", with = "crate::serialize::na_point3_f64_dp6")]
    pub position: na::Point3<f64>,
    /// Pen pressure, ranging [0.0, 1.0].
    #[serde(rename = "pressure", with = "crate::serialize::f64_dp3")]
    pub pressure: f64,
    /// Color strength, ranging [0.0, 1.0].
    #[serde(rename = "strength", with = "crate::serialize::f64_dp3")]
    pub strength: f64,
}

impl Default for StrokePoint {
    fn default() -> Self {
        Self {
            position: na::Point3::origin(),
            pressure: 1.0,
            strength: 1.0,
        }
    }
}

impl StrokePoint {
    /// A new stroke point at the given position with default pressure and strength.
    pub fn new(position: na::Point3<f64>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}
