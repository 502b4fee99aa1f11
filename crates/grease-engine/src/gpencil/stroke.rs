// Imports
use grease_compose::{PointBuffer, StrokeCurve};
use serde::{Deserialize, Serialize};

/// How the points of a stroke are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename = "draw_mode")]
pub enum DrawMode {
    /// Points are in screen space.
    #[serde(rename = "screen")]
    Screen,
    /// Points are in 3D space.
    #[default]
    #[serde(rename = "3dspace")]
    Space3d,
    /// Points are in 2D space, on the view plane.
    #[serde(rename = "2dspace")]
    Space2d,
    /// Points are in 2D space, on the image plane.
    #[serde(rename = "2dimage")]
    Space2dImage,
}

/// A single drawn curve, referencing a palette color by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "stroke")]
pub struct Stroke {
    #[serde(rename = "color_name")]
    color_name: String,
    #[serde(rename = "draw_mode", default)]
    draw_mode: DrawMode,
    #[serde(rename = "curve")]
    curve: StrokeCurve<PointBuffer>,
}

impl Stroke {
    /// A new, empty stroke. Its point buffer holds at most `max_points` records, when given.
    pub fn new(color_name: String, draw_mode: DrawMode, max_points: Option<usize>) -> Self {
        let buffer = match max_points {
            Some(max_points) => PointBuffer::with_max_len(max_points),
            None => PointBuffer::new(),
        };

        Self {
            color_name,
            draw_mode,
            curve: StrokeCurve::new(buffer),
        }
    }

    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, draw_mode: DrawMode) {
        self.draw_mode = draw_mode;
    }

    pub fn curve(&self) -> &StrokeCurve<PointBuffer> {
        &self.curve
    }

    pub fn curve_mut(&mut self) -> &mut StrokeCurve<PointBuffer> {
        &mut self.curve
    }
}
