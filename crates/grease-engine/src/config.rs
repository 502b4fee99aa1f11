// Imports
use crate::DrawMode;
use anyhow::Context;
use grease_compose::Color;
use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename = "engine_config")]
pub struct EngineConfig {
    /// The name of the grease pencil data block, when a document needs a new one.
    #[serde(rename = "data_block_name")]
    pub data_block_name: String,
    /// The line thickness change applied to new layers.
    #[serde(rename = "layer_line_change")]
    pub layer_line_change: i32,
    /// The draw mode of new strokes.
    #[serde(rename = "stroke_draw_mode")]
    pub stroke_draw_mode: DrawMode,
    /// The maximum number of points a stroke can hold. Unbounded when `None`.
    #[serde(rename = "max_points_per_stroke")]
    pub max_points_per_stroke: Option<usize>,
    /// The color of new palette colors.
    #[serde(rename = "default_color")]
    pub default_color: Color,
    /// The stroke width in svg exports, before the layer line change is added.
    #[serde(rename = "svg_base_stroke_width")]
    pub svg_base_stroke_width: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_block_name: String::from("Grease Pencil"),
            layer_line_change: 2,
            stroke_draw_mode: DrawMode::default(),
            max_points_per_stroke: None,
            default_color: Color::BLACK,
            svg_base_stroke_width: 1.0,
        }
    }
}

impl EngineConfig {
    /// Loads the configuration from a json string. Missing fields are set to their defaults.
    pub fn load_from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("deserializing engine config from json failed")
    }

    /// Serializes the configuration to a pretty printed json string.
    pub fn save_as_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing engine config to json failed")
    }
}
