// Imports
use super::{Stroke, StrokeKey};
use serde::{Deserialize, Serialize};
use slotmap::HopSlotMap;

/// The strokes of a layer at one frame number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "frame")]
pub struct Frame {
    #[serde(rename = "frame_number")]
    frame_number: i32,
    #[serde(rename = "strokes")]
    strokes: HopSlotMap<StrokeKey, Stroke>,
    /// The draw order, first gets drawn first.
    #[serde(rename = "stroke_order")]
    stroke_order: Vec<StrokeKey>,
}

impl Frame {
    pub(crate) fn new(frame_number: i32) -> Self {
        Self {
            frame_number,
            strokes: HopSlotMap::with_key(),
            stroke_order: Vec::new(),
        }
    }

    pub fn frame_number(&self) -> i32 {
        self.frame_number
    }

    /// Inserts the stroke on top of the existing ones.
    pub fn insert_stroke(&mut self, stroke: Stroke) -> StrokeKey {
        let key = self.strokes.insert(stroke);
        self.stroke_order.push(key);
        key
    }

    pub fn remove_stroke(&mut self, key: StrokeKey) -> Option<Stroke> {
        let stroke = self.strokes.remove(key)?;
        self.stroke_order.retain(|&k| k != key);
        Some(stroke)
    }

    pub fn stroke(&self, key: StrokeKey) -> Option<&Stroke> {
        self.strokes.get(key)
    }

    pub fn stroke_mut(&mut self, key: StrokeKey) -> Option<&mut Stroke> {
        self.strokes.get_mut(key)
    }

    pub fn stroke_keys(&self) -> &[StrokeKey] {
        &self.stroke_order
    }

    pub fn len(&self) -> usize {
        self.stroke_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stroke_order.is_empty()
    }

    /// The strokes in draw order.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.stroke_order
            .iter()
            .filter_map(|&key| self.strokes.get(key))
    }
}
