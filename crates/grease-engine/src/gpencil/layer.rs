// Imports
use super::Frame;
use crate::EngineError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named layer holding frames, sorted by their frame number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "layer")]
pub struct Layer {
    #[serde(rename = "name")]
    name: String,
    /// Thickness change applied to all strokes of the layer.
    #[serde(rename = "line_change")]
    line_change: i32,
    #[serde(rename = "frames")]
    frames: Vec<Frame>,
}

impl Layer {
    pub(crate) fn new(name: String, line_change: i32) -> Self {
        Self {
            name,
            line_change,
            frames: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_change(&self) -> i32 {
        self.line_change
    }

    pub fn set_line_change(&mut self, line_change: i32) {
        self.line_change = line_change;
    }

    /// Adds an empty frame at the frame number.
    ///
    /// Only one frame can exist at a frame number.
    pub fn new_frame(&mut self, frame_number: i32) -> Result<&mut Frame, EngineError> {
        match self
            .frames
            .binary_search_by_key(&frame_number, |f| f.frame_number())
        {
            Ok(_) => Err(EngineError::FrameExists(frame_number)),
            Err(i) => {
                debug!(
                    "new frame at frame number {frame_number} in layer \"{}\"",
                    self.name
                );
                self.frames.insert(i, Frame::new(frame_number));
                Ok(&mut self.frames[i])
            }
        }
    }

    pub fn remove_frame(&mut self, frame_number: i32) -> Option<Frame> {
        let i = self
            .frames
            .binary_search_by_key(&frame_number, |f| f.frame_number())
            .ok()?;
        Some(self.frames.remove(i))
    }

    pub fn frame(&self, frame_number: i32) -> Option<&Frame> {
        self.frames
            .binary_search_by_key(&frame_number, |f| f.frame_number())
            .ok()
            .map(|i| &self.frames[i])
    }

    pub fn frame_mut(&mut self, frame_number: i32) -> Option<&mut Frame> {
        self.frames
            .binary_search_by_key(&frame_number, |f| f.frame_number())
            .ok()
            .map(|i| &mut self.frames[i])
    }

    /// The frames, sorted by frame number.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_stay_sorted() {
        let mut layer = Layer::new(String::from("Layer"), 0);
        for n in [10, 1, 5, -3] {
            layer.new_frame(n).unwrap();
        }

        let numbers = layer
            .frames()
            .iter()
            .map(|f| f.frame_number())
            .collect::<Vec<i32>>();
        assert_eq!(numbers, vec![-3, 1, 5, 10]);
        assert!(layer.frame(5).is_some());
        assert!(layer.frame(6).is_none());
    }

    #[test]
    fn occupied_frame_number() {
        let mut layer = Layer::new(String::from("Layer"), 0);
        layer.new_frame(1).unwrap();

        assert!(matches!(layer.new_frame(1), Err(EngineError::FrameExists(1))));
        assert_eq!(layer.frames().len(), 1);

        assert!(layer.remove_frame(1).is_some());
        assert!(layer.new_frame(1).is_ok());
    }
}
