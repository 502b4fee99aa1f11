// Imports
use super::{CurveError, PointTarget, StrokePoint};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A growable buffer of point records with an optional maximum length.
///
/// Appending past the maximum length is refused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "point_buffer")]
pub struct PointBuffer {
    #[serde(rename = "points")]
    points: Vec<StrokePoint>,
    #[serde(rename = "max_len")]
    max_len: Option<usize>,
}

impl PointBuffer {
    /// A new, empty and unbounded buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new, empty buffer that refuses to hold more than `max_len` records.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            points: Vec::new(),
            max_len: Some(max_len),
        }
    }

    /// The maximum length, if bounded.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// The point records.
    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    /// Iterate over the point records.
    pub fn iter(&self) -> std::slice::Iter<'_, StrokePoint> {
        self.points.iter()
    }

    fn check_room(&self, additional: usize) -> Result<(), CurveError> {
        match self.max_len {
            Some(max_len) if self.points.len().saturating_add(additional) > max_len => {
                Err(CurveError::ResourceAllocation {
                    requested: additional,
                    reason: format!(
                        "buffer holds {} of at most {max_len} points",
                        self.points.len()
                    ),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Index<usize> for PointBuffer {
    type Output = StrokePoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointBuffer {
    type Item = &'a StrokePoint;
    type IntoIter = std::slice::Iter<'a, StrokePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl PointTarget for PointBuffer {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn push_default(&mut self) -> Result<(), CurveError> {
        self.check_room(1)?;
        PointTarget::push_default(&mut self.points)
    }

    fn pop_last(&mut self) -> Option<StrokePoint> {
        self.points.pop()
    }

    fn position(&self, index: usize) -> Option<na::Point3<f64>> {
        PointTarget::position(&self.points, index)
    }

    fn set_position(&mut self, index: usize, position: na::Point3<f64>) {
        PointTarget::set_position(&mut self.points, index, position)
    }

    fn reserve(&mut self, additional: usize) -> Result<(), CurveError> {
        // Reserving only up to the bound; the appends past it fail one by one.
        let bounded = match self.max_len {
            Some(max_len) => additional.min(max_len.saturating_sub(self.points.len())),
            None => additional,
        };
        PointTarget::reserve(&mut self.points, bounded)
    }
}
