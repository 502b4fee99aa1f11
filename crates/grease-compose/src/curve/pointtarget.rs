// Imports
use super::{CurveError, StrokePoint};

/// An ordered, resizable sequence of point records that a [StrokeCurve](super::StrokeCurve) writes into.
///
/// Only appending and removing the last record are needed to resize it.
pub trait PointTarget {
    /// The number of point records.
    fn len(&self) -> usize;
    /// Append a default point record. Fails when the target can't hold another record.
    fn push_default(&mut self) -> Result<(), CurveError>;
    /// Remove the last point record, returning it.
    fn pop_last(&mut self) -> Option<StrokePoint>;
    /// The position of the record at the index.
    fn position(&self, index: usize) -> Option<na::Point3<f64>>;
    /// Set the position of the record at the index. Out of bounds indices are ignored.
    fn set_position(&mut self, index: usize, position: na::Point3<f64>);

    /// Whether there are no point records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserve capacity for at least `additional` more records ahead of appending them.
    fn reserve(&mut self, _additional: usize) -> Result<(), CurveError> {
        Ok(())
    }
}

impl PointTarget for Vec<StrokePoint> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_default(&mut self) -> Result<(), CurveError> {
        PointTarget::reserve(self, 1)?;
        self.push(StrokePoint::default());
        Ok(())
    }

    fn pop_last(&mut self) -> Option<StrokePoint> {
        self.pop()
    }

    fn position(&self, index: usize) -> Option<na::Point3<f64>> {
        self.get(index).map(|p| p.position)
    }

    fn set_position(&mut self, index: usize, position: na::Point3<f64>) {
        if let Some(point) = self.get_mut(index) {
            point.position = position;
        }
    }

    fn reserve(&mut self, additional: usize) -> Result<(), CurveError> {
        self.try_reserve(additional)
            .map_err(|e| CurveError::ResourceAllocation {
                requested: additional,
                reason: e.to_string(),
            })
    }
}
