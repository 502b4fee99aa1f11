// Imports
use super::{CurveError, PointTarget};
use crate::ext::Vector3Ext;
use crate::transform::{Transform, Transformable};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace, warn};

/// Keeps the world-space positions of a point target in sync with a set of local-space points and a transform.
///
/// The curve owns its target exclusively and only hands it out immutably,
/// so the target length can't change behind its back.
///
/// After every operation that returns successfully, the target has exactly as many records as there are points,
/// and the record at index `i` is positioned at `rotation * (scale ⊙ points[i]) + location`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "stroke_curve")]
pub struct StrokeCurve<T> {
    #[serde(rename = "points")]
    points: Vec<na::Point3<f64>>,
    #[serde(rename = "transform")]
    transform: Transform,
    #[serde(rename = "target")]
    target: T,
}

impl<T> StrokeCurve<T>
where
    T: PointTarget,
{
    /// Wraps the target. Any records it already holds are removed.
    pub fn new(mut target: T) -> Self {
        if !target.is_empty() {
            debug!(
                "discarding {} point records of the target of a new stroke curve",
                target.len()
            );
            while target.pop_last().is_some() {}
        }

        Self {
            points: Vec::new(),
            transform: Transform::default(),
            target,
        }
    }

    /// The local-space points.
    pub fn points(&self) -> &[na::Point3<f64>] {
        &self.points
    }

    /// The target holding the world-space point records.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Consumes the curve, returning the target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The current transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The location.
    pub fn location(&self) -> na::Vector3<f64> {
        self.transform.location
    }

    /// The rotation.
    pub fn rotation(&self) -> na::UnitQuaternion<f64> {
        self.transform.rotation
    }

    /// The scale.
    pub fn scale(&self) -> na::Vector3<f64> {
        self.transform.scale
    }

    /// The world-space positions, as currently held by the target.
    pub fn world_positions(&self) -> impl Iterator<Item = na::Point3<f64>> + '_ {
        (0..self.target.len()).filter_map(|i| self.target.position(i))
    }

    /// Replaces the points, resizes the target to match and recomputes all positions.
    ///
    /// Points with non-finite coordinates are rejected before the target is touched.
    /// When the target refuses to grow, the records appended so far are removed again
    /// and the curve stays as it was.
    pub fn set_points(&mut self, points: Vec<na::Point3<f64>>) -> Result<(), CurveError> {
        if let Some(index) = points.iter().position(|p| !p.coords.is_finite()) {
            warn!("rejecting stroke curve points, point at index {index} is not finite");
            return Err(CurveError::InvalidArgument {
                index,
                reason: format!("coordinates {:?} are not finite", points[index].coords),
            });
        }

        self.resize_target(points.len())?;
        self.points = points;
        self.update();
        Ok(())
    }

    /// Sets the location and recomputes all positions.
    pub fn set_location(&mut self, location: na::Vector3<f64>) {
        self.transform.location = location;
        self.update();
    }

    /// Sets the rotation and recomputes all positions.
    pub fn set_rotation(&mut self, rotation: na::UnitQuaternion<f64>) {
        self.transform.rotation = rotation;
        self.update();
    }

    /// Sets the rotation from a rotation matrix and recomputes all positions.
    pub fn set_rotation_matrix(&mut self, rotation: na::Rotation3<f64>) {
        self.set_rotation(na::UnitQuaternion::from_rotation_matrix(&rotation));
    }

    /// Sets the scale and recomputes all positions.
    pub fn set_scale(&mut self, scale: na::Vector3<f64>) {
        self.transform.scale = scale;
        self.update();
    }

    /// Sets the entire transform and recomputes all positions once.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.update();
    }

    /// Recomputes the world-space position of every target record from the points and the transform.
    pub fn update(&mut self) {
        trace!(
            "updating {} stroke curve points, transform: {:?}",
            self.points.len(),
            self.transform
        );

        for (i, point) in self.points.iter().enumerate() {
            self.target
                .set_position(i, self.transform.transform_point(point));
        }
    }

    /// Resizes the target one record at a time, appending defaults or removing from the end.
    fn resize_target(&mut self, len: usize) -> Result<(), CurveError> {
        let prev_len = self.target.len();

        if len > prev_len {
            let grown = self
                .target
                .reserve(len - prev_len)
                .and_then(|_| {
                    while self.target.len() < len {
                        self.target.push_default()?;
                    }
                    Ok(())
                });

            if let Err(e) = grown {
                warn!(
                    "growing stroke curve target from {prev_len} to {len} points failed, rolling back. Err: {e:?}"
                );
                while self.target.len() > prev_len {
                    self.target.pop_last();
                }
                return Err(e);
            }
        } else {
            while self.target.len() > len {
                self.target.pop_last();
            }
        }

        if len != prev_len {
            debug!("resized stroke curve target from {prev_len} to {len} points");
        }
        Ok(())
    }
}

impl<T> Transformable for StrokeCurve<T>
where
    T: PointTarget,
{
    fn translate(&mut self, offset: na::Vector3<f64>) {
        self.transform.translate(offset);
        self.update();
    }

    fn rotate(&mut self, rotation: na::UnitQuaternion<f64>) {
        self.transform.rotate(rotation);
        self.update();
    }

    fn scale(&mut self, scale: na::Vector3<f64>) {
        self.transform.scale(scale);
        self.update();
    }
}

impl<'de, T> Deserialize<'de> for StrokeCurve<T>
where
    T: PointTarget + Deserialize<'de>,
{
    /// Deserializes and re-synchronizes the target with the points,
    /// so a target that was stored with a mismatching length gets resized.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "stroke_curve")]
        struct StrokeCurveData<T> {
            #[serde(rename = "points", default)]
            points: Vec<na::Point3<f64>>,
            #[serde(rename = "transform", default)]
            transform: Transform,
            #[serde(rename = "target")]
            target: T,
        }

        let data = StrokeCurveData::<T>::deserialize(deserializer)?;
        let mut curve = Self {
            points: Vec::new(),
            transform: data.transform,
            target: data.target,
        };
        curve
            .set_points(data.points)
            .map_err(serde::de::Error::custom)?;
        Ok(curve)
    }
}
