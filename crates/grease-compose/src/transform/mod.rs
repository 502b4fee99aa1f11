// Modules
mod transformable;

// Re-exports
pub use transformable::Transformable;

// Imports
use serde::{Deserialize, Serialize};

/// A location / rotation / scale transform.
///
/// Applied to a point in the fixed order: scale, then rotate, then translate.
/// For non-uniform scales or rotations the order matters, so it is never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "transform")]
pub struct Transform {
    /// The translation, applied last.
    #[serde(rename = "location")]
    pub location: na::Vector3<f64>,
    /// The rotation, applied after scaling.
    #[serde(rename = "rotation", with = "crate::serialize::na_unit_quaternion_f64_normalized")]
    pub rotation: na::UnitQuaternion<f64>,
    /// The component-wise scale, applied first.
    #[serde(rename = "scale")]
    pub scale: na::Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: na::Vector3::zeros(),
            rotation: na::UnitQuaternion::identity(),
            scale: na::Vector3::repeat(1.0),
        }
    }
}

impl Transformable for Transform {
    fn translate(&mut self, offset: na::Vector3<f64>) {
        self.location += offset;
    }

    fn rotate(&mut self, rotation: na::UnitQuaternion<f64>) {
        self.rotation = rotation * self.rotation;
    }

    fn scale(&mut self, scale: na::Vector3<f64>) {
        self.scale.component_mul_assign(&scale);
    }
}

impl Transform {
    /// A new transform.
    pub fn new(
        location: na::Vector3<f64>,
        rotation: na::UnitQuaternion<f64>,
        scale: na::Vector3<f64>,
    ) -> Self {
        Self {
            location,
            rotation,
            scale,
        }
    }

    /// Builder-style location setter.
    pub fn with_location(mut self, location: na::Vector3<f64>) -> Self {
        self.location = location;
        self
    }

    /// Builder-style rotation setter.
    pub fn with_rotation(mut self, rotation: na::UnitQuaternion<f64>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style scale setter.
    pub fn with_scale(mut self, scale: na::Vector3<f64>) -> Self {
        self.scale = scale;
        self
    }

    /// Transform a local-space point into world space.
    pub fn transform_point(&self, point: &na::Point3<f64>) -> na::Point3<f64> {
        let scaled = na::Point3::from(point.coords.component_mul(&self.scale));
        self.rotation * scaled + self.location
    }

    /// The equivalent homogeneous 4x4 matrix (translation * rotation * scale).
    pub fn to_homogeneous(&self) -> na::Matrix4<f64> {
        na::Translation3::from(self.location).to_homogeneous()
            * self.rotation.to_homogeneous()
            * na::Matrix4::new_nonuniform_scaling(&self.scale)
    }
}
