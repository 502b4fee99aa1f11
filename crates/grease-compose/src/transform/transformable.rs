/// Trait for types that can be (geometrically) transformed in 3D space.
pub trait Transformable {
    /// Translate (as in moves) by the given offset.
    fn translate(&mut self, offset: na::Vector3<f64>);
    /// Rotate by the given rotation, around the current location.
    fn rotate(&mut self, rotation: na::UnitQuaternion<f64>);
    /// Scale by the given (component-wise) scale-factors.
    fn scale(&mut self, scale: na::Vector3<f64>);
}
