#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![allow(clippy::single_match)]

//! the grease-compose crate provides the building blocks for generating and transforming pen-stroke geometry:
//! stroke curves, the point targets they write into, 3D transforms and colors.

// Modules
/// colors
pub mod color;
/// module for stroke curves and their point targets
pub mod curve;
/// module for extension traits for foreign types
pub mod ext;
/// utilities for serializing / deserializing
pub mod serialize;
/// module for transformation
pub mod transform;
/// other misc utilities
pub mod utils;

// Re-exports
pub use color::Color;
pub use curve::{CurveError, PointBuffer, PointTarget, StrokeCurve, StrokeCurveShared, StrokePoint};
pub use transform::Transform;
pub use utils::{circle_point, circle_points};

// Renames
extern crate nalgebra as na;
