// Modules
mod pointbuffer;
mod pointtarget;
mod strokecurve;
mod strokecurveshared;
mod strokepoint;

// Re-exports
pub use pointbuffer::PointBuffer;
pub use pointtarget::PointTarget;
pub use strokecurve::StrokeCurve;
pub use strokecurveshared::StrokeCurveShared;
pub use strokepoint::StrokePoint;

// Imports
use thiserror::Error;

/// Errors of stroke curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A supplied point was rejected before the target was touched.
    #[error("invalid point at index {index}: {reason}")]
    InvalidArgument {
        /// The index of the offending point.
        index: usize,
        /// Why it was rejected.
        reason: String,
    },
    /// The target refused to grow.
    #[error("point target could not allocate {requested} more point(s): {reason}")]
    ResourceAllocation {
        /// The number of points that were requested in addition.
        requested: usize,
        /// Why the target refused.
        reason: String,
    },
}
