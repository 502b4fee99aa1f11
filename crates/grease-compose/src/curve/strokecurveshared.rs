// Imports
use super::StrokeCurve;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A stroke curve that can be shared between threads.
///
/// All access goes through one exclusive guard per curve, so the points, target and transform
/// are always mutated together.
#[derive(Debug)]
pub struct StrokeCurveShared<T>(Arc<Mutex<StrokeCurve<T>>>);

impl<T> From<StrokeCurve<T>> for StrokeCurveShared<T> {
    fn from(value: StrokeCurve<T>) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl<T> Clone for StrokeCurveShared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> StrokeCurveShared<T> {
    /// Exclusive access to the curve.
    ///
    /// A curve whose previous holder panicked is still handed out, since every curve operation
    /// leaves it consistent before it can panic.
    pub fn lock(&self) -> MutexGuard<'_, StrokeCurve<T>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the closure with exclusive access to the curve.
    pub fn with<R>(&self, f: impl FnOnce(&mut StrokeCurve<T>) -> R) -> R {
        f(&mut self.lock())
    }
}
