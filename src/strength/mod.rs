//! Password strength estimation
//!
//! The CLI depends only on the score/crack-time/feedback contract below;
//! the concrete backend wraps the zxcvbn estimator.

mod estimator;

pub use estimator::ZxcvbnEstimator;

use crate::error::Result;
use crate::types::StrengthReport;

/// Core trait for strength estimator backends
pub trait StrengthEstimator: Send + Sync {
    /// Estimate the strength of a password.
    ///
    /// `user_inputs` are extra strings (names, keywords) treated as
    /// easily guessed context by the backend.
    fn estimate(&self, password: &str, user_inputs: &[&str]) -> Result<StrengthReport>;

    /// Get backend name
    fn name(&self) -> &'static str;
}

/// Create the default estimator backend
pub fn create_estimator() -> Box<dyn StrengthEstimator> {
    Box::new(ZxcvbnEstimator::new())
}
