//! Sample error types used as captured failures in tests.

use thiserror::Error;

/// A failed pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stage {stage} failed: {reason}")]
pub struct StageError {
    /// Name of the stage.
    pub stage: String,
    /// Why the stage failed.
    pub reason: String,
}

impl StageError {
    /// Build a stage error.
    #[must_use]
    pub fn new(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            reason: reason.into(),
        }
    }
}

/// An error with no payload, for tests that only check identity and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("marker failure")]
pub struct MarkerError;
