//! Core failure type and the concrete errors it may carry.

use std::{error::Error, fmt, sync::Arc};

use thiserror::Error;

/// Boxed error accepted when capturing an arbitrary failure.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Classifies how a [`Failure`] was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum FailureKind {
    /// An error value returned by an operation.
    Error,
    /// A panic raised while running an operation.
    Panic,
    /// A value was requested from an empty [`Try`](crate::Try).
    Uninitialized,
}

/// Raised when a value is read from a [`Try`](crate::Try) that was never
/// populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("using uninitialized Try")]
pub struct UsingUninitializedTry;

/// Panic payload captured by
/// [`make_try_with_catching`](crate::make_try_with_catching).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation panicked: {message}")]
pub struct PanicFailure {
    /// Text extracted from the panic payload.
    pub message: String,
}

/// A captured failure that can be stored, cloned and re-raised later.
///
/// Clones share the captured error, so a clone is the *same* failure as its
/// source (see [`Failure::is_same`]). Re-raising returns the failure as the
/// `Err` side of a [`Result`].
///
/// # Examples
///
/// ```
/// use try_outcome::{Failure, FailureKind};
///
/// let failure = Failure::new(std::io::Error::other("disk on fire"));
/// assert_eq!(failure.kind(), FailureKind::Error);
/// assert!(failure.is::<std::io::Error>());
/// assert_eq!(failure.message(), "disk on fire");
/// ```
#[derive(Clone)]
pub struct Failure {
    pub(super) inner: Arc<Captured>,
}

pub(super) struct Captured {
    pub(super) kind: FailureKind,
    pub(super) error: Arc<dyn Error + Send + Sync + 'static>,
    pub(super) type_name: Option<&'static str>,
    pub(super) cause: Option<Failure>,
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.inner.kind)
            .field("type_name", &self.inner.type_name)
            .field("error", &self.inner.error)
            .field("cause", &self.inner.cause)
            .finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.error, f)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.inner.cause.as_ref() {
            Some(cause) => Some(cause),
            None => self.inner.error.source(),
        }
    }
}
