//! Value accessors that re-raise held failures.

use super::Try;
use crate::Failure;

impl<T> Try<T> {
    /// Check that a value is held.
    ///
    /// # Errors
    ///
    /// Returns the held failure, or a [`FailureKind::Uninitialized`]
    /// failure when the container is empty.
    ///
    /// [`FailureKind::Uninitialized`]: crate::FailureKind::Uninitialized
    pub fn throw_if_failed(&self) -> Result<(), Failure> {
        self.value().map(|_| ())
    }

    /// Borrow the held value.
    ///
    /// # Errors
    ///
    /// Re-raises the held failure, or reports uninitialised access when the
    /// container is empty.
    pub fn value(&self) -> Result<&T, Failure> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(failure.clone()),
            Self::Empty => Err(uninitialized_access()),
        }
    }

    /// Mutably borrow the held value.
    ///
    /// The container keeps its state; only the value behind the reference
    /// changes.
    ///
    /// # Errors
    ///
    /// Same as [`Try::value`].
    pub fn value_mut(&mut self) -> Result<&mut T, Failure> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(failure.clone()),
            Self::Empty => Err(uninitialized_access()),
        }
    }

    /// Consume the container and return the held value.
    ///
    /// # Errors
    ///
    /// Same as [`Try::value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use try_outcome::{FailureKind, Try};
    ///
    /// let empty: Try<u8> = Try::default();
    /// let err = empty.into_value().unwrap_err();
    /// assert_eq!(err.kind(), FailureKind::Uninitialized);
    /// ```
    pub fn into_value(self) -> Result<T, Failure> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
            Self::Empty => Err(uninitialized_access()),
        }
    }
}

/// Failure reported by every accessor for an empty container.
fn uninitialized_access() -> Failure {
    tracing::debug!("value requested from an empty Try");
    Failure::uninitialized()
}
