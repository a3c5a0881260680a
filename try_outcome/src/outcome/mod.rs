//! The [`Try`] container and its lifecycle.

mod access;
mod conversions;

use std::mem;

use crate::Failure;

/// The outcome of an operation: a value, a captured failure, or nothing yet.
///
/// A `Try` holds exactly one of its three states. State changes always
/// replace the whole container, so the previous value or failure is dropped
/// before the new one becomes visible. Failures ride inside the container
/// until a value accessor such as [`Try::value`] re-raises them.
///
/// `Try<()>` is the form used for operations that produce no value:
/// `Value(())` means success, and `Empty` still means "never populated".
///
/// Cloning requires the value type to be cloneable:
///
/// ```compile_fail
/// use try_outcome::Try;
///
/// struct Handle;
/// let original = Try::new(Handle);
/// let copy = original.clone();
/// ```
///
/// # Examples
///
/// ```
/// use try_outcome::{Failure, Try};
///
/// let ready = Try::new(7);
/// assert_eq!(ready.value().copied().ok(), Some(7));
///
/// let failed: Try<u32> = Try::from_failure(Failure::msg("timed out"));
/// assert_eq!(failed.value().unwrap_err().message(), "timed out");
///
/// let pending: Try<u32> = Try::default();
/// assert!(pending.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use = "a Try may hold a failure that is only observed through its accessors"]
pub enum Try<T> {
    /// Not yet populated.
    #[default]
    Empty,
    /// The operation produced a value.
    Value(T),
    /// The operation failed.
    Failure(Failure),
}

impl<T> Try<T> {
    /// Wrap a successful value.
    pub const fn new(value: T) -> Self {
        Self::Value(value)
    }

    /// Wrap a captured failure.
    pub const fn from_failure(failure: Failure) -> Self {
        Self::Failure(failure)
    }

    /// Returns `true` when a value is held.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` when a failure is held.
    #[must_use]
    pub const fn has_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` when the container was never populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the held failure without re-raising it.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Empty | Self::Value(_) => None,
        }
    }

    /// Borrow the held failure's error as an `E`, if it is one.
    #[must_use]
    pub fn failure_of<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.failure().and_then(Failure::downcast_ref::<E>)
    }

    /// Returns `true` when a failure is held and its error is an `E`.
    #[must_use]
    pub fn has_failure_of<E>(&self) -> bool
    where
        E: std::error::Error + 'static,
    {
        self.failure_of::<E>().is_some()
    }

    /// Move the contents out, leaving the container empty.
    ///
    /// ```
    /// use try_outcome::Try;
    ///
    /// let mut slot = Try::new(String::from("ready"));
    /// let moved = slot.take();
    /// assert!(slot.is_empty());
    /// assert_eq!(moved.into_value().ok().as_deref(), Some("ready"));
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Replace the whole state, returning the previous contents.
    pub const fn replace(&mut self, next: Self) -> Self {
        mem::replace(self, next)
    }

    /// Borrow the contents, keeping the state.
    pub fn as_ref(&self) -> Try<&T> {
        match self {
            Self::Empty => Try::Empty,
            Self::Value(value) => Try::Value(value),
            Self::Failure(failure) => Try::Failure(failure.clone()),
        }
    }

    /// Transform the held value, passing failures and emptiness through.
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Empty => Try::Empty,
            Self::Value(value) => Try::Value(f(value)),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Chain a dependent step onto the held value.
    pub fn and_then<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Empty => Try::Empty,
            Self::Value(value) => f(value),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }
}

impl Try<()> {
    /// A successful outcome of an operation that produces no value.
    pub const fn succeeded() -> Self {
        Self::Value(())
    }

    /// Re-express a no-value outcome as a value-bearing one holding the
    /// sentinel `U::default()`.
    ///
    /// Success maps to `Value(U::default())`, a failure is carried over
    /// unchanged, and an empty outcome stays empty.
    pub fn into_sentinel<U>(self) -> Try<U>
    where
        U: Default,
    {
        self.map(|()| U::default())
    }
}
