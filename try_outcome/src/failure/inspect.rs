//! Inspection and re-raising of captured failures.

use std::{error::Error, iter, sync::Arc};

use super::types::{Failure, FailureKind};

impl Failure {
    /// How this failure was captured.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.inner.kind
    }

    /// Rendered message of the captured error.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner.error.to_string()
    }

    /// Concrete type name of the captured error, when known.
    ///
    /// Errors captured from a boxed error or from text report `None`.
    #[must_use]
    pub fn type_name(&self) -> Option<&'static str> {
        self.inner.type_name
    }

    /// Returns `true` when the captured error is an `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Borrow the captured error as an `E`.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        let error: &(dyn Error + Send + Sync + 'static) = &*self.inner.error;
        error.downcast_ref::<E>()
    }

    /// The failure this one was chained to with [`Failure::with_cause`].
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.inner.cause.as_ref()
    }

    /// Iterate over this failure followed by each chained cause.
    pub fn chain(&self) -> impl Iterator<Item = &Self> {
        iter::successors(Some(self), |failure| Self::cause(failure))
    }

    /// Returns `true` when both values refer to the same captured failure.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Re-raise this failure at the call site.
    ///
    /// # Errors
    ///
    /// Always returns `Err` holding this failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_outcome::Failure;
    ///
    /// fn load(stored: &Failure) -> Result<u32, Failure> {
    ///     stored.raise()
    /// }
    ///
    /// let stored = Failure::msg("not yet");
    /// let raised = load(&stored).unwrap_err();
    /// assert!(raised.is_same(&stored));
    /// ```
    pub fn raise<T>(&self) -> Result<T, Self> {
        Err(self.clone())
    }
}
