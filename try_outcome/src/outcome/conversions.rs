//! Conversions between [`Try`], [`Result`] and [`Failure`].

use super::Try;
use crate::{BoxError, Failure};

impl<T> From<Failure> for Try<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

/// Capture the `Err` side of a [`Result`] as a [`Failure`].
impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<BoxError> + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Failure(Failure::capture(error)),
        }
    }
}

/// Unwrap a [`Try`] into a [`Result`], re-raising any failure.
impl<T> From<Try<T>> for Result<T, Failure> {
    fn from(outcome: Try<T>) -> Self {
        outcome.into_value()
    }
}
