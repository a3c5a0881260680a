//! Running operations and capturing their outcome into a [`Try`].

use std::panic::{self, AssertUnwindSafe};

use crate::{BoxError, Failure, Try};

/// Run `operation` once and capture its outcome.
///
/// `Ok(value)` becomes [`Try::Value`]; `Err(error)` is captured as a
/// [`Failure`] that keeps the concrete error for later inspection. Operations
/// that produce nothing return `Result<(), E>` and yield a `Try<()>`.
///
/// # Examples
///
/// ```
/// use try_outcome::make_try_with;
///
/// let parsed = make_try_with(|| "42".parse::<u16>());
/// assert_eq!(parsed.value().copied().ok(), Some(42));
///
/// let rejected = make_try_with(|| "forty-two".parse::<u16>());
/// assert!(rejected.has_failure_of::<std::num::ParseIntError>());
///
/// let flushed = make_try_with(|| -> Result<(), std::io::Error> { Ok(()) });
/// assert!(flushed.throw_if_failed().is_ok());
/// ```
pub fn make_try_with<R, E, F>(operation: F) -> Try<R>
where
    F: FnOnce() -> Result<R, E>,
    E: Into<BoxError> + 'static,
{
    Try::from(operation())
}

/// Run `operation` once, capturing returned errors and panics alike.
///
/// A panic becomes a [`Failure`] of kind
/// [`FailureKind::Panic`](crate::FailureKind::Panic) whose message is the
/// panic text. The operation is treated as unwind safe: state it mutates may
/// be left half-updated when it panics.
///
/// # Examples
///
/// ```
/// use try_outcome::{make_try_with_catching, FailureKind};
///
/// let outcome = make_try_with_catching(|| -> Result<u8, std::io::Error> {
///     panic!("worker lost")
/// });
/// let failure = outcome.value().unwrap_err();
/// assert_eq!(failure.kind(), FailureKind::Panic);
/// assert_eq!(failure.message(), "operation panicked: worker lost");
/// ```
pub fn make_try_with_catching<R, E, F>(operation: F) -> Try<R>
where
    F: FnOnce() -> Result<R, E>,
    E: Into<BoxError> + 'static,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(result) => Try::from(result),
        Err(payload) => {
            let failure = Failure::from_panic(payload);
            tracing::debug!(panic = %failure, "captured panic from operation");
            Try::Failure(failure)
        }
    }
}
