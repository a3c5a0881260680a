//! Extensions for moving between `Result` and [`Try`] concisely.
//!
//! These helpers replace repetitive `.map_err(Failure::capture)` and
//! `Try::from(result)` calls at the boundary between code that propagates
//! errors immediately and code that stores outcomes for later.
//!
//! - Use [`TryResultExt::into_try`] to store a `Result` as a [`Try`].
//! - Use [`TryResultExt::capture_failure`] to keep propagating with `?` while
//!   normalising the error into a [`Failure`].
//!
//! # Examples
//!
//! ```
//! use try_outcome::{Failure, TryResultExt};
//!
//! fn port(raw: &str) -> Result<u16, Failure> {
//!     raw.parse::<u16>().capture_failure()
//! }
//!
//! assert!(port("8080").is_ok());
//! let stored = "eighty".parse::<u16>().into_try();
//! assert!(stored.has_failure());
//! ```

use crate::{BoxError, Failure, Try};

/// Generic extension for any `Result<T, E>` whose error converts into a
/// [`BoxError`].
pub trait TryResultExt<T, E> {
    /// Store the result as a [`Try`], capturing the error as a [`Failure`].
    fn into_try(self) -> Try<T>;

    /// Convert the error side into a [`Failure`].
    ///
    /// # Errors
    ///
    /// Propagates the original error after capturing it.
    fn capture_failure(self) -> Result<T, Failure>;
}

impl<T, E> TryResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError> + 'static,
{
    fn into_try(self) -> Try<T> {
        Try::from(self)
    }

    fn capture_failure(self) -> Result<T, Failure> {
        self.map_err(Failure::capture)
    }
}
