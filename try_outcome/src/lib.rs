//! Deferred outcome handling built around the [`Try`] container.
//!
//! A [`Try`] stores the outcome of a fallible operation as data: a value, a
//! captured [`Failure`], or nothing yet. The failure stays inert until a
//! value accessor re-raises it as the `Err` side of a `Result`, so outcomes
//! can be handed between threads, kept in collections and inspected later.
//!
//! - [`make_try_with`] runs an operation and captures its outcome.
//! - [`make_try_with_catching`] additionally captures panics.
//! - [`unwrap_try_tuple`] unwraps a tuple of outcomes, surfacing the first
//!   failure.
//!
//! ```
//! use try_outcome::{make_try_with, unwrap_try_tuple};
//!
//! let width = make_try_with(|| "80".parse::<u32>());
//! let height = make_try_with(|| "24".parse::<u32>());
//! let (w, h) = unwrap_try_tuple((width, height))?;
//! assert_eq!(w * h, 1920);
//! # Ok::<(), try_outcome::Failure>(())
//! ```

mod capture;
mod failure;
mod outcome;
mod result_ext;
mod tuple;

pub use capture::{make_try_with, make_try_with_catching};
pub use failure::{BoxError, Failure, FailureKind, PanicFailure, UsingUninitializedTry};
pub use outcome::Try;
pub use result_ext::TryResultExt;
pub use tuple::{TryValue, UnwrapTryTuple, unwrap_try_tuple};
