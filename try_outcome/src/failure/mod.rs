//! Captured failures carried by [`Try`](crate::Try).

mod constructors;
mod inspect;
#[cfg(feature = "serde")]
mod report;
mod types;

pub use types::{BoxError, Failure, FailureKind, PanicFailure, UsingUninitializedTry};
