//! Constructors for [`Failure`].

use std::{
    any::{Any, TypeId},
    borrow::Cow,
    error::Error,
    sync::Arc,
};

use super::types::{
    BoxError, Captured, Failure, FailureKind, PanicFailure, UsingUninitializedTry,
};

const UNKNOWN_PANIC_PAYLOAD: &str = "Box<dyn Any>";

impl Failure {
    /// Capture a concrete error value.
    ///
    /// The concrete type is retained, so [`Failure::is`] and
    /// [`Failure::downcast_ref`] recover it later. Capturing a value that is
    /// already a [`Failure`] returns that failure unchanged.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::capture(error)
    }

    /// Capture anything convertible into a boxed error, such as an error
    /// value, a `String`, a `&str` or an existing [`BoxError`].
    ///
    /// The type name is recorded only when `E` is itself the captured error.
    /// Boxed errors and text are converted before capture, so their concrete
    /// type is unknown and [`Failure::type_name`] returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_outcome::Failure;
    ///
    /// let first = Failure::capture("connection reset");
    /// let again = Failure::capture(first.clone());
    /// assert!(first.is_same(&again));
    /// ```
    #[must_use]
    pub fn capture<E>(error: E) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        let boxed: BoxError = error.into();
        match boxed.downcast::<Self>() {
            Ok(existing) => *existing,
            Err(other) => Self::from_parts(
                FailureKind::Error,
                Arc::from(other),
                concrete_type_name::<E>(),
            ),
        }
    }

    /// Build a failure carrying only a message.
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        let text: String = message.into();
        let boxed = BoxError::from(text);
        Self::from_parts(FailureKind::Error, Arc::from(boxed), None)
    }

    /// Capture a panic payload as returned by [`std::panic::catch_unwind`].
    ///
    /// `&str` and `String` payloads keep their text; any other payload is
    /// described generically.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload_text(payload.as_ref());
        Self::from_parts(
            FailureKind::Panic,
            Arc::new(PanicFailure { message }),
            Some(std::any::type_name::<PanicFailure>()),
        )
    }

    /// The failure reported when an empty [`Try`](crate::Try) is read.
    #[must_use]
    pub fn uninitialized() -> Self {
        Self::from_parts(
            FailureKind::Uninitialized,
            Arc::new(UsingUninitializedTry),
            Some(std::any::type_name::<UsingUninitializedTry>()),
        )
    }

    /// Return a new failure wrapping the same error, chained to `cause`.
    ///
    /// The result is a distinct failure: it is not [`Failure::is_same`] as
    /// `self`.
    #[must_use]
    pub fn with_cause(&self, cause: Self) -> Self {
        Self {
            inner: Arc::new(Captured {
                kind: self.inner.kind,
                error: Arc::clone(&self.inner.error),
                type_name: self.inner.type_name,
                cause: Some(cause),
            }),
        }
    }

    fn from_parts(
        kind: FailureKind,
        error: Arc<dyn Error + Send + Sync + 'static>,
        type_name: Option<&'static str>,
    ) -> Self {
        Self {
            inner: Arc::new(Captured {
                kind,
                error,
                type_name,
                cause: None,
            }),
        }
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_owned()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        UNKNOWN_PANIC_PAYLOAD.to_owned()
    }
}

/// Name of `E` when it is the error being captured rather than a value
/// converted into a boxed error.
fn concrete_type_name<E: 'static>() -> Option<&'static str> {
    let converted = [
        TypeId::of::<BoxError>(),
        TypeId::of::<String>(),
        TypeId::of::<&'static str>(),
        TypeId::of::<Cow<'static, str>>(),
    ];
    (!converted.contains(&TypeId::of::<E>())).then(std::any::type_name::<E>)
}
