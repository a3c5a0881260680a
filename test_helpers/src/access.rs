//! Tracked accessors recording which tuple positions were unwrapped.
//!
//! # Examples
//!
//! ```
//! use try_outcome_test_helpers::access::AccessLog;
//! use try_outcome::{Try, unwrap_try_tuple};
//!
//! let log = AccessLog::default();
//! let tuple = (log.track(0, Try::new(1)), log.track(1, Try::new(2)));
//! assert!(unwrap_try_tuple(tuple).is_ok());
//! assert_eq!(log.accessed(), vec![0, 1]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use try_outcome::{Failure, Try, TryValue};

/// Shared record of accessor invocations, in call order.
#[derive(Debug, Clone, Default)]
pub struct AccessLog(Arc<Mutex<Vec<usize>>>);

impl AccessLog {
    /// Wrap `outcome` so that unwrapping it records `position`.
    #[must_use]
    pub fn track<T>(&self, position: usize, outcome: Try<T>) -> TrackedAccess<T> {
        TrackedAccess {
            position,
            outcome,
            log: self.clone(),
        }
    }

    /// Positions whose accessor ran, in order.
    #[must_use]
    pub fn accessed(&self) -> Vec<usize> {
        self.0.lock().clone()
    }

    /// Returns `true` when the accessor for `position` ran.
    #[must_use]
    pub fn was_accessed(&self, position: usize) -> bool {
        self.0.lock().contains(&position)
    }
}

/// A tuple position whose accessor records itself in an [`AccessLog`].
#[derive(Debug)]
pub struct TrackedAccess<T> {
    position: usize,
    outcome: Try<T>,
    log: AccessLog,
}

impl<T> TryValue for TrackedAccess<T> {
    type Output = T;

    fn try_value(self) -> Result<T, Failure> {
        self.log.0.lock().push(self.position);
        self.outcome.into_value()
    }
}
