//! `rstest-bdd` behavioural suite for `try_outcome`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` files in `tests/features` to the shared fixtures.

mod fixtures;
mod scenarios;
pub mod steps;
