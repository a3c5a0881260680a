//! Test helpers shared across crates in the try-outcome workspace.
//!
//! - [`access`] records which tuple positions had their accessor invoked.
//! - [`errors`] provides sample error types to capture as failures.
//! - [`text`] normalises behavioural step arguments.

pub mod access;
pub mod errors;
pub mod text;
