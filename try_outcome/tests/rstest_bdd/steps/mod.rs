//! Behavioural step modules registered with `rstest-bdd`.

pub mod outcome_steps;
