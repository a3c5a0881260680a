//! Shared fixtures for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::access::AccessLog;
use try_outcome::{Failure, Try};

/// Unwrapped form of the three-position tuple used by the scenarios.
pub type UnwrappedTuple = (u32, String, u32);

/// State shared between the steps of a single-outcome scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeState {
    pub outcome: Slot<Try<i64>>,
    pub moved: Slot<Try<i64>>,
    pub accessed: Slot<Result<i64, Failure>>,
}

/// State shared between the steps of a tuple-unwrap scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct TupleState {
    pub tries: Slot<(Try<u32>, Try<String>, Try<u32>)>,
    pub access_log: Slot<AccessLog>,
    pub unwrapped: Slot<Result<UnwrappedTuple, Failure>>,
}

/// Creates a clean single-outcome state.
#[fixture]
pub fn outcome_state() -> OutcomeState {
    OutcomeState::default()
}

/// Creates a clean tuple state.
#[fixture]
pub fn tuple_state() -> TupleState {
    TupleState::default()
}
