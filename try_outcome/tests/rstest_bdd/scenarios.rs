//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{OutcomeState, TupleState, outcome_state, tuple_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/outcome.feature",
    fixtures = [outcome_state: OutcomeState]
);
scenarios!(
    "tests/features/tuple_unwrap.feature",
    fixtures = [tuple_state: TupleState]
);
