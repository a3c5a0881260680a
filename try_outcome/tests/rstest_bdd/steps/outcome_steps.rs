//! Steps exercising a single stored outcome.

use crate::fixtures::OutcomeState;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::unquote;
use try_outcome::{Failure, FailureKind, Try, make_try_with};

#[given("an outcome holding {value:i64}")]
fn outcome_holding(outcome_state: &OutcomeState, value: i64) -> Result<()> {
    ensure!(outcome_state.outcome.is_empty(), "outcome already initialised");
    outcome_state
        .outcome
        .set(make_try_with(|| Ok::<_, Failure>(value)));
    Ok(())
}

#[given("an outcome that failed with {message}")]
fn outcome_failed(outcome_state: &OutcomeState, message: String) -> Result<()> {
    ensure!(outcome_state.outcome.is_empty(), "outcome already initialised");
    let text = unquote(&message).to_owned();
    outcome_state
        .outcome
        .set(make_try_with(|| Err::<i64, _>(text)));
    Ok(())
}

#[given("an empty outcome")]
fn empty_outcome(outcome_state: &OutcomeState) {
    outcome_state.outcome.set(Try::default());
}

#[when("the outcome value is accessed")]
fn access_value(outcome_state: &OutcomeState) -> Result<()> {
    let accessed = outcome_state
        .outcome
        .with_ref(|outcome| outcome.value().copied())
        .ok_or_else(|| anyhow!("no outcome stored"))?;
    outcome_state.accessed.set(accessed);
    Ok(())
}

#[when("the outcome is moved out")]
fn move_out(outcome_state: &OutcomeState) -> Result<()> {
    let mut source = outcome_state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome stored"))?;
    outcome_state.moved.set(source.take());
    outcome_state.outcome.set(source);
    Ok(())
}

#[then("the accessed value is {expected:i64}")]
fn accessed_value(outcome_state: &OutcomeState, expected: i64) -> Result<()> {
    let accessed = outcome_state
        .accessed
        .take()
        .ok_or_else(|| anyhow!("value was not accessed"))?;
    let value = accessed.map_err(|err| anyhow!("unexpected failure: {err}"))?;
    ensure!(value == expected, "expected {expected}, got {value}");
    Ok(())
}

#[then("the access fails with {message}")]
fn access_fails(outcome_state: &OutcomeState, message: String) -> Result<()> {
    let failure = take_failure(outcome_state)?;
    ensure!(
        failure.kind() == FailureKind::Error,
        "expected an error failure, got {:?}",
        failure.kind()
    );
    let expected = unquote(&message);
    ensure!(
        failure.message() == expected,
        "expected message {expected:?}, got {:?}",
        failure.message()
    );
    Ok(())
}

#[then("the access reports an uninitialised outcome")]
fn access_uninitialised(outcome_state: &OutcomeState) -> Result<()> {
    let failure = take_failure(outcome_state)?;
    ensure!(
        failure.kind() == FailureKind::Uninitialized,
        "expected uninitialised access, got {failure:?}"
    );
    Ok(())
}

#[then("the source outcome is empty")]
fn source_empty(outcome_state: &OutcomeState) -> Result<()> {
    let empty = outcome_state
        .outcome
        .with_ref(Try::is_empty)
        .ok_or_else(|| anyhow!("source outcome missing"))?;
    ensure!(empty, "moved-from outcome should be empty");
    Ok(())
}

#[then("the moved outcome holds {expected:i64}")]
fn moved_holds(outcome_state: &OutcomeState, expected: i64) -> Result<()> {
    let moved = outcome_state
        .moved
        .take()
        .ok_or_else(|| anyhow!("no moved outcome"))?;
    let value = moved
        .into_value()
        .map_err(|err| anyhow!("unexpected failure: {err}"))?;
    ensure!(value == expected, "expected {expected}, got {value}");
    Ok(())
}

fn take_failure(outcome_state: &OutcomeState) -> Result<Failure> {
    let accessed = outcome_state
        .accessed
        .take()
        .ok_or_else(|| anyhow!("value was not accessed"))?;
    match accessed {
        Ok(value) => Err(anyhow!("expected a failure, got value {value}")),
        Err(failure) => Ok(failure),
    }
}
