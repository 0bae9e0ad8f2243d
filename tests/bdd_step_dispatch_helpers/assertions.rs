//! Then step definitions for step dispatch BDD tests.

use std::sync::atomic::Ordering;

use rstest_bdd_macros::then;

use super::state::{DispatchOutcome, StepDispatchState, StepResult};

/// The parts of a dispatched outcome the assertions inspect.
struct Dispatched {
    invoked: Vec<String>,
    error: Option<String>,
    original: Option<String>,
    active_kind: Option<String>,
}

fn dispatched(step_dispatch_state: &StepDispatchState) -> StepResult<Dispatched> {
    let outcome = step_dispatch_state
        .outcome
        .get()
        .ok_or_else(|| String::from("outcome should be set"))?;
    match outcome {
        DispatchOutcome::Dispatched {
            invoked,
            error,
            original,
            active_kind,
        } => Ok(Dispatched {
            invoked,
            error,
            original,
            active_kind,
        }),
        DispatchOutcome::ConstructionFailed { message } => {
            Err(format!("expected the proxy to be built, got: {message}"))
        }
    }
}

#[then("the invoked methods are {methods}")]
fn invoked_methods_are(step_dispatch_state: &StepDispatchState, methods: String) -> StepResult<()> {
    let expected: Vec<&str> = methods.split(',').map(str::trim).collect();
    let outcome = dispatched(step_dispatch_state)?;
    if outcome.invoked == expected {
        Ok(())
    } else {
        Err(format!(
            "expected invocations {expected:?}, got {:?}",
            outcome.invoked
        ))
    }
}

#[then("no methods are invoked")]
fn no_methods_invoked(step_dispatch_state: &StepDispatchState) -> StepResult<()> {
    let outcome = dispatched(step_dispatch_state)?;
    if outcome.invoked.is_empty() {
        Ok(())
    } else {
        Err(format!("expected no invocations, got {:?}", outcome.invoked))
    }
}

#[then("the dispatch fails with {message}")]
fn dispatch_fails_with(step_dispatch_state: &StepDispatchState, message: String) -> StepResult<()> {
    let outcome = dispatched(step_dispatch_state)?;
    match outcome.error {
        Some(error) if error.contains(&message) => Ok(()),
        Some(error) => Err(format!("expected error to contain '{message}', got: {error}")),
        None => Err(String::from("expected the dispatch to fail, but every call succeeded")),
    }
}

#[then("the original error is {message}")]
fn original_error_is(step_dispatch_state: &StepDispatchState, message: String) -> StepResult<()> {
    let outcome = dispatched(step_dispatch_state)?;
    match outcome.original {
        Some(original) if original == message => Ok(()),
        Some(original) => Err(format!("expected original error '{message}', got: {original}")),
        None => Err(String::from("expected a filtered error with an original")),
    }
}

#[then("the active step kind is {kind}")]
fn active_kind_is(step_dispatch_state: &StepDispatchState, kind: String) -> StepResult<()> {
    let outcome = dispatched(step_dispatch_state)?;
    if outcome.active_kind.as_deref() == Some(kind.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "expected active kind '{kind}', got {:?}",
            outcome.active_kind
        ))
    }
}

#[then("the filter was never called")]
fn filter_never_called(step_dispatch_state: &StepDispatchState) -> StepResult<()> {
    let counter = step_dispatch_state
        .filter_calls
        .get()
        .ok_or_else(|| String::from("a filter should be installed"))?;
    match counter.load(Ordering::SeqCst) {
        0 => Ok(()),
        calls => Err(format!("expected no filter calls, got {calls}")),
    }
}

#[then("construction fails with {message}")]
fn construction_fails_with(
    step_dispatch_state: &StepDispatchState,
    message: String,
) -> StepResult<()> {
    let outcome = step_dispatch_state
        .outcome
        .get()
        .ok_or_else(|| String::from("outcome should be set"))?;
    match outcome {
        DispatchOutcome::ConstructionFailed { message: actual } if actual.contains(&message) => {
            Ok(())
        }
        DispatchOutcome::ConstructionFailed { message: actual } => Err(format!(
            "expected construction error to contain '{message}', got: {actual}"
        )),
        DispatchOutcome::Dispatched { .. } => {
            Err(String::from("expected construction to fail, but the proxy was built"))
        }
    }
}
