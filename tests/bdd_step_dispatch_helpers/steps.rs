//! Given and When step definitions for step dispatch BDD tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bdd_proxy::{BoxError, StepCall, StepError, StepProxy};
use rstest_bdd_macros::{given, when};

use super::state::{DispatchOutcome, StepDispatchState, StepResult, Vocabulary};
use super::target::Shop;

fn set_vocabulary(step_dispatch_state: &StepDispatchState, steps: &str, continuation: &str) {
    step_dispatch_state.vocabulary.set(Vocabulary {
        steps: steps.to_owned(),
        continuation: continuation.to_owned(),
    });
}

/// Splits `kind:description; kind:description` into call pairs.
fn parse_script(script: &str) -> StepResult<Vec<(String, String)>> {
    script
        .split(';')
        .map(str::trim)
        .filter(|call| !call.is_empty())
        .map(|call| {
            call.split_once(':')
                .map(|(kind, description)| (kind.trim().to_owned(), description.to_owned()))
                .ok_or_else(|| format!("call '{call}' should read kind:description"))
        })
        .collect()
}

#[given("the English step vocabulary")]
fn english_vocabulary(step_dispatch_state: &StepDispatchState) {
    set_vocabulary(step_dispatch_state, "given|when|then", "and");
}

#[given("the Portuguese step vocabulary")]
fn portuguese_vocabulary(step_dispatch_state: &StepDispatchState) {
    set_vocabulary(step_dispatch_state, "dado|quando|entao", "e");
}

#[given("a step vocabulary with steps pattern {steps} and continuation pattern {continuation}")]
fn custom_vocabulary(step_dispatch_state: &StepDispatchState, steps: String, continuation: String) {
    set_vocabulary(step_dispatch_state, &steps, &continuation);
}

#[given("an error filter that reports the failing step")]
fn reporting_filter(step_dispatch_state: &StepDispatchState) {
    step_dispatch_state
        .filter_calls
        .set(Arc::new(AtomicUsize::new(0)));
}

#[when("the calls {calls} are dispatched")]
fn dispatch_calls(step_dispatch_state: &StepDispatchState, calls: String) -> StepResult<()> {
    let vocabulary = step_dispatch_state
        .vocabulary
        .get()
        .ok_or_else(|| String::from("vocabulary should be set"))?;
    let script = parse_script(&calls)?;

    let mut proxy = match StepProxy::new(
        Shop::default(),
        &vocabulary.steps,
        &vocabulary.continuation,
    ) {
        Ok(proxy) => proxy,
        Err(e) => {
            step_dispatch_state
                .outcome
                .set(DispatchOutcome::ConstructionFailed {
                    message: e.to_string(),
                });
            return Ok(());
        }
    };

    if let Some(counter) = step_dispatch_state.filter_calls.get() {
        proxy.set_exception_filter(move |_error: &StepError, call: &StepCall<'_>| -> BoxError {
            counter.fetch_add(1, Ordering::SeqCst);
            BoxError::from(format!("step failed: {} {}", call.kind, call.description))
        });
    }

    let failure = script
        .iter()
        .find_map(|(kind, description)| proxy.call(kind, description, &[]).err());

    step_dispatch_state.outcome.set(DispatchOutcome::Dispatched {
        invoked: proxy.target().invoked.clone(),
        error: failure.as_ref().map(ToString::to_string),
        original: failure
            .as_ref()
            .and_then(StepError::original)
            .map(ToString::to_string),
        active_kind: proxy.current_kind().map(str::to_owned),
    });
    Ok(())
}
