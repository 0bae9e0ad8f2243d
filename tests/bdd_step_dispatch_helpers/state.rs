//! Scenario state for step dispatch BDD tests.

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Convenience alias for step outcomes.
pub type StepResult<T> = Result<T, String>;

/// The steps and continuation fragments a scenario builds its proxy with.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    pub(crate) steps: String,
    pub(crate) continuation: String,
}

/// Outcome of running a call script through a proxy.
#[derive(Clone, Debug)]
pub enum DispatchOutcome {
    /// The proxy was built and the script ran until done or until it failed.
    Dispatched {
        /// Methods the target recorded, in order.
        invoked: Vec<String>,
        /// The error that stopped the script, if any.
        error: Option<String>,
        /// The error the filter was given, if the error was filtered.
        original: Option<String>,
        /// The active step kind after the script.
        active_kind: Option<String>,
    },
    /// The proxy could not be built.
    ConstructionFailed {
        /// The `Display` representation of the error.
        message: String,
    },
}

/// State shared across step dispatch scenarios.
#[derive(ScenarioState)]
pub struct StepDispatchState {
    /// Vocabulary for the proxy under test.
    pub(crate) vocabulary: Slot<Vocabulary>,
    /// Filter invocation counter, present when a filter is requested.
    pub(crate) filter_calls: Slot<Arc<AtomicUsize>>,
    /// Outcome of the most recent script.
    pub(crate) outcome: Slot<DispatchOutcome>,
}

#[expect(
    clippy::derivable_impls,
    reason = "ScenarioState guidance discourages deriving Default in this module"
)]
impl Default for StepDispatchState {
    fn default() -> Self {
        Self {
            vocabulary: Slot::default(),
            filter_calls: Slot::default(),
            outcome: Slot::default(),
        }
    }
}

/// Fixture providing fresh state for each step dispatch scenario.
#[rstest::fixture]
pub fn step_dispatch_state() -> StepDispatchState {
    StepDispatchState::default()
}
