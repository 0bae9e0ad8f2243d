//! Behavioural step helpers for step dispatch and error filter scenarios.

mod assertions;
mod state;
mod steps;
mod target;

pub use state::{StepDispatchState, step_dispatch_state};
