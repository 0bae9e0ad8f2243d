//! The error filter hook.

use serde_json::Value;

use crate::error::{BoxError, StepError};

/// The step call an error came from, as handed to an error filter.
#[derive(Debug, Clone, Copy)]
pub struct StepCall<'a> {
    /// The token the call was made with, e.g. `given` or `and`.
    pub kind: &'a str,
    /// The description as the caller passed it.
    pub description: &'a str,
    /// The positional arguments as the caller passed them.
    pub args: &'a [Value],
}

/// Transforms a call-time error into the error the caller should see.
///
/// The proxy keeps the original error as the source of the replacement, so a
/// filter only has to build the new error. Its output is always wrapped in
/// [`StepError::Filtered`]; use [`StepError::root_cause`] to get back the
/// error the filter received.
pub type ErrorFilter = Box<dyn Fn(&StepError, &StepCall<'_>) -> BoxError + Send + Sync>;

/// Runs `filter`, if any, over `error`.
pub(super) fn apply(filter: Option<&ErrorFilter>, error: StepError, call: &StepCall<'_>) -> StepError {
    let Some(filter) = filter else {
        return error;
    };

    let replacement = filter(&error, call);
    tracing::debug!(
        kind = call.kind,
        description = call.description,
        original = %error,
        replacement = %replacement,
        "error filter replaced step error"
    );
    StepError::Filtered {
        replacement,
        original: Box::new(error),
    }
}
