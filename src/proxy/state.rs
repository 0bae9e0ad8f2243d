//! The per-proxy dispatch state machine.

use crate::binding::StepPatterns;
use crate::error::StepError;

/// Which step kind, if any, continuation calls resolve against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DispatchState {
    /// No step kind has been called yet.
    #[default]
    Idle,
    /// The most recent non-continuation kind.
    Active(String),
}

impl DispatchState {
    /// The active kind, if any.
    #[must_use]
    pub const fn current_kind(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Active(kind) => Some(kind.as_str()),
        }
    }

    /// Applies an incoming call token and returns the kind to look up.
    ///
    /// Continuation tokens leave the state alone and reuse the active kind;
    /// any other token becomes the active kind.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::IllegalContinuation`] for a continuation token
    /// while no kind is active.
    pub fn advance(&mut self, token: &str, patterns: &StepPatterns) -> Result<String, StepError> {
        if patterns.is_continuation(token) {
            return self
                .current_kind()
                .map(str::to_owned)
                .ok_or_else(|| StepError::IllegalContinuation {
                    continuation: token.to_owned(),
                    steps_pattern: patterns.steps_source().to_owned(),
                });
        }

        *self = Self::Active(token.to_owned());
        Ok(token.to_owned())
    }
}
