//! Positional argument decoding for generated step targets.

use std::cell::Cell;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::error::BoxError;

/// Errors raised while decoding the positional arguments of a step call.
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// The call supplied fewer arguments than the method declares.
    #[error("method '{method}' expects argument '{parameter}' at position {position}")]
    Missing {
        /// The invoked method.
        method: String,
        /// The parameter that has no value.
        parameter: String,
        /// Zero-based position of the parameter.
        position: usize,
    },

    /// An argument could not be decoded into the parameter's type.
    #[error("method '{method}' could not decode argument '{parameter}': {source}")]
    Decode {
        /// The invoked method.
        method: String,
        /// The parameter being decoded.
        parameter: String,
        /// The underlying decoding error.
        source: serde_json::Error,
    },

    /// The target has no method with the requested name.
    #[error("no method named '{method}'")]
    UnknownMethod {
        /// The requested method name.
        method: String,
    },
}

/// Reads positional arguments in declaration order.
///
/// Decoding goes through `serde`, so any `DeserializeOwned` parameter type
/// works. Arguments past the last declared parameter are never read and never
/// rejected. The cursor advances through a shared reference, which lets generated
/// code create one per call without caring whether any parameter is read.
#[derive(Debug)]
pub struct ArgCursor<'a> {
    method: &'a str,
    args: &'a [Value],
    position: Cell<usize>,
}

impl<'a> ArgCursor<'a> {
    /// Starts reading `args` on behalf of `method`.
    #[must_use]
    pub const fn new(method: &'a str, args: &'a [Value]) -> Self {
        Self {
            method,
            args,
            position: Cell::new(0),
        }
    }

    /// Decodes the next argument as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Missing`] when the arguments are exhausted and
    /// [`ArgumentError::Decode`] when the value does not fit `T`.
    pub fn take<T: DeserializeOwned>(&self, parameter: &str) -> Result<T, ArgumentError> {
        let position = self.position.get();
        let value = self
            .args
            .get(position)
            .ok_or_else(|| ArgumentError::Missing {
                method: self.method.to_owned(),
                parameter: parameter.to_owned(),
                position,
            })?;
        self.position.set(position + 1);

        T::deserialize(value).map_err(|source| ArgumentError::Decode {
            method: self.method.to_owned(),
            parameter: parameter.to_owned(),
            source,
        })
    }

    /// Number of arguments read so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.position.get()
    }
}

/// Converts a step method's return value into an invocation result.
pub trait IntoStepResult {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns the method's own error, boxed.
    fn into_step_result(self) -> Result<(), BoxError>;
}

impl IntoStepResult for () {
    fn into_step_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E: Into<BoxError>> IntoStepResult for Result<(), E> {
    fn into_step_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
