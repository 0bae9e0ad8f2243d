//! Semantic error types for bdd-proxy.
//!
//! This module defines the error hierarchy for the crate, following the
//! principle of using semantic error enums (via `thiserror`) for conditions the
//! caller might inspect or match on, while reserving opaque errors
//! (`eyre::Report`) for the binary boundary.
//!
//! Errors fall into two phases. Construction-time errors ([`ConfigError`],
//! [`BindingError`]) come straight out of the proxy constructor. Call-time
//! errors ([`StepError`]) come out of step dispatch and are the only errors an
//! installed error filter ever sees.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// A boxed, thread-safe error raised by a step target or an error filter.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or parsed.
    #[error("failed to parse configuration file: {message}")]
    ParseError {
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the invalid field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// The `OrthoConfig` library returned an error while merging layers.
    #[error("configuration loading failed: {0}")]
    OrthoConfig(Arc<ortho_config::OrthoError>),
}

/// Errors raised while building the binding table.
#[derive(Debug, Error)]
pub enum BindingError {
    /// Two different methods claim the same kind and normalised description.
    #[error(
        "{target} has two methods ({existing} and {duplicate}) with the same annotation: @{kind} {description}"
    )]
    DuplicateBinding {
        /// The type name of the step target.
        target: String,
        /// The method that was bound first.
        existing: String,
        /// The method that tried to claim the same binding.
        duplicate: String,
        /// The step kind of the clashing binding.
        kind: String,
        /// The raw description as declared by the second method.
        description: String,
    },

    /// An explicit binding names a kind outside the steps pattern.
    #[error(
        "{target}::{method} declares an explicit binding for '{kind}', which is not a step kind ({steps_pattern})"
    )]
    InvalidExplicitKind {
        /// The type name of the step target.
        target: String,
        /// The method carrying the binding.
        method: String,
        /// The rejected kind.
        kind: String,
        /// The configured steps fragment.
        steps_pattern: String,
    },
}

/// Errors raised while dispatching a step call.
#[derive(Debug, Error)]
pub enum StepError {
    /// A continuation token was used before any step kind was active.
    #[error("continuation step ({continuation}) must be called after a step ({steps_pattern})")]
    IllegalContinuation {
        /// The continuation token that was called.
        continuation: String,
        /// The configured steps pattern fragment.
        steps_pattern: String,
    },

    /// No method is bound to the resolved kind and description.
    #[error("{target} does not have any method annotated with: @{kind} {description}")]
    UnboundStep {
        /// The type name of the step target.
        target: String,
        /// The kind used for the lookup.
        kind: String,
        /// The description as the caller passed it.
        description: String,
    },

    /// The bound method itself failed.
    #[error(transparent)]
    Target(BoxError),

    /// An error filter replaced the original error.
    #[error("{replacement}")]
    Filtered {
        /// The error returned by the filter.
        replacement: BoxError,
        /// The error the filter was given.
        #[source]
        original: Box<StepError>,
    },
}

impl StepError {
    /// Returns the filter's replacement error, if this error was filtered.
    #[must_use]
    pub fn replacement(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Filtered { replacement, .. } => Some(replacement.as_ref()),
            _ => None,
        }
    }

    /// Returns the error the filter was given, if this error was filtered.
    #[must_use]
    pub fn original(&self) -> Option<&Self> {
        match self {
            Self::Filtered { original, .. } => Some(original.as_ref()),
            _ => None,
        }
    }

    /// Walks back through filtered layers to the error dispatch produced.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Filtered { original, .. } = current {
            current = original;
        }
        current
    }
}

/// Top-level error type for bdd-proxy.
///
/// This enum aggregates the phase-specific errors into a single type. At the
/// binary boundary these errors are converted to `eyre::Report` for
/// human-readable reporting.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// An error occurred during configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An error occurred while discovering step bindings.
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// An error occurred while dispatching a step.
    #[error(transparent)]
    Step(#[from] StepError),
}

/// A specialised `Result` type for bdd-proxy operations.
pub type Result<T> = std::result::Result<T, ProxyError>;
