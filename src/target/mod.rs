//! The step target seam.
//!
//! A proxy never inspects a target's methods itself. It asks the target,
//! through [`StepTarget`], for a description of each method (its name, its
//! documentation text and any explicit bindings) and later asks the target to
//! invoke one of them by name with positional arguments.
//!
//! Hand-written implementations are fine, but most targets are declared with
//! the [`step_target!`](crate::step_target) macro, which derives both halves
//! from an ordinary `impl` block: doc comments become the documentation text
//! and parameters are decoded from the positional [`Value`] arguments.

mod args;
mod macros;

pub use args::{ArgCursor, ArgumentError, IntoStepResult};
pub use serde_json::Value;

use crate::error::BoxError;

/// An explicit (kind, description) pair declared on a method descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitBinding {
    /// The step kind, e.g. `given`.
    pub kind: String,
    /// The raw step description.
    pub description: String,
}

/// What a target reports about one of its methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    name: String,
    doc: String,
    explicit: Vec<ExplicitBinding>,
}

impl MethodDescriptor {
    /// Describes a method by name and documentation text.
    #[must_use]
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            explicit: Vec::new(),
        }
    }

    /// Adds an explicit binding, registered after annotation and name
    /// bindings.
    #[must_use]
    pub fn with_binding(mut self, kind: impl Into<String>, description: impl Into<String>) -> Self {
        self.explicit.push(ExplicitBinding {
            kind: kind.into(),
            description: description.into(),
        });
        self
    }

    /// The method's declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The method's documentation text.
    #[must_use]
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Bindings declared directly rather than discovered.
    #[must_use]
    pub fn explicit_bindings(&self) -> &[ExplicitBinding] {
        &self.explicit
    }
}

/// Host reflection over a step target.
///
/// Implementors list their methods and invoke them by name. The proxy depends
/// on nothing else.
#[cfg_attr(test, mockall::automock)]
pub trait StepTarget {
    /// The name used for the target in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Describes every method that may carry step bindings.
    fn methods(&self) -> Vec<MethodDescriptor>;

    /// Invokes the named method with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the method raises, including argument decoding
    /// failures and unknown method names.
    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<(), BoxError>;
}

impl<T: StepTarget + ?Sized> StepTarget for &mut T {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn methods(&self) -> Vec<MethodDescriptor> {
        (**self).methods()
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<(), BoxError> {
        (**self).invoke(method, args)
    }
}

impl<T: StepTarget + ?Sized> StepTarget for Box<T> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn methods(&self) -> Vec<MethodDescriptor> {
        (**self).methods()
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<(), BoxError> {
        (**self).invoke(method, args)
    }
}
