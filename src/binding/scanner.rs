//! Binding discovery over a step target's methods.

use tracing::{debug, trace};

use super::patterns::StepPatterns;
use super::table::{BindingTable, MethodHandle, Registration};
use crate::error::BindingError;
use crate::target::{MethodDescriptor, StepTarget};

/// Where a candidate binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    /// An `@<kind> <description>` line in the documentation text.
    Annotation,
    /// The `<kind>_<rest>` method naming convention.
    MethodName,
    /// A binding declared directly on the descriptor.
    Explicit,
}

/// A (kind, description) pair found on a method, before registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The step kind.
    pub kind: String,
    /// The raw description.
    pub description: String,
    /// How the pair was discovered.
    pub source: BindingSource,
}

/// Collects a method's candidates: annotations first, then the method name,
/// then explicit bindings.
#[must_use]
pub fn candidates(method: &MethodDescriptor, patterns: &StepPatterns) -> Vec<Candidate> {
    let annotated = patterns
        .annotations(method.doc())
        .map(|(kind, description)| Candidate {
            kind: kind.to_owned(),
            description: description.to_owned(),
            source: BindingSource::Annotation,
        });

    let named = patterns
        .method_name_binding(method.name())
        .map(|(kind, description)| Candidate {
            kind,
            description,
            source: BindingSource::MethodName,
        });

    let explicit = method
        .explicit_bindings()
        .iter()
        .map(|binding| Candidate {
            kind: binding.kind.clone(),
            description: binding.description.clone(),
            source: BindingSource::Explicit,
        });

    annotated.chain(named).chain(explicit).collect()
}

/// Walks every method of `target` once and builds its binding table.
///
/// # Errors
///
/// Returns [`BindingError::DuplicateBinding`] as soon as two different methods
/// claim the same kind and normalised description, and
/// [`BindingError::InvalidExplicitKind`] for an explicit binding whose kind is
/// not a step kind. No partial table is returned.
pub fn discover<T>(target: &T, patterns: &StepPatterns) -> Result<BindingTable, BindingError>
where
    T: StepTarget + ?Sized,
{
    let target_name = target.type_name();
    let mut builder = BindingTable::builder(target_name);

    for method in target.methods() {
        let handle = MethodHandle::new(method.name());
        for candidate in candidates(&method, patterns) {
            trace!(
                target_type = target_name,
                method = %handle,
                kind = %candidate.kind,
                description = %candidate.description,
                source = ?candidate.source,
                "found step candidate"
            );
            if candidate.source == BindingSource::Explicit && !patterns.is_step(&candidate.kind) {
                return Err(BindingError::InvalidExplicitKind {
                    target: target_name.to_owned(),
                    method: handle.name().to_owned(),
                    kind: candidate.kind,
                    steps_pattern: patterns.steps_source().to_owned(),
                });
            }
            let outcome = builder.register(&candidate.kind, &candidate.description, &handle)?;
            if outcome == Registration::Added {
                debug!(
                    target_type = target_name,
                    method = %handle,
                    kind = %candidate.kind,
                    description = %candidate.description,
                    "registered step binding"
                );
            }
        }
    }

    Ok(builder.build())
}
