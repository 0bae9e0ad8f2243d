//! Fluent step dispatch onto a step target.
//!
//! [`StepProxy`] owns a target, the binding table discovered on it and the
//! dispatch state. Each call names a step kind (or the continuation token) and
//! a description; the proxy resolves the kind, normalises the description,
//! invokes the bound method and hands itself back so calls chain:
//!
//! ```
//! use bdd_proxy::{StepProxy, step_target};
//!
//! #[derive(Default)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! step_target! {
//!     impl Counter {
//!         /// @given a fresh counter
//!         fn reset(&mut self) {
//!             self.value = 0;
//!         }
//!
//!         /// @when it is incremented
//!         fn increment(&mut self) {
//!             self.value += 1;
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut proxy = StepProxy::new(Counter::default(), "given|when|then", "and")?;
//! proxy
//!     .given("a fresh counter", &[])?
//!     .when("it is incremented", &[])?
//!     .and("It is  incremented", &[])?;
//! assert_eq!(proxy.target().value, 2);
//! # Ok(())
//! # }
//! ```
//!
//! Every call-time failure, whether raised by dispatch or by the target
//! method, passes through the installed error filter first (see
//! [`StepProxy::set_exception_filter`]).

mod filter;
mod state;

pub use filter::{ErrorFilter, StepCall};
pub use state::DispatchState;

use serde_json::Value;
use tracing::debug;

use crate::binding::{BindingTable, StepPatterns, discover};
use crate::config::ProxyConfig;
use crate::error::{BoxError, Result, StepError};
use crate::normalize::normalize_key;
use crate::target::StepTarget;

/// Routes `kind(description, args)` calls to the methods of a step target.
///
/// The binding table is built once, eagerly, by [`StepProxy::new`] and never
/// changes afterwards. The dispatch state belongs to this proxy alone.
/// Dispatch takes `&mut self`; share a proxy across threads only behind the
/// caller's own synchronisation.
pub struct StepProxy<T> {
    target: T,
    patterns: StepPatterns,
    bindings: BindingTable,
    state: DispatchState,
    filter: Option<ErrorFilter>,
}

impl<T: StepTarget> StepProxy<T> {
    /// Builds a proxy over `target`, discovering its bindings.
    ///
    /// `steps_pattern` and `continuation_pattern` are regular-expression
    /// fragments such as `given|when|then` and `and`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a fragment does not compile
    /// and `BindingError::DuplicateBinding` when two methods claim the same
    /// kind and description.
    pub fn new(target: T, steps_pattern: &str, continuation_pattern: &str) -> Result<Self> {
        let patterns = StepPatterns::new(steps_pattern, continuation_pattern)?;
        Self::with_patterns(target, patterns)
    }

    /// Builds a proxy using the fragments from a loaded configuration.
    ///
    /// # Errors
    ///
    /// As for [`StepProxy::new`].
    pub fn from_config(target: T, config: &ProxyConfig) -> Result<Self> {
        Self::new(target, &config.steps_pattern, &config.continuation_pattern)
    }

    /// Builds a proxy from already compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `BindingError::DuplicateBinding` when two methods claim the
    /// same kind and description.
    pub fn with_patterns(target: T, patterns: StepPatterns) -> Result<Self> {
        let bindings = discover(&target, &patterns)?;
        debug!(
            target_type = bindings.target(),
            bindings = bindings.len(),
            "step proxy ready"
        );
        Ok(Self {
            target,
            patterns,
            bindings,
            state: DispatchState::Idle,
            filter: None,
        })
    }

    /// Installs `filter`, replacing any filter installed before.
    ///
    /// The filter sees every call-time error together with the call that
    /// raised it and returns the error the caller should get instead. The
    /// original is kept as the replacement's source and stays reachable through
    /// [`StepError::root_cause`].
    pub fn set_exception_filter<F>(&mut self, filter: F)
    where
        F: Fn(&StepError, &StepCall<'_>) -> BoxError + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
    }

    /// Dispatches one step call.
    ///
    /// `kind` is either a step kind or the continuation token; `args` are
    /// handed to the bound method untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::IllegalContinuation`], [`StepError::UnboundStep`]
    /// or [`StepError::Target`], or, when a filter is installed,
    /// [`StepError::Filtered`] wrapping one of them.
    pub fn call(
        &mut self,
        kind: &str,
        description: &str,
        args: &[Value],
    ) -> std::result::Result<&mut Self, StepError> {
        match self.dispatch(kind, description, args) {
            Ok(()) => Ok(self),
            Err(error) => {
                let call = StepCall {
                    kind,
                    description,
                    args,
                };
                Err(filter::apply(self.filter.as_ref(), error, &call))
            }
        }
    }

    /// Dispatches a `given` step.
    ///
    /// # Errors
    ///
    /// As for [`StepProxy::call`].
    pub fn given(
        &mut self,
        description: &str,
        args: &[Value],
    ) -> std::result::Result<&mut Self, StepError> {
        self.call("given", description, args)
    }

    /// Dispatches a `when` step.
    ///
    /// # Errors
    ///
    /// As for [`StepProxy::call`].
    pub fn when(
        &mut self,
        description: &str,
        args: &[Value],
    ) -> std::result::Result<&mut Self, StepError> {
        self.call("when", description, args)
    }

    /// Dispatches a `then` step.
    ///
    /// # Errors
    ///
    /// As for [`StepProxy::call`].
    pub fn then(
        &mut self,
        description: &str,
        args: &[Value],
    ) -> std::result::Result<&mut Self, StepError> {
        self.call("then", description, args)
    }

    /// Dispatches an `and` step.
    ///
    /// # Errors
    ///
    /// As for [`StepProxy::call`].
    pub fn and(
        &mut self,
        description: &str,
        args: &[Value],
    ) -> std::result::Result<&mut Self, StepError> {
        self.call("and", description, args)
    }

    /// Dispatches a `but` step.
    ///
    /// # Errors
    ///
    /// As for [`StepProxy::call`].
    pub fn but(
        &mut self,
        description: &str,
        args: &[Value],
    ) -> std::result::Result<&mut Self, StepError> {
        self.call("but", description, args)
    }

    /// Resolves, looks up and invokes one call, without filtering.
    fn dispatch(
        &mut self,
        kind: &str,
        description: &str,
        args: &[Value],
    ) -> std::result::Result<(), StepError> {
        let lookup_kind = self.state.advance(kind, &self.patterns)?;
        let key = normalize_key(description);

        let Some(method) = self.bindings.lookup(&lookup_kind, &key) else {
            return Err(StepError::UnboundStep {
                target: self.bindings.target().to_owned(),
                kind: lookup_kind,
                description: description.to_owned(),
            });
        };

        debug!(
            target_type = self.bindings.target(),
            token = kind,
            kind = %lookup_kind,
            key = %key,
            method = %method,
            "dispatching step"
        );
        self.target
            .invoke(method.name(), args)
            .map_err(StepError::Target)
    }
}

impl<T> StepProxy<T> {
    /// The proxied target.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// The proxied target, mutably.
    pub const fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consumes the proxy and returns the target.
    #[must_use]
    pub fn into_target(self) -> T {
        self.target
    }

    /// The bindings discovered at construction.
    #[must_use]
    pub const fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// The compiled step patterns.
    #[must_use]
    pub const fn patterns(&self) -> &StepPatterns {
        &self.patterns
    }

    /// The step kind continuation calls currently resolve to.
    #[must_use]
    pub const fn current_kind(&self) -> Option<&str> {
        self.state.current_kind()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StepProxy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepProxy")
            .field("target", &self.target)
            .field("patterns", &self.patterns)
            .field("bindings", &self.bindings)
            .field("state", &self.state)
            .field("filter", &self.filter.as_ref().map(|_| "<filter>"))
            .finish()
    }
}
