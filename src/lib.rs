//! Fluent given/when/then step dispatch onto annotated test targets.
//!
//! `bdd-proxy` lets a test drive a plain object through behaviour-style steps:
//!
//! ```text
//! proxy.given("a registered user", &[])?.when("they log in", &[])?.then("they see the dashboard", &[])?;
//! ```
//!
//! Each call is routed to the target method bound to that step kind and
//! description. Bindings come from `@<kind> <description>` lines in a
//! method's documentation, from the `<kind>_<rest>` naming convention, or
//! from explicit declarations, and descriptions are compared after
//! normalisation so punctuation, case and accents do not matter.
//!
//! # Modules
//!
//! - [`binding`]: Pattern compilation, binding discovery and the binding table
//! - [`config`]: Step vocabulary configuration with layered precedence
//! - [`error`]: Semantic error types
//! - [`normalize`]: Description normalisation
//! - [`proxy`]: The step proxy and its dispatch state
//! - [`target`]: The step target abstraction and the `step_target!` macro

pub mod binding;
pub mod config;
pub mod error;
pub mod normalize;
pub mod proxy;
pub mod target;

pub use error::{BindingError, BoxError, ConfigError, ProxyError, StepError};
pub use proxy::{ErrorFilter, StepCall, StepProxy};
pub use target::{MethodDescriptor, StepTarget};
