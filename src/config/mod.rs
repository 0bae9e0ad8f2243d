//! Step vocabulary configuration.
//!
//! A [`ProxyConfig`] carries the two pattern fragments a proxy is built with.
//! Loading merges, lowest to highest: defaults, a TOML file, `BDD_PROXY_*`
//! environment variables and command-line flags.
//!
//! # Example Configuration
//!
//! ```toml
//! steps_pattern = "dado|quando|entao"
//! continuation_pattern = "e"
//! ```

mod cli;
mod loader;
mod types;


pub use cli::{ClassifyArgs, Cli, Commands, NormalizeArgs};
pub use loader::{env_var_names, load_config};
pub use types::{DEFAULT_CONTINUATION_PATTERN, DEFAULT_STEPS_PATTERN, ProxyConfig};
