//! Configuration data types for bdd-proxy.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::binding::StepPatterns;
use crate::error::ConfigError;

/// Steps fragment used when nothing else is configured.
pub const DEFAULT_STEPS_PATTERN: &str = "given|when|then";

/// Continuation fragment used when nothing else is configured.
pub const DEFAULT_CONTINUATION_PATTERN: &str = "and";

/// The step vocabulary a proxy dispatches with.
///
/// Both fields are regular-expression fragments, typically alternations of
/// literal words. They are merged from defaults, a configuration file,
/// `BDD_PROXY_*` environment variables and command-line flags, later layers
/// winning.
///
/// Configuration files are discovered in this order:
/// 1. Path specified via `BDD_PROXY_CONFIG_PATH`
/// 2. `.bdd-proxy.toml` in the current working directory
/// 3. `.bdd-proxy.toml` in the home directory
/// 4. `~/.config/bdd-proxy/config.toml` (XDG default)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BDD_PROXY",
    discovery(
        app_name = "bdd-proxy",
        env_var = "BDD_PROXY_CONFIG_PATH",
        config_file_name = "config.toml",
        dotfile_name = ".bdd-proxy.toml",
        config_cli_long = "config",
        config_cli_visible = true,
    )
)]
pub struct ProxyConfig {
    /// Alternation of step kinds, e.g. `given|when|then`.
    pub steps_pattern: String,

    /// Alternation of continuation tokens, e.g. `and`.
    pub continuation_pattern: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            steps_pattern: String::from(DEFAULT_STEPS_PATTERN),
            continuation_pattern: String::from(DEFAULT_CONTINUATION_PATTERN),
        }
    }
}

impl ProxyConfig {
    /// Compiles both fragments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the field whose fragment is
    /// empty or does not compile.
    pub fn patterns(&self) -> Result<StepPatterns, ConfigError> {
        StepPatterns::new(&self.steps_pattern, &self.continuation_pattern)
    }
}
