//! Configuration loading with layered precedence.
//!
//! Layers, lowest to highest: application defaults, configuration file,
//! environment variables, command-line arguments. The layers are composed
//! with `MergeComposer` directly rather than through the derive's `load()`
//! because the `Cli` struct owns subcommand dispatch and the `--config` flag.
//!
//! The merged fragments are compiled before the configuration is returned, so
//! a bad pattern from any layer fails here rather than at proxy construction.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::Env;
use ortho_config::discovery::ConfigDiscovery;
use ortho_config::serde_json::{self, Map, Value};
use ortho_config::{MergeComposer, toml};
use tracing::debug;

use crate::config::{Cli, ProxyConfig};
use crate::error::{ConfigError, Result};

/// Maps one environment variable onto a top-level configuration field.
struct EnvVarSpec {
    env_var: &'static str,
    field: &'static str,
}

const ENV_VAR_SPECS: &[EnvVarSpec] = &[
    EnvVarSpec {
        env_var: "BDD_PROXY_STEPS_PATTERN",
        field: "steps_pattern",
    },
    EnvVarSpec {
        env_var: "BDD_PROXY_CONTINUATION_PATTERN",
        field: "continuation_pattern",
    },
];

/// Returns the environment variable names the loader reads.
///
/// Tests use this to clear every `BDD_PROXY_*` override in one pass.
#[must_use]
pub fn env_var_names() -> Vec<&'static str> {
    ENV_VAR_SPECS.iter().map(|spec| spec.env_var).collect()
}

/// Loads configuration from every layer.
///
/// An explicit `--config` path must be readable; without one the first
/// existing discovery candidate is used, if any.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` for an unreadable or malformed file,
/// `ConfigError::OrthoConfig` when the merged layers do not deserialise and
/// `ConfigError::InvalidValue` when a merged fragment does not compile.
pub fn load_config<E: Env>(cli: &Cli, env: &E) -> Result<ProxyConfig> {
    let mut composer = MergeComposer::new();

    let defaults =
        serde_json::to_value(ProxyConfig::default()).map_err(|e| ConfigError::ParseError {
            message: format!("failed to serialise defaults: {e}"),
        })?;
    composer.push_defaults(defaults);

    if let Some(path) = cli.config.clone().or_else(discover_config_file) {
        load_config_file(&path, &mut composer)?;
    }

    let env_values = collect_env_vars(env);
    if !env_values.is_null() {
        composer.push_environment(env_values);
    }

    let cli_overrides = build_cli_overrides(cli);
    if !cli_overrides.is_null() {
        composer.push_cli(cli_overrides);
    }

    let config =
        ProxyConfig::merge_from_layers(composer.layers()).map_err(ConfigError::OrthoConfig)?;
    config.patterns()?;

    debug!(
        steps_pattern = %config.steps_pattern,
        continuation_pattern = %config.continuation_pattern,
        "configuration loaded"
    );
    Ok(config)
}

/// Finds the first existing configuration file among the discovery candidates.
fn discover_config_file() -> Option<Utf8PathBuf> {
    let discovery = ConfigDiscovery::builder("bdd-proxy")
        .env_var("BDD_PROXY_CONFIG_PATH")
        .config_file_name("config.toml")
        .dotfile_name(".bdd-proxy.toml")
        .build();
    discovery
        .candidates()
        .into_iter()
        .filter(|p| p.exists())
        .find_map(|p| Utf8PathBuf::try_from(p).ok())
}

/// Reads a TOML file through `cap_std` and pushes it as the file layer.
fn load_config_file(path: &Utf8Path, composer: &mut MergeComposer) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().unwrap_or(path.as_str());

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        ConfigError::ParseError {
            message: format!("failed to open directory {parent}: {e}"),
        }
    })?;

    let content = dir
        .read_to_string(file_name)
        .map_err(|e| ConfigError::ParseError {
            message: format!("failed to read {path}: {e}"),
        })?;

    let value = toml::from_str::<Value>(&content).map_err(|e| ConfigError::ParseError {
        message: format!("failed to parse {path}: {e}"),
    })?;

    debug!(path = %path, "configuration file loaded");
    composer.push_file(value, Some(path.to_path_buf()));
    Ok(())
}

/// Collects the `BDD_PROXY_*` variables that are set into a JSON object.
fn collect_env_vars<E: Env>(env: &E) -> Value {
    let root: Map<String, Value> = ENV_VAR_SPECS
        .iter()
        .filter_map(|spec| {
            env.string(spec.env_var)
                .map(|raw| (spec.field.to_owned(), Value::String(raw)))
        })
        .collect();

    if root.is_empty() {
        Value::Null
    } else {
        Value::Object(root)
    }
}

/// Builds the CLI layer from the pattern flags.
fn build_cli_overrides(cli: &Cli) -> Value {
    let overrides: Map<String, Value> = [
        ("steps_pattern", cli.steps_pattern.as_ref()),
        ("continuation_pattern", cli.continuation_pattern.as_ref()),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field.to_owned(), Value::String(v.clone()))))
    .collect();

    if overrides.is_empty() {
        Value::Null
    } else {
        Value::Object(overrides)
    }
}
