//! `bdd-proxy` command-line entry point.
//!
//! The binary inspects how a vocabulary treats descriptions and call tokens.
//! It uses `eyre` at the application boundary, converting domain errors into
//! human-readable reports.
//!
//! Configuration is loaded with layered precedence via `OrthoConfig`:
//! 1. Application defaults
//! 2. Configuration file (`~/.config/bdd-proxy/config.toml` or path from `BDD_PROXY_CONFIG_PATH`)
//! 3. Environment variables (`BDD_PROXY_*`)
//! 4. Command-line arguments

use bdd_proxy::config::{ClassifyArgs, Cli, Commands, NormalizeArgs, ProxyConfig, load_config};
use bdd_proxy::error::Result as ProxyResult;
use bdd_proxy::normalize::normalize_key;
use clap::Parser;
use eyre::{Report, Result as EyreResult};
use mockable::DefaultEnv;
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() -> EyreResult<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli, &DefaultEnv::new()).map_err(Report::from)?;

    run(&cli, &config).map_err(Report::from)
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute the CLI command, returning domain-specific errors.
fn run(cli: &Cli, config: &ProxyConfig) -> ProxyResult<()> {
    match &cli.command {
        Commands::Normalize(args) => {
            print_normalized(args);
            Ok(())
        }
        Commands::Classify(args) => classify_tokens(config, args),
    }
}

/// Print the normalised key of each description, one per line.
#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn print_normalized(args: &NormalizeArgs) {
    for text in &args.text {
        println!("{}", normalize_key(text));
    }
}

/// Print each token with its classification under the effective vocabulary.
#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn classify_tokens(config: &ProxyConfig, args: &ClassifyArgs) -> ProxyResult<()> {
    let patterns = config.patterns()?;
    for token in &args.tokens {
        println!("{token}\t{}", patterns.classify(token).as_str());
    }
    Ok(())
}
