//! Command-line argument definitions for bdd-proxy.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Command-line interface for bdd-proxy.
#[derive(Debug, Parser)]
#[command(name = "bdd-proxy")]
#[command(
    author,
    version,
    about = "Inspect how step calls resolve under a given/when/then vocabulary"
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Alternation of step kinds, e.g. `given|when|then`.
    #[arg(long, global = true)]
    pub steps_pattern: Option<String>,

    /// Alternation of continuation tokens, e.g. `and|but`.
    #[arg(long, global = true)]
    pub continuation_pattern: Option<String>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the lookup key each description normalises to.
    Normalize(NormalizeArgs),

    /// Report whether each token is a step kind, a continuation or unknown.
    Classify(ClassifyArgs),
}

/// Arguments for the `normalize` subcommand.
#[derive(Debug, Parser)]
pub struct NormalizeArgs {
    /// Descriptions to normalise.
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the `classify` subcommand.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Call tokens to classify.
    #[arg(required = true)]
    pub tokens: Vec<String>,
}
