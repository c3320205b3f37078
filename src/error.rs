//! Top-level error taxonomy for the launcher.

use thiserror::Error;

use crate::args::SubmitArgsError;
use crate::config::ConfigError;

/// Errors surfaced by [`crate::launch::run`].
///
/// Only [`SubmitArgsError`] is ever recovered from, and only at the single
/// point where the submit builder is first constructed. Everything else
/// terminates the run.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The launcher was invoked with no arguments at all.
    #[error("Not enough arguments: missing class name.")]
    MissingClassName,

    /// Submission arguments that could not be reconciled with the option
    /// grammar.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] SubmitArgsError),

    /// The install root is required for classpath assembly but was not set.
    #[error("Install directory not found; set the SPARK_HOME environment variable.")]
    InstallDirNotSet,

    /// Launcher configuration file was present but unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
