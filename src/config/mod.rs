//! Launcher configuration.
//!
//! An optional `launcher.toml` in the configuration directory supplies
//! defaults the environment does not: JVM heap size and extra flags, extra
//! child environment variables, and an override for the command-echo toggle.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{JvmConfig, LauncherConfig};
