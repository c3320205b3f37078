//! JVM and install-layout discovery.
//!
//! All process-environment reads used during command assembly live here; the
//! assembly itself works over explicit inputs so it stays testable.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::platform::Platform;

/// Default JVM heap size when neither options, environment, nor
/// configuration decide.
pub const DEFAULT_MEMORY: &str = "1g";

/// Read an environment variable, treating empty values as unset.
pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Path of the `java` executable to launch.
///
/// `JAVA_HOME` wins when set; otherwise the bare name is emitted and `PATH`
/// resolution is left to the executing shell.
pub fn java_executable() -> String {
    match non_empty_var("JAVA_HOME") {
        Some(home) => Path::new(&home)
            .join("bin")
            .join("java")
            .to_string_lossy()
            .into_owned(),
        None => "java".to_string(),
    }
}

/// Install root, required for classpath assembly.
pub(crate) fn install_dir() -> Result<PathBuf, LauncherError> {
    non_empty_var("SPARK_HOME")
        .map(PathBuf::from)
        .ok_or(LauncherError::InstallDirNotSet)
}

/// Configuration directory, when one can be determined at all:
/// `SPARK_CONF_DIR` first, then `conf/` under the install root.
pub(crate) fn maybe_conf_dir() -> Option<PathBuf> {
    non_empty_var("SPARK_CONF_DIR")
        .map(PathBuf::from)
        .or_else(|| non_empty_var("SPARK_HOME").map(|home| Path::new(&home).join("conf")))
}

/// Classpath entries for a layout: the configuration directory first, then
/// the JVM wildcard over the bundled jars. The wildcard is a literal token;
/// expansion is the JVM's job, not the shell's.
fn classpath_entries(conf_dir: &Path, install_dir: &Path) -> Vec<String> {
    vec![
        conf_dir.to_string_lossy().into_owned(),
        install_dir
            .join("jars")
            .join("*")
            .to_string_lossy()
            .into_owned(),
    ]
}

fn join_classpath(entries: &[String], platform: Platform) -> String {
    entries.join(&platform.classpath_separator().to_string())
}

/// Assemble the launch classpath from the process environment.
pub fn classpath(platform: Platform) -> Result<String, LauncherError> {
    let install = install_dir()?;
    let conf = non_empty_var("SPARK_CONF_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| install.join("conf"));
    let joined = join_classpath(&classpath_entries(&conf, &install), platform);
    tracing::debug!(classpath = %joined, "assembled classpath");
    Ok(joined)
}

/// First candidate holding a non-empty value, else [`DEFAULT_MEMORY`].
pub fn resolve_memory(candidates: &[Option<String>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MEMORY.to_string())
}

/// Shared head of every JVM invocation:
/// `java -cp <classpath> -Xmx<memory> [configured options...]`.
pub(crate) fn jvm_invocation(
    memory: &str,
    config: &LauncherConfig,
    platform: Platform,
) -> Result<Vec<String>, LauncherError> {
    let mut args = vec![
        java_executable(),
        "-cp".to_string(),
        classpath(platform)?,
        format!("-Xmx{memory}"),
    ];
    args.extend(config.jvm.options.iter().cloned());
    Ok(args)
}
