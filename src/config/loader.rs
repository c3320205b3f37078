use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::builder::maybe_conf_dir;
use crate::config::types::LauncherConfig;

/// Name of the optional configuration file inside the conf directory.
const CONFIG_FILE: &str = "launcher.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LauncherConfig {
    /// Path of the configuration file, when a conf directory can be
    /// determined at all (`SPARK_CONF_DIR`, else `conf/` under
    /// `SPARK_HOME`).
    pub fn config_path() -> Option<PathBuf> {
        maybe_conf_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Load configuration from the conf directory.
    ///
    /// No conf directory or no file means defaults; an unreadable or
    /// unparsable file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
print_launch_command = true

[jvm]
memory = "2g"
options = ["-XX:+UseG1GC"]

[env]
SPARK_LOCAL_DIRS = "/tmp/scratch"
"#,
        )
        .unwrap();

        let config = LauncherConfig::load_from(&path).unwrap();
        assert_eq!(config.print_launch_command, Some(true));
        assert_eq!(config.jvm.memory.as_deref(), Some("2g"));
        assert_eq!(config.jvm.options, vec!["-XX:+UseG1GC".to_string()]);
        assert_eq!(
            config.env.get("SPARK_LOCAL_DIRS").map(String::as_str),
            Some("/tmp/scratch")
        );
    }

    #[test]
    fn empty_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "").unwrap();

        let config = LauncherConfig::load_from(&path).unwrap();
        assert_eq!(config.print_launch_command, None);
        assert!(config.jvm.memory.is_none());
        assert!(config.jvm.options.is_empty());
        assert!(config.env.is_empty());
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "print_launch_command = [not toml").unwrap();

        let err = LauncherConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = LauncherConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
