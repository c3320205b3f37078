use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration container. Every key is optional; an absent file
/// means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Overrides the `SPARK_PRINT_LAUNCH_COMMAND` signal when present.
    #[serde(default)]
    pub print_launch_command: Option<bool>,

    #[serde(default)]
    pub jvm: JvmConfig,

    /// Extra environment variables injected into the launched process.
    /// Kept sorted by name so rendering stays reproducible.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// JVM defaults applied when neither options nor environment decide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JvmConfig {
    /// Default heap size (e.g. `"1g"`).
    #[serde(default)]
    pub memory: Option<String>,

    /// Extra JVM flags, inserted after the heap setting.
    #[serde(default)]
    pub options: Vec<String>,
}

impl LauncherConfig {
    /// Child environment pairs from the `[env]` table, in name order.
    pub fn child_env_pairs(&self) -> Vec<(String, String)> {
        self.env
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Whether the composed command line is echoed to stderr.
    ///
    /// The config key wins when set; the default honors the
    /// `SPARK_PRINT_LAUNCH_COMMAND` signal (enabled when non-empty).
    pub fn print_launch_command_enabled(&self) -> bool {
        self.print_launch_command.unwrap_or_else(|| {
            crate::builder::non_empty_var("SPARK_PRINT_LAUNCH_COMMAND").is_some()
        })
    }
}
