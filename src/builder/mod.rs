//! Command builder strategies.
//!
//! Two variants, selected from the requested class name: the submit variant
//! parses the job-submission grammar and can reject its arguments; the
//! generic variant treats all trailing arguments as opaque pass-through to
//! the target class. A builder is constructed once per invocation and
//! consumed by [`CommandBuilder::build_command`].

mod class;
mod env;
mod jvm;
mod submit;

pub use class::ClassCommandBuilder;
pub use env::EnvSet;
pub use jvm::{classpath, java_executable, resolve_memory, DEFAULT_MEMORY};
pub use submit::SubmitCommandBuilder;

pub(crate) use jvm::{maybe_conf_dir, non_empty_var};

use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::platform::Platform;

/// Class name that selects the submit builder.
pub const SUBMIT_CLASS: &str = "org.apache.spark.deploy.SparkSubmit";

/// The final payload to serialize: command tokens plus environment variables
/// the wrapper script must inject before executing them. The first token is
/// the program path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// Builder selected for one invocation.
#[derive(Debug)]
pub enum CommandBuilder {
    Submit(SubmitCommandBuilder),
    Class(ClassCommandBuilder),
}

impl CommandBuilder {
    /// Produce the final command, consuming the builder.
    pub fn build_command(
        self,
        config: &LauncherConfig,
        platform: Platform,
    ) -> Result<LaunchCommand, LauncherError> {
        match self {
            CommandBuilder::Submit(builder) => builder.build_command(config, platform),
            CommandBuilder::Class(builder) => builder.build_command(config, platform),
        }
    }
}
