//! Builder for arbitrary internal classes.

use crate::builder::env::EnvSet;
use crate::builder::jvm::{jvm_invocation, non_empty_var, resolve_memory};
use crate::builder::LaunchCommand;
use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::platform::Platform;

/// Builds the JVM invocation for any class other than the submission entry
/// point (masters, workers, history servers and the like). All trailing
/// arguments are opaque and forwarded to the class verbatim.
#[derive(Debug)]
pub struct ClassCommandBuilder {
    class_name: String,
    class_args: Vec<String>,
}

impl ClassCommandBuilder {
    pub fn new(class_name: String, class_args: Vec<String>) -> Self {
        Self {
            class_name,
            class_args,
        }
    }

    pub fn build_command(
        self,
        config: &LauncherConfig,
        platform: Platform,
    ) -> Result<LaunchCommand, LauncherError> {
        let memory = resolve_memory(&[
            non_empty_var("SPARK_DAEMON_MEMORY"),
            config.jvm.memory.clone(),
        ]);

        let mut args = jvm_invocation(&memory, config, platform)?;
        args.push(self.class_name);
        args.extend(self.class_args);

        Ok(LaunchCommand {
            args,
            env: EnvSet::new().with_extra(config.child_env_pairs()).build(),
        })
    }
}
