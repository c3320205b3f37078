//! Builder for the job-submission entry class.

use crate::args::{
    parse_submit_args, submit_flag_registry, ParsedSubmitArgs, SubmitArgsError, DRIVER_MEMORY,
    VERBOSE,
};
use crate::builder::env::EnvSet;
use crate::builder::jvm::{jvm_invocation, non_empty_var, resolve_memory};
use crate::builder::{LaunchCommand, SUBMIT_CLASS};
use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::platform::Platform;

/// Builds the JVM invocation for the job-submission entry class.
///
/// Construction parses the argument list against the submission grammar and
/// is the launcher's only recoverable failure point. The raw argument list
/// is passed through to the entry class unchanged, which re-parses it; the
/// parsed view is used for validation and driver-memory resolution only.
#[derive(Debug)]
pub struct SubmitCommandBuilder {
    raw_args: Vec<String>,
    parsed: ParsedSubmitArgs,
}

impl SubmitCommandBuilder {
    pub fn new(args: Vec<String>) -> Result<Self, SubmitArgsError> {
        let parsed = parse_submit_args(&args, &submit_flag_registry())?;
        Ok(Self {
            raw_args: args,
            parsed,
        })
    }

    pub fn build_command(
        self,
        config: &LauncherConfig,
        platform: Platform,
    ) -> Result<LaunchCommand, LauncherError> {
        if self.parsed.has_flag(VERBOSE) {
            tracing::debug!(
                resource = ?self.parsed.primary_resource,
                options = self.parsed.options.len(),
                "verbose submission"
            );
        }

        let memory = resolve_memory(&[
            self.parsed.option_value(DRIVER_MEMORY).map(str::to_string),
            non_empty_var("SPARK_DRIVER_MEMORY"),
            config.jvm.memory.clone(),
        ]);

        let mut args = jvm_invocation(&memory, config, platform)?;
        args.push(SUBMIT_CLASS.to_string());
        args.extend(self.raw_args);

        Ok(LaunchCommand {
            args,
            env: EnvSet::new().with_extra(config.child_env_pairs()).build(),
        })
    }
}
