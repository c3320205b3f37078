//! Launch orchestration.
//!
//! Extracts the class name, selects a builder, runs the usage-error recovery
//! path when the submission grammar rejects its arguments, and dispatches to
//! the platform serializer.

use crate::args::{recover_main_class, CLASS, USAGE_ERROR};
use crate::builder::{ClassCommandBuilder, CommandBuilder, SubmitCommandBuilder, SUBMIT_CLASS};
use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::platform::Platform;
use crate::render::{render_unix, render_windows};

/// Separator line printed under the echoed command.
const ECHO_SEPARATOR: &str = "========================================";

/// The serialized launch command, ready to write to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCommand {
    /// Single batch line for `cmd.exe`; written with a trailing newline.
    Batch(String),
    /// Argument vector; each token is written followed by one NUL byte.
    ArgVector(Vec<String>),
}

/// Compose and serialize the launch command for `raw_args`.
///
/// stdout is untouched; the caller writes the returned payload. stderr
/// receives the human-readable command echo (when enabled) and the failure
/// diagnostic for rejected submission arguments.
pub fn run(
    mut raw_args: Vec<String>,
    platform: Platform,
    config: &LauncherConfig,
) -> Result<RenderedCommand, LauncherError> {
    if raw_args.is_empty() {
        return Err(LauncherError::MissingClassName);
    }
    let class_name = raw_args.remove(0);
    let args = raw_args;

    let mut echo_command = config.print_launch_command_enabled();

    let builder = if class_name == SUBMIT_CLASS {
        match SubmitCommandBuilder::new(args.clone()) {
            Ok(builder) => CommandBuilder::Submit(builder),
            Err(err) => {
                echo_command = false;
                eprintln!("Error: {err}");
                eprintln!();

                let help = usage_error_args(&args);
                tracing::debug!(args = ?help, "rebuilding submission as usage error");

                // The recovery list is well-formed; a failure here is a
                // defect, not a user error, and propagates as one.
                CommandBuilder::Submit(SubmitCommandBuilder::new(help)?)
            }
        }
    } else {
        tracing::debug!(class = %class_name, "using generic class builder");
        CommandBuilder::Class(ClassCommandBuilder::new(class_name, args))
    };

    let command = builder.build_command(config, platform)?;

    if echo_command {
        eprintln!("Spark Command: {}", command.args.join(" "));
        eprintln!("{ECHO_SEPARATOR}");
    }

    Ok(match platform {
        Platform::Windows => RenderedCommand::Batch(render_windows(&command.args, &command.env)),
        Platform::Unix => RenderedCommand::ArgVector(render_unix(command.args, &command.env)),
    })
}

/// Replacement argument list for a rejected submission: the recovered
/// `--class` pair when one is found, always followed by the usage-error
/// sentinel. Well-formed under the submission grammar by construction.
pub fn usage_error_args(args: &[String]) -> Vec<String> {
    let mut help = Vec::new();
    if let Some(recovered) = recover_main_class(args) {
        help.push(CLASS.to_string());
        help.push(recovered);
    }
    help.push(USAGE_ERROR.to_string());
    help
}
