//! Flag registry: single source of truth for the submission option grammar.

use crate::args::{CLASS, DRIVER_MEMORY, USAGE_ERROR, VERBOSE};

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g. `--verbose`).
    NoValue,
    /// Requires exactly one value (e.g. `--master <URL>`).
    RequiresValue,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Primary long form (e.g. `--class`).
    pub long: &'static str,
    /// Optional short form (e.g. `-v`).
    pub short: Option<&'static str>,
    /// Does it take a value?
    pub arity: FlagArity,
    /// Human-readable description, for diagnostics.
    pub description: &'static str,
}

impl FlagDef {
    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.long || self.short == Some(arg)
    }
}

/// Build the complete submission flag registry.
pub fn submit_flag_registry() -> Vec<FlagDef> {
    vec![
        FlagDef {
            long: CLASS,
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Application main class",
        },
        FlagDef {
            long: "--conf",
            short: Some("-c"),
            arity: FlagArity::RequiresValue,
            description: "Arbitrary configuration property (key=value)",
        },
        FlagDef {
            long: "--deploy-mode",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Where to run the driver (client or cluster)",
        },
        FlagDef {
            long: "--driver-class-path",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Extra classpath entries for the driver",
        },
        FlagDef {
            long: "--driver-java-options",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Extra JVM options for the driver",
        },
        FlagDef {
            long: DRIVER_MEMORY,
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Driver heap size",
        },
        FlagDef {
            long: "--executor-memory",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Executor heap size",
        },
        FlagDef {
            long: "--files",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Files to place in the working directory",
        },
        FlagDef {
            long: "--jars",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Jars to add to the driver and executor classpaths",
        },
        FlagDef {
            long: "--master",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Cluster manager URL",
        },
        FlagDef {
            long: "--name",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Application name",
        },
        FlagDef {
            long: "--properties-file",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Path to a file with extra properties",
        },
        FlagDef {
            long: "--py-files",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Python files to place on PYTHONPATH",
        },
        FlagDef {
            long: "--queue",
            short: None,
            arity: FlagArity::RequiresValue,
            description: "Scheduler queue to submit to",
        },
        FlagDef {
            long: "--help",
            short: Some("-h"),
            arity: FlagArity::NoValue,
            description: "Show usage",
        },
        FlagDef {
            long: "--supervise",
            short: None,
            arity: FlagArity::NoValue,
            description: "Restart the driver on failure",
        },
        FlagDef {
            long: USAGE_ERROR,
            short: None,
            arity: FlagArity::NoValue,
            description: "Print usage and exit non-zero",
        },
        FlagDef {
            long: VERBOSE,
            short: Some("-v"),
            arity: FlagArity::NoValue,
            description: "Verbose output",
        },
        FlagDef {
            long: "--version",
            short: None,
            arity: FlagArity::NoValue,
            description: "Show version",
        },
    ]
}
