//! Submission option grammar.
//!
//! The grammar lives in a declarative registry; the parser walks a raw
//! argument list against it and either produces a structured view or fails
//! with [`SubmitArgsError`]. A separate best-effort pass recovers just the
//! `--class` value from argument lists the full parser rejects.

mod parser;
mod recovery;
mod registry;

pub use parser::{parse_submit_args, ParsedSubmitArgs, SubmitArgsError};
pub use recovery::recover_main_class;
pub use registry::{submit_flag_registry, FlagArity, FlagDef};

/// Long form of the option naming the application's main class.
pub const CLASS: &str = "--class";

/// Long form of the option selecting the driver JVM heap size.
pub const DRIVER_MEMORY: &str = "--driver-memory";

/// Long form of the verbose toggle.
pub const VERBOSE: &str = "--verbose";

/// Sentinel appended on the recovery path. The submission entry class
/// reacts to it by printing context-aware usage text and exiting non-zero.
pub const USAGE_ERROR: &str = "--usage-error";
