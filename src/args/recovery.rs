//! Best-effort class-name recovery.
//!
//! Used after the full parser has rejected a submission argument list, to
//! build a usage-error command that still names the class the user meant.
//! Recovery has no error channel at all: anything it cannot make sense of
//! is skipped, and the scan stops at the first `--class` match.

use crate::args::CLASS;

/// Scan an argument list for the `--class` option.
///
/// Returns `None` when the option is absent or its value is missing.
pub fn recover_main_class(args: &[String]) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == CLASS {
            return iter.next().cloned();
        }
        if let Some(value) = arg.strip_prefix(CLASS).and_then(|rest| rest.strip_prefix('=')) {
            return (!value.is_empty()).then(|| value.to_string());
        }
    }
    None
}
