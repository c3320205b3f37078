//! Submission argument parser: raw args against the flag registry.

use thiserror::Error;

use crate::args::registry::{FlagArity, FlagDef};

/// Arguments that cannot be reconciled with the submission option grammar.
///
/// Raised only while constructing the submit builder; the entry point
/// recovers from it exactly once via the usage-error fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitArgsError {
    #[error("Unrecognized option: {option}")]
    UnrecognizedOption { option: String },

    #[error("Missing argument for option: {option}")]
    MissingOptionValue { option: String },
}

/// Structured view of a submission argument list.
///
/// Options are normalized to their long form and kept in order of
/// appearance. The first non-option token is the primary resource (the
/// application jar); everything after it is opaque to the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSubmitArgs {
    pub options: Vec<(String, Option<String>)>,
    pub primary_resource: Option<String>,
    pub app_args: Vec<String>,
}

impl ParsedSubmitArgs {
    /// Value of the last occurrence of a value-bearing option.
    pub fn option_value(&self, long: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|(flag, _)| flag == long)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Whether a boolean flag was present.
    pub fn has_flag(&self, long: &str) -> bool {
        self.options.iter().any(|(flag, _)| flag == long)
    }
}

/// Parse a submission argument list against the registry.
///
/// Accepts both `--opt value` and `--opt=value` spellings. A value-bearing
/// option consumes the next token verbatim, so values may begin with a dash.
pub fn parse_submit_args(
    raw: &[String],
    registry: &[FlagDef],
) -> Result<ParsedSubmitArgs, SubmitArgsError> {
    let mut parsed = ParsedSubmitArgs::default();
    let mut iter = raw.iter();

    while let Some(arg) = iter.next() {
        if !arg.starts_with('-') {
            parsed.primary_resource = Some(arg.clone());
            parsed.app_args = iter.cloned().collect();
            break;
        }

        let (flag, inline_value) = split_eq_form(arg);
        let Some(def) = registry.iter().find(|d| d.matches(flag)) else {
            return Err(SubmitArgsError::UnrecognizedOption { option: arg.clone() });
        };

        let value = match def.arity {
            FlagArity::NoValue => {
                if inline_value.is_some() {
                    return Err(SubmitArgsError::UnrecognizedOption { option: arg.clone() });
                }
                None
            }
            FlagArity::RequiresValue => match inline_value {
                Some(value) => Some(value.to_string()),
                None => {
                    let value = iter.next().ok_or_else(|| {
                        SubmitArgsError::MissingOptionValue {
                            option: def.long.to_string(),
                        }
                    })?;
                    Some(value.clone())
                }
            },
        };

        parsed.options.push((def.long.to_string(), value));
    }

    Ok(parsed)
}

/// Split `--opt=value` into flag and inline value. Short forms never carry
/// an inline value.
fn split_eq_form(arg: &str) -> (&str, Option<&str>) {
    if arg.starts_with("--") {
        if let Some((flag, value)) = arg.split_once('=') {
            return (flag, Some(value));
        }
    }
    (arg, None)
}
