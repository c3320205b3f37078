//! Platform-specific serialization of a launch command.
//!
//! The Unix form is an argument vector: callers print each token followed by
//! a single NUL byte, and the consuming script splits on NUL. The Windows
//! form is one batch-quoted command line executed verbatim by `cmd.exe`.

/// Render a command line for execution from a Windows batch script.
///
/// Environment assignments come first, chained with `&&`, values verbatim.
/// Every command token is batch-quoted and followed by one space; the
/// trailing space is part of the stable output shape.
pub fn render_windows(cmd: &[String], env: &[(String, String)]) -> String {
    let mut line = String::new();
    for (name, value) in env {
        line.push_str(&format!("set {name}={value}"));
        line.push_str(" && ");
    }
    for arg in cmd {
        line.push_str(&quote_for_batch_script(arg));
        line.push(' ');
    }
    line
}

/// Render a command for execution from a POSIX shell.
///
/// With no environment to inject the command is returned unchanged. Otherwise
/// the `env` utility carries the assignments, so the result stays a plain
/// argument vector and never goes through a shell interpreter.
pub fn render_unix(cmd: Vec<String>, env: &[(String, String)]) -> Vec<String> {
    if env.is_empty() {
        return cmd;
    }

    let mut wrapped = Vec::with_capacity(1 + env.len() + cmd.len());
    wrapped.push("env".to_string());
    for (name, value) in env {
        wrapped.push(format!("{name}={value}"));
    }
    wrapped.extend(cmd);
    wrapped
}

/// Quote an argument for a batch script.
///
/// Tokens without batch-significant characters pass through bare. Otherwise
/// the token is wrapped in double quotes with embedded quotes doubled, which
/// is how `cmd.exe` escapes a quote. A trailing backslash is doubled so it
/// cannot swallow the closing quote.
pub fn quote_for_batch_script(arg: &str) -> String {
    let needs_quotes = arg
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '=' | ',' | ';'));
    if !needs_quotes {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    if arg.ends_with('\\') {
        quoted.push('\\');
    }
    quoted.push('"');
    quoted
}
