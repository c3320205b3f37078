//! Host platform detection for output rendering.

/// Which wire format the launch command is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Batch command line for `cmd.exe`.
    Windows,
    /// NUL-delimited argument vector for POSIX shells.
    Unix,
}

impl Platform {
    /// Detect the host platform. Pure; callers decide once and thread the
    /// result through explicitly.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Separator between classpath entries.
    pub fn classpath_separator(self) -> char {
        match self {
            Platform::Windows => ';',
            Platform::Unix => ':',
        }
    }
}
