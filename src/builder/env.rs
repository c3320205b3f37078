//! Builder for the child process environment.

/// Ordered set of environment variables injected into the launched process.
///
/// Keys are unique. Writing an existing key replaces its value but keeps the
/// original position, so rendering order stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct EnvSet {
    vars: Vec<(String, String)>,
}

impl EnvSet {
    /// Create an empty environment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.vars.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.vars[index].1 = value,
            None => self.vars.push((name, value)),
        }
        self
    }

    /// Add a batch of variables (e.g. the configured `[env]` table).
    pub fn with_extra<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in extra {
            self = self.set(name, value);
        }
        self
    }

    /// Build the final variable list.
    pub fn build(self) -> Vec<(String, String)> {
        self.vars
    }
}
