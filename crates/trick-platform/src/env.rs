//! Environment variable sets and `${VAR}` expansion

use std::collections::HashMap;

/// A set of environment variables used to specialize configured paths.
///
/// Installation homes may carry `${VAR}` references that are only
/// meaningful at build time (for example `${SIM_BASE}/trick`). The build
/// layer collects the effective variables for a run and hands them here
/// for expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    /// Create an empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the process environment.
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Set a variable, replacing any prior value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of variables in the set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over the variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Substitute `${VAR}` references in `input` with values from this set.
    ///
    /// References to variables not present in the set are left as-is, so
    /// expansion is pure and total. Plain `$VAR` (no braces) is not a
    /// reference.
    pub fn expand(&self, input: &str) -> String {
        let mut result = input.to_string();
        for (key, value) in &self.vars {
            let pattern = format!("${{{}}}", key);
            if result.contains(&pattern) {
                result = result.replace(&pattern, value);
            }
        }
        result
    }
}

impl FromIterator<(String, String)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for EnvVars {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
