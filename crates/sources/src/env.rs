//! Snapshot of the environment variables providers care about

use std::collections::HashMap;

/// Variables captured by [`Environment::capture`]
pub const CAPTURED_VARS: &[&str] = &[
    "EDITOR",
    "XDG_CURRENT_DESKTOP",
    "DESKTOP_SESSION",
    "TDE_FULL_SESSION",
    "MATE_DESKTOP_SESSION_ID",
    "GNOME_DESKTOP_SESSION_ID",
];

/// Immutable copy of selected environment variables.
///
/// Taking a snapshot up front lets providers hand out text borrowed from it
/// and keeps tests independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture [`CAPTURED_VARS`] from the process environment
    pub fn capture() -> Self {
        Self::from_lookup(|name| {
            std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Capture [`CAPTURED_VARS`] through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = CAPTURED_VARS
            .iter()
            .filter_map(|&name| lookup(name).map(|value| (name.to_string(), value)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs
    pub fn from_pairs<'p>(pairs: impl IntoIterator<Item = (&'p str, &'p str)>) -> Self {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}
