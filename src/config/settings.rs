//! Settings loaded from the environment

use super::defaults::{
    ENV_IFS, ENV_LINETEXT, ENV_MODULES, ENV_NERDFONTS, ENV_NO_COLOR, ENV_TERM, FALSY_VALUES,
    PLAIN_TERM,
};
use fo_core::constants::DEFAULT_IFS;
use fo_core::{LabelMode, Selection};
use fo_sources::HostFacts;

/// Process-wide settings, computed once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Separator for the module allow-list
    pub ifs: String,
    /// Allow-list of module names; `None` shows the default modules
    pub modules: Option<String>,
    /// Label with nerd font symbols instead of names
    pub nerd_fonts: bool,
    /// Repeat unit of the separator line
    pub line_text: String,
    /// Emit ANSI styling
    pub color: bool,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Load settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let term_is_plain = lookup(ENV_TERM)
            .map(|term| term.eq_ignore_ascii_case(PLAIN_TERM))
            .unwrap_or(false);
        let nerd_fonts = env_bool(lookup(ENV_NERDFONTS).as_deref()) && !term_is_plain;

        let settings = Self {
            ifs: lookup(ENV_IFS).unwrap_or_else(|| DEFAULT_IFS.to_string()),
            modules: lookup(ENV_MODULES),
            nerd_fonts,
            line_text: lookup(ENV_LINETEXT).unwrap_or_else(|| fo_sources::DEFAULT_LINE_TEXT.to_string()),
            color: lookup(ENV_NO_COLOR).map_or(true, |v| v.is_empty()),
        };
        log::debug!("Loaded settings: {:?}", settings);
        settings
    }

    pub fn label_mode(&self) -> LabelMode {
        if self.nerd_fonts {
            LabelMode::Symbol
        } else {
            LabelMode::Name
        }
    }

    pub fn selection(&self) -> Selection {
        Selection::from_list(self.modules.clone(), Some(self.ifs.clone()))
    }

    /// Apply the settings that affect host facts
    pub fn apply_to(&self, facts: HostFacts) -> HostFacts {
        facts.with_line_text(self.line_text.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Interpret a boolean-ish variable; unset and [`FALSY_VALUES`] are false
pub fn env_bool(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !FALSY_VALUES.iter().any(|f| v.eq_ignore_ascii_case(f)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.ifs, " ");
        assert_eq!(s.modules, None);
        assert!(!s.nerd_fonts);
        assert_eq!(s.line_text, "\u{2500}");
        assert!(s.color);
        assert_eq!(s.label_mode(), LabelMode::Name);
        assert_eq!(s.selection(), Selection::Default);
    }

    #[test]
    fn test_env_bool() {
        assert!(!env_bool(None));
        for falsy in ["", "n", "N", "no", "No", "false", "FALSE", "0"] {
            assert!(!env_bool(Some(falsy)), "{falsy:?} should be false");
        }
        for truthy in ["1", "y", "yes", "true", "on", "nope"] {
            assert!(env_bool(Some(truthy)), "{truthy:?} should be true");
        }
    }

    #[test]
    fn test_nerd_fonts_disabled_on_linux_console() {
        assert_eq!(settings(&[("FO_NERDFONTS", "1")]).label_mode(), LabelMode::Symbol);
        assert_eq!(
            settings(&[("FO_NERDFONTS", "1"), ("TERM", "LINUX")]).label_mode(),
            LabelMode::Name
        );
        assert_eq!(
            settings(&[("FO_NERDFONTS", "yes"), ("TERM", "xterm-256color")]).label_mode(),
            LabelMode::Symbol
        );
    }

    #[test]
    fn test_module_selection() {
        let s = settings(&[("FO_MODULES", "os:kernel"), ("FO_IFS", ":")]);
        assert_eq!(
            s.selection(),
            Selection::Only {
                list: "os:kernel".into(),
                ifs: ":".into()
            }
        );
    }

    #[test]
    fn test_no_color() {
        assert!(!settings(&[("NO_COLOR", "1")]).color);
        assert!(settings(&[("NO_COLOR", "")]).color);
    }
}
