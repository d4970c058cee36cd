//! fo: a small system summary printer for the terminal
//!
//! This library wires the pieces together:
//! - Settings loaded from `FO_*` environment variables
//! - Host facts and built-in modules from `fo-sources`
//! - Formatting, selection and ANSI rendering from `fo-core`

pub mod config;

pub use config::Settings;
pub use fo_core::RunSummary;
pub use fo_sources::{Environment, HostFacts};

use fo_core::{LabelBuilder, ModuleRunner};
use std::io::Write;

/// Print every selected built-in module to `out`, one line at a time.
pub fn run<W: Write>(settings: &Settings, facts: &HostFacts, out: &mut W) -> std::io::Result<RunSummary> {
    let registry = fo_sources::register_all();
    let labels = LabelBuilder::new(settings.label_mode());
    let mut runner = ModuleRunner::new(settings.selection(), labels, settings.color);
    runner.run(&registry, facts, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fo_sources::{Account, Identity, MemoryStats};
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        Settings::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
    }

    fn facts(settings: &Settings) -> HostFacts {
        let env = Environment::from_pairs([("EDITOR", "vim"), ("XDG_CURRENT_DESKTOP", "KDE")]);
        settings
            .apply_to(HostFacts::new(env))
            .with_identity(Identity {
                hostname: "box".into(),
                os_type: "Linux".into(),
                kernel_release: "6.9.3".into(),
                arch: "x86_64".into(),
            })
            .with_account(Account {
                name: "bob".into(),
                shell: "/bin/bash".into(),
            })
            .with_memory(MemoryStats {
                total_memory: 4 * 1024 * 1024 * 1024,
                used_memory: 1024 * 1024 * 1024,
                total_swap: 1024,
                used_swap: 0,
            })
            .with_uptime(65)
    }

    #[test]
    fn test_selected_modules_in_registry_order() {
        let settings = settings(&[
            ("FO_MODULES", "uptime header editor kernel line ram swap de"),
            ("FO_LINETEXT", "-"),
            ("NO_COLOR", "1"),
        ]);
        let facts = facts(&settings);
        let mut out = Vec::new();
        let summary = run(&settings, &facts, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "bob@box\n\
             -------\n\
             kernel   Linux 6.9.3\n\
             uptime   1m 5s\n\
             ram      1 Gi / 4 Gi\n\
             swap     0 / 1 ki\n\
             de       KDE Plasma\n\
             editor   vim\n"
        );
        assert_eq!(summary.printed, 8);
    }

    #[test]
    fn test_symbol_mode_with_color() {
        let settings = settings(&[("FO_MODULES", "arch"), ("FO_NERDFONTS", "true")]);
        let facts = facts(&settings);
        let mut out = Vec::new();
        run(&settings, &facts, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[1m\x1b[38;5;1m\u{f4bc}\x1b[0m  \x1b[0mx86_64\x1b[0m\n"
        );
    }

    #[test]
    fn test_failed_module_does_not_stop_later_ones() {
        // the hidden-by-default modules plus one with no data
        let settings = settings(&[("FO_MODULES", "username de hostname"), ("NO_COLOR", "1")]);
        let facts = settings
            .apply_to(HostFacts::new(Environment::default()))
            .with_identity(Identity {
                hostname: "box".into(),
                os_type: "Linux".into(),
                kernel_release: "6.9.3".into(),
                arch: "x86_64".into(),
            })
            .with_account(None::<Account>);
        let mut out = Vec::new();
        let summary = run(&settings, &facts, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "hostname box\n");
        assert_eq!(summary.printed, 1);
        assert_eq!(summary.empty, 2);
    }
}
