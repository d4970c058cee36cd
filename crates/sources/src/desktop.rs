//! Desktop environment / window manager detection

use crate::env::Environment;

/// Substring rules checked in order against the desktop name
enum Rule {
    /// Any of the needles, case-insensitive
    Contains(&'static [&'static str]),
    /// A marker variable is set, or any needle matches
    SetOrContains(&'static str, &'static [&'static str]),
}

const RULES: &[(Rule, &str)] = &[
    (Rule::Contains(&["kde", "plasma"]), "KDE Plasma"),
    (Rule::Contains(&["cinnamon"]), "Cinnamon"),
    (Rule::Contains(&["lxqt"]), "LXQt"),
    (Rule::Contains(&["lxde"]), "LXDE"),
    (Rule::Contains(&["deepin"]), "Deepin"),
    (Rule::Contains(&["enlightenment"]), "Enlightenment"),
    (Rule::Contains(&["budgie"]), "Budgie"),
    (Rule::Contains(&["pantheon"]), "Pantheon"),
    (Rule::SetOrContains("TDE_FULL_SESSION", &[]), "Trinity"),
    (Rule::SetOrContains("MATE_DESKTOP_SESSION_ID", &["mate"]), "MATE"),
    (Rule::Contains(&["xfce"]), "Xfce"),
    (Rule::SetOrContains("GNOME_DESKTOP_SESSION_ID", &["unity", "gnome"]), "GNOME"),
    (Rule::Contains(&["xfwm"]), "Xfwm"),
    (Rule::Contains(&["openbox"]), "Openbox"),
    (Rule::Contains(&["i3"]), "i3"),
    (Rule::Contains(&["bspwm"]), "bspwm"),
    (Rule::Contains(&["mutter"]), "Mutter"),
    (Rule::Contains(&["sawfish"]), "Sawfish"),
    (Rule::Contains(&["fluxbox"]), "Fluxbox"),
    (Rule::Contains(&["icewm"]), "IceWM"),
    (Rule::Contains(&["awesome"]), "awesome"),
    (Rule::Contains(&["dwm"]), "dwm"),
];

/// Name of the running desktop, or the raw desktop variable if unrecognised.
///
/// Reads `XDG_CURRENT_DESKTOP`, falling back to `DESKTOP_SESSION`. Returns
/// `None` when neither is set.
pub(crate) fn detect_desktop(env: &Environment) -> Option<&str> {
    let raw = env
        .get("XDG_CURRENT_DESKTOP")
        .or_else(|| env.get("DESKTOP_SESSION"))?;
    let lowered = raw.to_lowercase();

    let known = RULES.iter().find_map(|(rule, name)| {
        let hit = match rule {
            Rule::Contains(needles) => contains_any(&lowered, needles),
            Rule::SetOrContains(var, needles) => env.is_set(var) || contains_any(&lowered, needles),
        };
        hit.then_some(*name)
    });

    Some(known.unwrap_or(raw))
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(pairs: &[(&str, &str)]) -> Option<String> {
        let env = Environment::from_pairs(pairs.iter().copied());
        detect_desktop(&env).map(str::to_string)
    }

    #[test]
    fn test_known_desktops_case_insensitive() {
        assert_eq!(detect(&[("XDG_CURRENT_DESKTOP", "KDE")]).as_deref(), Some("KDE Plasma"));
        assert_eq!(detect(&[("XDG_CURRENT_DESKTOP", "ubuntu:GNOME")]).as_deref(), Some("GNOME"));
        assert_eq!(detect(&[("XDG_CURRENT_DESKTOP", "XFCE")]).as_deref(), Some("Xfce"));
        assert_eq!(detect(&[("XDG_CURRENT_DESKTOP", "Hyprland:i3")]).as_deref(), Some("i3"));
    }

    #[test]
    fn test_rule_order() {
        // "mate" is checked before "gnome"
        assert_eq!(
            detect(&[("XDG_CURRENT_DESKTOP", "MATE:GNOME")]).as_deref(),
            Some("MATE")
        );
        assert_eq!(
            detect(&[("XDG_CURRENT_DESKTOP", "foo"), ("GNOME_DESKTOP_SESSION_ID", "this-is-deprecated")])
                .as_deref(),
            Some("GNOME")
        );
    }

    #[test]
    fn test_unknown_desktop_is_passed_through() {
        assert_eq!(detect(&[("XDG_CURRENT_DESKTOP", "Hyprland")]).as_deref(), Some("Hyprland"));
    }

    #[test]
    fn test_desktop_session_fallback() {
        assert_eq!(detect(&[("DESKTOP_SESSION", "openbox")]).as_deref(), Some("Openbox"));
        assert_eq!(detect(&[]), None);
    }
}
