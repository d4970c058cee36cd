//! Operating system name from os-release metadata

use anyhow::{anyhow, Result};
use fo_core::find_value;

/// Locations searched in order, see os-release(5)
pub(crate) const OS_RELEASE_PATHS: &[&str] = &["/etc/os-release", "/usr/lib/os-release"];

/// Keys tried in order of preference
const NAME_KEYS: &[&str] = &["PRETTY_NAME", "NAME", "ID"];

/// Pick the most descriptive OS name from os-release `data`
pub(crate) fn os_name(data: &[u8]) -> Option<String> {
    NAME_KEYS.iter().find_map(|key| find_value(key, data))
}

/// Read the first os-release file that exists
pub(crate) fn read_os_release() -> Result<Vec<u8>> {
    let mut last_err = None;
    for path in OS_RELEASE_PATHS {
        match std::fs::read(path) {
            Ok(data) => return Ok(data),
            Err(e) => {
                log::debug!("Could not read {}: {}", path, e);
                last_err = Some(e);
            }
        }
    }
    Err(match last_err {
        Some(e) => anyhow!(e).context("no os-release file found"),
        None => anyhow!("no os-release file found"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_pretty_name() {
        let data = b"NAME=\"Ubuntu\"\nPRETTY_NAME=\"Ubuntu 24.04 LTS\"\nID=ubuntu\n";
        assert_eq!(os_name(data).as_deref(), Some("Ubuntu 24.04 LTS"));
    }

    #[test]
    fn test_falls_back_to_name_then_id() {
        assert_eq!(os_name(b"NAME=Gentoo\nID=gentoo\n").as_deref(), Some("Gentoo"));
        assert_eq!(os_name(b"ID=alpine\n").as_deref(), Some("alpine"));
        assert_eq!(os_name(b"VERSION=1\n"), None);
    }
}
