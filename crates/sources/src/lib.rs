//! fo-sources: Host fact providers and built-in modules for fo.
//!
//! Everything here is a thin wrapper over a syscall, a small file read or an
//! environment variable. Facts are gathered lazily and memoized in
//! [`HostFacts`], which the module providers borrow from.

mod desktop;
mod env;
mod host;
mod modules;
mod os_release;
mod passwd;

pub use env::Environment;
pub use host::{Account, HostFacts, Identity, MemoryStats, DEFAULT_LINE_TEXT};

use fo_core::Registry;

/// Register all built-in modules, in print order
pub fn register_all() -> Registry<HostFacts> {
    let mut registry = Registry::new();

    registry.register("username", Some("\u{f2bd}"), false, modules::username);
    registry.register("hostname", Some("\u{f06f3}"), false, modules::hostname);
    registry.register("header", None, true, modules::header);
    registry.register("line", None, true, modules::line);
    registry.register("os", Some("\u{f17c}"), true, modules::os);
    registry.register("kernel", Some("\u{f0ad}"), true, modules::kernel);
    registry.register("uptime", Some("\u{f017}"), true, modules::uptime);
    registry.register("shell", Some("\u{f489}"), true, modules::shell);
    registry.register("ram", Some("\u{f035b}"), true, modules::ram);
    registry.register("swap", Some("\u{f04e1}"), true, modules::swap);
    registry.register("de", Some("\u{f2d0}"), true, modules::de);
    registry.register("editor", Some("\u{f040}"), true, modules::editor);
    registry.register("host", Some("\u{f0379}"), true, modules::host);
    registry.register("arch", Some("\u{f4bc}"), true, modules::arch);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_defaults() {
        let registry = register_all();
        assert_eq!(
            registry.names(),
            vec![
                "username", "hostname", "header", "line", "os", "kernel", "uptime", "shell", "ram",
                "swap", "de", "editor", "host", "arch"
            ]
        );

        let hidden: Vec<_> = registry
            .iter()
            .filter(|m| !m.display_by_default)
            .map(|m| m.name)
            .collect();
        assert_eq!(hidden, vec!["username", "hostname"]);
        assert!(registry.get("header").unwrap().symbol.is_none());
    }
}
