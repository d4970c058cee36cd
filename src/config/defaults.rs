//! Environment variable names and default values

pub const ENV_IFS: &str = "FO_IFS";
pub const ENV_MODULES: &str = "FO_MODULES";
pub const ENV_NERDFONTS: &str = "FO_NERDFONTS";
pub const ENV_LINETEXT: &str = "FO_LINETEXT";
pub const ENV_TERM: &str = "TERM";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Values (case-insensitive) that turn a boolean variable off
pub const FALSY_VALUES: &[&str] = &["", "n", "no", "false", "0"];

/// Terminal on which nerd font symbols are never used
pub const PLAIN_TERM: &str = "linux";
