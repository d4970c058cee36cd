//! Configuration management
//!
//! fo has no config file; everything comes from `FO_*` environment
//! variables read once at startup.

mod defaults;
mod settings;

pub use defaults::{
    ENV_IFS, ENV_LINETEXT, ENV_MODULES, ENV_NERDFONTS, ENV_NO_COLOR, ENV_TERM, FALSY_VALUES,
};
pub use settings::{env_bool, Settings};
