//! fo-core: Text and output engine for fo.
//!
//! This crate contains the byte and duration formatters, the key/value
//! parser used for os-release style files, module selection, the label
//! builder, the ANSI renderer and the module registry that drives them.

pub mod ansi;
pub mod constants;
mod error;
pub mod format;
pub mod kv;
mod label;
pub mod list;
mod registry;
mod render;
mod runner;

pub use error::{FormatError, ModuleError};
pub use format::{format_bytes, format_duration, ByteMode};
pub use kv::find_value;
pub use label::{LabelBuilder, LabelMode};
pub use list::list_contains;
pub use registry::{ModuleContext, ModuleDescriptor, ModuleProvider, ModuleResult, Registry};
pub use render::{render, RenderSummary};
pub use runner::{ModuleRunner, RunSummary, Selection};

// Re-export types used in public signatures for convenience
pub use fo_types::{ModuleOutput, StyleFlags, StyledSegment};
