//! fo-types: Shared data types for fo.
//!
//! This crate contains the styled text model that module providers produce
//! and the renderer consumes. It has no I/O and no formatting logic, making it
//! suitable as a foundation layer for the other fo crates.

pub mod segment;

pub use segment::{ModuleOutput, StyleFlags, StyledSegment};
