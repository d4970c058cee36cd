//! Human readable formatters for byte counts and durations

mod bytes;
mod duration;

pub use bytes::{format_bytes, ByteMode};
pub use duration::format_duration;
