//! Shared constants for the engine

/// Label colors cycled across modules, as 256-color indices
pub const LABEL_COLORS: [u8; 6] = [1, 3, 2, 6, 4, 5];

/// Column width labels are padded to in name mode
pub const NAME_COLUMN_WIDTH: usize = 9;

/// Column width labels are padded to in symbol mode
pub const SYMBOL_COLUMN_WIDTH: usize = 4;

/// Terminal columns a nerd font symbol occupies
pub const SYMBOL_DISPLAY_WIDTH: usize = 2;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

/// Default separator for the module allow-list
pub const DEFAULT_IFS: &str = " ";
