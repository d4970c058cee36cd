//! ANSI SGR escape sequences used by the renderer.

use fo_types::StyleFlags;
use std::io::Write;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Attribute codes in the order they are emitted.
const ATTRS: [(StyleFlags, &str); 4] = [
    (StyleFlags::BOLD, "\x1b[1m"),
    (StyleFlags::ITALIC, "\x1b[3m"),
    (StyleFlags::UNDERLINE, "\x1b[4m"),
    (StyleFlags::STRIKETHROUGH, "\x1b[9m"),
];

/// Write the attribute codes for every set flag, bold first.
#[inline]
pub fn attrs<W: Write>(w: &mut W, flags: StyleFlags) -> std::io::Result<()> {
    for (flag, code) in ATTRS {
        if flags.contains(flag) {
            w.write_all(code.as_bytes())?;
        }
    }
    Ok(())
}

/// Set foreground color (256-color palette).
#[inline]
pub fn fg_256<W: Write>(w: &mut W, index: u8) -> std::io::Result<()> {
    write!(w, "{CSI}38;5;{index}m")
}

/// Set background color (256-color palette).
#[inline]
pub fn bg_256<W: Write>(w: &mut W, index: u8) -> std::io::Result<()> {
    write!(w, "{CSI}48;5;{index}m")
}

/// Reset all attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(RESET.as_bytes())
}
