//! Byte count formatting

use crate::error::FormatError;
use std::fmt::Write;

/// Unit letters indexed by exponent; index 0 has no letter
const UNIT_LETTERS: &[u8] = b" kMGTPEZY";

/// Significant digits used for the fractional part
const FRACTION_DIGITS: i32 = 2;

/// Base and suffix policy for [`format_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteMode {
    /// Base 1000
    Metric,
    /// Base 1024
    Binary,
    /// Base 1024 with an `i` after the unit letter
    #[default]
    BinaryI,
}

impl ByteMode {
    fn base(self) -> u64 {
        match self {
            ByteMode::Metric => 1000,
            ByteMode::Binary | ByteMode::BinaryI => 1024,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            ByteMode::BinaryI => "i",
            ByteMode::Metric | ByteMode::Binary => "",
        }
    }
}

/// Format a byte count, e.g. `1536` in [`ByteMode::BinaryI`] gives `"1.5 ki"`.
///
/// Values below the base are written as `"<n> byte"` / `"<n> bytes"` and zero
/// is written as `"0"`. Only the unit letter and mode suffix follow a scaled
/// value, so binary-i output reads `ki`, `Mi`, `Gi` and so on.
pub fn format_bytes(bytes: u64, mode: ByteMode) -> Result<String, FormatError> {
    let mut out = String::new();
    out.try_reserve(24)?;

    if bytes == 0 {
        out.push('0');
        return Ok(out);
    }

    let base = mode.base();
    let mut mantissa = bytes;
    let mut power: u64 = 1;
    let mut exp_index = 0;
    while mantissa >= base {
        exp_index += 1;
        mantissa /= base;
        power *= base;
    }

    if exp_index == 0 {
        let plural = if bytes == 1 { "" } else { "s" };
        write!(out, "{mantissa} byte{plural}")?;
        return Ok(out);
    }

    let remainder = bytes - mantissa * power;
    let fraction = fraction_text(remainder, power)?;
    let letter = char::from(UNIT_LETTERS[exp_index]);
    write!(out, "{mantissa}{fraction} {letter}{}", mode.suffix())?;
    Ok(out)
}

/// Fractional part of `remainder / power`, from the decimal point onward.
///
/// The fraction is computed in single precision and rendered with two
/// significant digits in the style of C's `%g`: trailing zeros are dropped
/// and very small values switch to exponent notation. The result is empty
/// when there is no decimal point or exponent notation was used, and is cut
/// to the point plus two digits otherwise.
fn fraction_text(remainder: u64, power: u64) -> Result<String, FormatError> {
    let mut out = String::new();
    if remainder == 0 {
        return Ok(out);
    }

    let scale = 10u128.pow(FRACTION_DIGITS as u32);
    let fraction = (u128::from(remainder) * scale) as f32 / power as f32 / scale as f32;

    // The exponent after rounding to the requested significant digits
    let mut sci = String::new();
    write!(sci, "{:.*e}", (FRACTION_DIGITS - 1) as usize, fraction)?;
    let exponent: i32 = sci
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);
    if exponent < -4 || exponent >= FRACTION_DIGITS {
        return Ok(out);
    }

    let precision = (FRACTION_DIGITS - 1 - exponent).max(0) as usize;
    let mut fixed = String::new();
    write!(fixed, "{fraction:.precision$}")?;
    let fixed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if let Some(dot) = fixed.find('.') {
        let digits = &fixed[dot..];
        let end = digits.len().min(FRACTION_DIGITS as usize + 1);
        out.try_reserve(end)?;
        out.push_str(&digits[..end]);
    }
    Ok(out)
}
