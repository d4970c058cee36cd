//! Render module output to a terminal stream

use crate::ansi;
use fo_types::{ModuleOutput, StyleFlags, StyledSegment};
use std::io::Write;

/// What a single [`render`] call wrote and released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Segments whose text was written
    pub written: usize,
    /// Owned segments released after rendering
    pub released: usize,
}

impl RenderSummary {
    /// Whether anything (including the trailing newline) was printed
    pub fn printed(&self) -> bool {
        self.written > 0
    }
}

/// Write `output` as one line, styled with ANSI codes when `color` is set.
///
/// Absent output, or output whose first segment is empty, prints nothing.
/// Rendering stops at the first empty segment. Each segment's style is
/// emitted once before its text and reset after it; embedded newlines do not
/// re-emit the style. The output is consumed: owned text is released as soon
/// as it has been written, borrowed text is left alone.
pub fn render<W: Write>(
    output: Option<ModuleOutput<'_>>,
    color: bool,
    sink: &mut W,
) -> std::io::Result<RenderSummary> {
    let mut summary = RenderSummary::default();
    let Some(output) = output else {
        return Ok(summary);
    };
    let mut failed = None;
    let mut stopped = false;
    for segment in output {
        if !stopped {
            if segment.is_empty() {
                stopped = true;
            } else if let Err(e) = write_segment(&segment, color, sink) {
                failed = Some(e);
                stopped = true;
            } else {
                summary.written += 1;
            }
        }
        // Segments after a terminator or error are released unwritten
        if segment.is_owned() {
            summary.released += 1;
        }
    }

    if let Some(e) = failed {
        return Err(e);
    }
    if summary.printed() {
        sink.write_all(b"\n")?;
    }
    Ok(summary)
}

fn write_segment<W: Write>(segment: &StyledSegment<'_>, color: bool, sink: &mut W) -> std::io::Result<()> {
    if color {
        ansi::attrs(sink, segment.flags)?;
        if segment.flags.contains(StyleFlags::FG_COLOR) {
            ansi::fg_256(sink, segment.fg)?;
        }
        if segment.flags.contains(StyleFlags::BG_COLOR) {
            ansi::bg_256(sink, segment.bg)?;
        }
    }

    let mut lines = segment.text.split('\n');
    if let Some(first) = lines.next() {
        sink.write_all(first.as_bytes())?;
    }
    for line in lines {
        sink.write_all(b"\n")?;
        sink.write_all(line.as_bytes())?;
    }

    if color {
        ansi::reset(sink)?;
    }
    Ok(())
}
