//! Styled text segments

use std::borrow::Cow;

bitflags::bitflags! {
    /// Style attributes of a segment.
    ///
    /// `FG_COLOR` and `BG_COLOR` mark whether the corresponding 256-color
    /// index on the segment is meaningful.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const FG_COLOR = 1 << 4;
        const BG_COLOR = 1 << 5;
    }
}

/// One styled run of text within a module's output.
///
/// The text is either borrowed from a record that outlives the render (a
/// cached host fact, a static label) or owned by the segment, in which case
/// it is released once the renderer has written it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment<'a> {
    pub text: Cow<'a, str>,
    pub flags: StyleFlags,
    pub fg: u8,
    pub bg: u8,
}

impl<'a> StyledSegment<'a> {
    /// Create an unstyled segment
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            flags: StyleFlags::empty(),
            fg: 0,
            bg: 0,
        }
    }

    /// Create an unstyled segment borrowing `text`
    pub fn borrowed(text: &'a str) -> Self {
        Self::new(Cow::Borrowed(text))
    }

    /// Create an unstyled segment owning `text`
    pub fn owned(text: String) -> Self {
        Self::new(Cow::Owned(text))
    }

    pub fn bold(mut self) -> Self {
        self.flags |= StyleFlags::BOLD;
        self
    }

    pub fn italic(mut self) -> Self {
        self.flags |= StyleFlags::ITALIC;
        self
    }

    pub fn underline(mut self) -> Self {
        self.flags |= StyleFlags::UNDERLINE;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.flags |= StyleFlags::STRIKETHROUGH;
        self
    }

    /// Set a 256-color foreground
    pub fn fg(mut self, color: u8) -> Self {
        self.flags |= StyleFlags::FG_COLOR;
        self.fg = color;
        self
    }

    /// Set a 256-color background
    pub fn bg(mut self, color: u8) -> Self {
        self.flags |= StyleFlags::BG_COLOR;
        self.bg = color;
        self
    }

    /// Whether the renderer is responsible for releasing this segment's text
    pub fn is_owned(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Ordered segments produced by one module invocation.
///
/// A module that has nothing to report produces `None` rather than an empty
/// output, so `Option<ModuleOutput>` is what providers hand to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleOutput<'a> {
    segments: Vec<StyledSegment<'a>>,
}

impl<'a> ModuleOutput<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, segment: StyledSegment<'a>) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[StyledSegment<'a>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments whose text is owned
    pub fn owned_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_owned()).count()
    }
}

impl<'a> FromIterator<StyledSegment<'a>> for ModuleOutput<'a> {
    fn from_iter<I: IntoIterator<Item = StyledSegment<'a>>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for ModuleOutput<'a> {
    type Item = StyledSegment<'a>;
    type IntoIter = std::vec::IntoIter<StyledSegment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_color_flags() {
        let seg = StyledSegment::borrowed("cpu").bold().fg(3);
        assert!(seg.flags.contains(StyleFlags::BOLD | StyleFlags::FG_COLOR));
        assert!(!seg.flags.contains(StyleFlags::BG_COLOR));
        assert_eq!(seg.fg, 3);
    }

    #[test]
    fn test_ownership_follows_cow() {
        let output: ModuleOutput = [
            StyledSegment::borrowed("os"),
            StyledSegment::owned("       ".to_string()),
            StyledSegment::owned("Arch Linux".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(output.len(), 3);
        assert_eq!(output.owned_count(), 2);
        assert!(!output.segments()[0].is_owned());
    }
}
