//! Label composition for single-value modules

use crate::constants::{LABEL_COLORS, NAME_COLUMN_WIDTH, SYMBOL_COLUMN_WIDTH, SYMBOL_DISPLAY_WIDTH};
use crate::error::FormatError;
use crate::registry::ModuleDescriptor;
use fo_types::{ModuleOutput, StyledSegment};
use std::borrow::Cow;

/// How a module is labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Full module name, padded to 9 columns
    #[default]
    Name,
    /// Nerd font symbol, padded to 4 columns
    Symbol,
}

/// Builds `<label><padding><value>` lines.
///
/// Each built label takes the next color of a fixed rotation, so modules
/// printed in registry order form a rainbow.
#[derive(Debug, Clone, Default)]
pub struct LabelBuilder {
    mode: LabelMode,
    rotation: usize,
}

impl LabelBuilder {
    pub fn new(mode: LabelMode) -> Self {
        Self { mode, rotation: 0 }
    }

    /// Restart the color rotation from its first entry
    pub fn reset(&mut self) {
        self.rotation = 0;
    }

    fn next_color(&mut self) -> u8 {
        let color = LABEL_COLORS[self.rotation];
        self.rotation = (self.rotation + 1) % LABEL_COLORS.len();
        color
    }

    /// Build the labelled line for `descriptor`.
    ///
    /// An absent value yields no output and leaves the rotation untouched.
    pub fn build<'a, C>(
        &mut self,
        descriptor: &ModuleDescriptor<C>,
        value: Option<Cow<'a, str>>,
    ) -> Result<Option<ModuleOutput<'a>>, FormatError> {
        let Some(value) = value else {
            return Ok(None);
        };

        let (label, label_width, column) = match (self.mode, descriptor.symbol) {
            (LabelMode::Symbol, Some(symbol)) => (symbol, SYMBOL_DISPLAY_WIDTH, SYMBOL_COLUMN_WIDTH),
            _ => (descriptor.name, descriptor.name.chars().count(), NAME_COLUMN_WIDTH),
        };
        let color = self.next_color();

        let mut output = ModuleOutput::with_capacity(3);
        output.push(StyledSegment::borrowed(label).bold().fg(color));

        if label_width < column {
            let width = column - label_width;
            let mut padding = String::new();
            padding.try_reserve_exact(width)?;
            padding.extend(std::iter::repeat(' ').take(width));
            output.push(StyledSegment::owned(padding));
        }

        output.push(StyledSegment::new(value));
        Ok(Some(output))
    }
}
