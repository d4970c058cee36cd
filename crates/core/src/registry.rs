//! Module descriptors and the ordered module registry

use crate::error::ModuleError;
use crate::label::LabelBuilder;
use fo_types::ModuleOutput;
use std::borrow::Cow;
use std::fmt;

/// Result of evaluating one module.
///
/// `Ok(None)` means the module had nothing to report and prints nothing.
pub type ModuleResult<'a> = Result<Option<ModuleOutput<'a>>, ModuleError>;

/// Function that produces a module's output from the host facts `C`
pub type ModuleProvider<C> = for<'r, 'a> fn(&mut ModuleContext<'r, 'a, C>) -> ModuleResult<'a>;

/// A named unit of system information
pub struct ModuleDescriptor<C> {
    /// Name used for labels and for `FO_MODULES` selection
    pub name: &'static str,
    /// Nerd font glyph used in symbol mode
    pub symbol: Option<&'static str>,
    /// Whether the module is shown when no allow-list is given
    pub display_by_default: bool,
    pub provider: ModuleProvider<C>,
}

impl<C> ModuleDescriptor<C> {
    pub fn new(
        name: &'static str,
        symbol: Option<&'static str>,
        display_by_default: bool,
        provider: ModuleProvider<C>,
    ) -> Self {
        Self {
            name,
            symbol,
            display_by_default,
            provider,
        }
    }
}

impl<C> fmt::Debug for ModuleDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("display_by_default", &self.display_by_default)
            .finish_non_exhaustive()
    }
}

/// What a provider gets to work with.
///
/// `'a` is the lifetime of the host facts; text borrowed from them can be
/// placed in the output without copying.
pub struct ModuleContext<'r, 'a, C> {
    pub facts: &'a C,
    pub descriptor: &'r ModuleDescriptor<C>,
    labels: &'r mut LabelBuilder,
}

impl<'r, 'a, C> ModuleContext<'r, 'a, C> {
    pub fn new(facts: &'a C, descriptor: &'r ModuleDescriptor<C>, labels: &'r mut LabelBuilder) -> Self {
        Self {
            facts,
            descriptor,
            labels,
        }
    }

    /// Build the standard `<label><padding><value>` line
    pub fn line<T>(&mut self, value: Option<T>) -> ModuleResult<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        Ok(self.labels.build(self.descriptor, value.map(Into::into))?)
    }

    /// Wrap a provider failure for this module
    pub fn unavailable(&self, source: anyhow::Error) -> ModuleError {
        ModuleError::unavailable(self.descriptor.name, source)
    }
}

/// Ordered set of modules; registration order is print order
pub struct Registry<C> {
    modules: Vec<ModuleDescriptor<C>>,
}

impl<C> Registry<C> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module at the end of the print order
    pub fn register(
        &mut self,
        name: &'static str,
        symbol: Option<&'static str>,
        display_by_default: bool,
        provider: ModuleProvider<C>,
    ) {
        if self.get(name).is_some() {
            log::warn!("Module '{}' registered twice, keeping both entries", name);
        }
        self.modules
            .push(ModuleDescriptor::new(name, symbol, display_by_default, provider));
    }

    /// Look up a module by name
    pub fn get(&self, name: &str) -> Option<&ModuleDescriptor<C>> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor<C>> {
        self.modules.iter()
    }

    /// List registered module names in print order
    pub fn names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}
