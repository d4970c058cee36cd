//! Error types for formatting and module evaluation

use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Failure to compose a string
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("string formatting failed")]
    Format(#[from] fmt::Error),
}

/// Reasons a module contributes no output
///
/// Every variant is handled the same way by the runner: the module is
/// skipped and the run continues with the next one.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("{module}: provider unavailable: {source:#}")]
    ProviderUnavailable {
        module: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ModuleError {
    pub fn unavailable(module: &'static str, source: anyhow::Error) -> Self {
        Self::ProviderUnavailable { module, source }
    }
}

impl From<TryReserveError> for ModuleError {
    fn from(e: TryReserveError) -> Self {
        ModuleError::Format(FormatError::Allocation(e))
    }
}
