//! Error types for the synthetic-email command.

use thiserror::Error;

use crate::error::{ExportError, InputError, PatternError};

/// Errors surfaced by the command orchestration flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// No names were supplied or synthesized.
    #[error("no names: supply --names-file or --name-count")]
    NoNames,
    /// The domain list is empty.
    #[error("no domains: supply at least one domain")]
    NoDomains,
    /// Every pattern is disabled.
    #[error("no patterns: enable at least one pattern")]
    NoPatterns,
    /// User input failed validation.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Pattern selection failed.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// Encoding or writing the export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
