//! Error types for the synthetic-email crate.
//!
//! This module defines semantic error enums for input validation, pattern
//! registration, and export, following the project's error handling
//! conventions with `thiserror`.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while validating user-supplied input.
///
/// Names and domains are rejected at entry so the generator only ever sees
/// well-formed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The name is empty, contains non-alphabetic characters, or is too short.
    #[error("invalid name '{value}': use alphabetic words such as \"Max Example\"")]
    InvalidName {
        /// The rejected input.
        value: String,
    },

    /// The domain does not match the accepted domain syntax.
    #[error("invalid domain '{value}'")]
    InvalidDomain {
        /// The rejected input.
        value: String,
    },

    /// A requested count is outside the accepted range.
    #[error("{what} must be between 1 and {max}, got {value}")]
    InvalidCount {
        /// Which count was rejected.
        what: &'static str,
        /// The rejected value.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// An input file could not be read.
    #[error("failed to read input file at '{path}': {message}")]
    Read {
        /// Path to the input file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors raised while registering or selecting username patterns.
///
/// Template problems surface when a pattern is parsed, never while it is
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The template names a placeholder the renderer does not know.
    #[error("pattern '{template}' uses unknown placeholder '{{{placeholder}}}'")]
    UnknownPlaceholder {
        /// The offending template.
        template: String,
        /// Placeholder name without braces.
        placeholder: String,
    },

    /// A `{` is never closed.
    #[error("pattern '{template}' has an unterminated placeholder")]
    UnterminatedPlaceholder {
        /// The offending template.
        template: String,
    },

    /// A `}` appears without a matching `{`.
    #[error("pattern '{template}' has an unmatched '}}'")]
    UnmatchedBrace {
        /// The offending template.
        template: String,
    },

    /// A literal character would produce an invalid username.
    #[error("pattern '{template}' contains invalid literal character '{character}'")]
    InvalidLiteral {
        /// The offending template.
        template: String,
        /// The rejected character.
        character: char,
    },

    /// The template renders the same username for every name.
    #[error("pattern '{template}' contains no placeholders")]
    NoPlaceholders {
        /// The offending template.
        template: String,
    },

    /// No registered pattern has the requested identifier.
    #[error("unknown pattern '{id}'")]
    UnknownPattern {
        /// The requested identifier.
        id: String,
    },
}

/// Errors raised while encoding or writing exported records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("failed to encode CSV: {message}")]
    Csv {
        /// Description of the encoder error.
        message: String,
    },

    /// JSON serialization failed.
    #[error("failed to encode JSON: {message}")]
    Json {
        /// Description of the encoder error.
        message: String,
    },

    /// The SQL table name is not a plain identifier.
    #[error("invalid SQL table name '{name}'")]
    InvalidTableName {
        /// The rejected table name.
        name: String,
    },

    /// The export format name is not recognised.
    #[error("unknown export format '{value}': expected txt, csv, json, or sql")]
    UnknownFormat {
        /// The rejected format name.
        value: String,
    },

    /// The export file could not be written.
    #[error("failed to write export file at '{path}': {message}")]
    Write {
        /// Path of the file being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
