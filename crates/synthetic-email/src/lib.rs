//! Deterministic synthetic name and email records for software testing.
//!
//! This crate turns a list of person names into realistic but fictional
//! email addresses by combining the names with username patterns and
//! domains, then encodes the resulting records for downstream tooling.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Parsing user-supplied names and synthesizing fictional ones from a seed
//! - Normalizing name fragments into email-safe username parts
//! - A registry of username patterns that can be enabled individually
//! - Batch generation with optional uniqueness and a record limit
//! - Export to plain text, CSV, JSON, and SQL
//!
//! # Example
//!
//! ```
//! use synthetic_email::{
//!     Domain, ExportFormat, GenerationOptions, PatternRegistry, PersonName, encode,
//!     generate_records,
//! };
//!
//! let names = vec![PersonName::parse("Ann Lee").expect("valid name")];
//! let mut registry = PatternRegistry::builtin();
//! registry.enable_only(["first-dot-last"]).expect("known pattern");
//! let patterns: Vec<_> = registry.enabled().collect();
//! let domains = vec![Domain::parse("example.com").expect("valid domain")];
//!
//! let batch = generate_records(&names, &patterns, &domains, &GenerationOptions::default());
//! let text = encode(&batch.records, ExportFormat::Text, "unused").expect("text encodes");
//!
//! assert_eq!(text, "ann.lee@example.com\n");
//! ```

mod atomic_io;
pub mod cli;
mod config;
mod domain;
mod error;
mod export;
mod generator;
mod names;
mod pattern;
mod record;
mod slug;

pub use config::GeneratorSettings;
pub use domain::{DEFAULT_DOMAINS, Domain, default_domains, is_valid_domain, parse_domains};
pub use error::{ExportError, InputError, PatternError};
pub use export::{
    DEFAULT_TABLE_NAME, ExportFormat, INSERT_BATCH_SIZE, default_file_name, encode, encode_csv,
    encode_json, encode_sql, encode_text, is_valid_table_name,
};
pub use generator::{
    DEFAULT_RECORD_COUNT, GeneratedBatch, GenerationOptions, MAX_RECORDS, generate_records,
};
pub use names::{
    PersonName, SINGLE_WORD_LAST_NAME, SynthesizedNames, dedup_names, synthesize_names,
};
pub use pattern::{Pattern, PatternRegistry, Placeholder};
pub use record::{EmailRecord, RECORD_FIELDS};
pub use slug::{USERNAME_MIN, is_username_char, sanitize_username, slugify};
