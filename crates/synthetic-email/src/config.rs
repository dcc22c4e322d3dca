//! Generator configuration loaded via OrthoConfig.
//!
//! Every setting can come from a CLI flag (`--email-seed`), an environment
//! variable (`SYNTHETIC_EMAIL_EMAIL_SEED`), or a configuration file, with
//! the usual OrthoConfig precedence.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::error::ExportError;
use crate::export::{DEFAULT_TABLE_NAME, ExportFormat};
use crate::generator::{DEFAULT_RECORD_COUNT, GenerationOptions};

/// Settings controlling a generation run.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SYNTHETIC_EMAIL")]
pub struct GeneratorSettings {
    /// File with one name per line; blank lines are ignored.
    pub names_file: Option<PathBuf>,
    /// Seed for fictional name synthesis.
    pub name_seed: Option<u64>,
    /// Number of fictional names to synthesize.
    pub name_count: Option<usize>,
    /// Replace names read from the file instead of appending to them.
    #[ortho_config(default = false)]
    pub replace_names: bool,
    /// Drop names that repeat an earlier entry, ignoring case.
    #[ortho_config(default = false)]
    pub dedup_names: bool,
    /// Seed for numeric username suffixes.
    pub email_seed: Option<u64>,
    /// Number of email records to generate.
    pub count: Option<usize>,
    /// Keep the domain's original case instead of lowercasing addresses.
    #[ortho_config(default = false)]
    pub keep_case: bool,
    /// Allow duplicate addresses within a run.
    #[ortho_config(default = false)]
    pub allow_duplicates: bool,
    /// Domains, given as a comma-separated list or repeated flags; defaults
    /// to the reserved example domains.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub domains: Option<Vec<String>>,
    /// Pattern identifiers to enable, as a comma-separated list or repeated
    /// flags.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub patterns: Option<Vec<String>>,
    /// Output format: `txt`, `csv`, `json`, or `sql`.
    pub format: Option<String>,
    /// Table name for SQL output.
    pub table: Option<String>,
    /// Output file or directory; stdout when omitted.
    pub output: Option<PathBuf>,
}

impl GeneratorSettings {
    /// Return the requested record count, falling back to the default.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_RECORD_COUNT)
    }

    /// Return the configured SQL table name, falling back to the default.
    #[must_use]
    pub fn table(&self) -> &str {
        self.table.as_deref().unwrap_or(DEFAULT_TABLE_NAME)
    }

    /// Return the configured export format, falling back to plain text.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnknownFormat`] for unrecognised names.
    pub fn format(&self) -> Result<ExportFormat, ExportError> {
        self.format
            .as_deref()
            .map_or(Ok(ExportFormat::default()), str::parse::<ExportFormat>)
    }

    /// Return the configured domain entries, if any were supplied.
    #[must_use]
    pub fn domain_entries(&self) -> Option<Vec<&str>> {
        self.domains.as_deref().map(split_entries)
    }

    /// Return the configured pattern identifiers, if any were supplied.
    #[must_use]
    pub fn pattern_ids(&self) -> Option<Vec<&str>> {
        self.patterns.as_deref().map(split_entries)
    }

    /// Build generator options from these settings.
    #[must_use]
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            lowercase: !self.keep_case,
            enforce_uniqueness: !self.allow_duplicates,
            max_records: self.count(),
            email_seed: self.email_seed,
        }
    }
}

/// A list setting as it arrives from a layer: environment values without a
/// comma stay scalar, while comma-separated values and CLI flags arrive as
/// sequences.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListSetting {
    One(String),
    Many(Vec<String>),
}

fn deserialize_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let setting = Option::<ListSetting>::deserialize(deserializer)?;
    Ok(setting.map(|value| match value {
        ListSetting::One(entry) => vec![entry],
        ListSetting::Many(entries) => entries,
    }))
}

fn split_entries(entries: &[String]) -> Vec<&str> {
    entries
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}
