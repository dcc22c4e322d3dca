//! Command orchestration for the `synthetic-email` binary.
//!
//! The binary loads [`GeneratorSettings`] and delegates to [`run`], keeping
//! the whole flow testable without spawning a process.

mod error;

use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

pub use self::error::CliError;
use crate::atomic_io::write_atomic;
use crate::config::GeneratorSettings;
use crate::domain::{Domain, default_domains, parse_domains};
use crate::error::{ExportError, InputError};
use crate::export::{ExportFormat, default_file_name, encode};
use crate::generator::{GeneratedBatch, MAX_RECORDS, generate_records};
use crate::names::{PersonName, dedup_names, synthesize_names};
use crate::pattern::{Pattern, PatternRegistry};

/// Result of a completed command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The generated records and run statistics.
    pub batch: GeneratedBatch,
    /// Seed used for name synthesis, when names were synthesized.
    pub name_seed: Option<u64>,
    /// Format the records were encoded in.
    pub format: ExportFormat,
    /// The encoded export.
    pub contents: String,
    /// File the export was written to; `None` means the caller should
    /// print [`RunOutcome::contents`].
    pub written_to: Option<Utf8PathBuf>,
}

/// Runs one generation with the supplied settings.
///
/// # Errors
///
/// Returns [`CliError`] when input validation fails, no names, domains, or
/// patterns remain, or the export cannot be encoded or written.
///
/// # Example
///
/// ```
/// use synthetic_email::GeneratorSettings;
/// use synthetic_email::cli::run;
///
/// let settings = GeneratorSettings {
///     name_count: Some(3),
///     name_seed: Some(7),
///     email_seed: Some(7),
///     count: Some(5),
///     ..GeneratorSettings::default()
/// };
///
/// let outcome = run(&settings).expect("run succeeds");
/// assert_eq!(outcome.batch.records.len(), 5);
/// assert_eq!(outcome.contents.lines().count(), 5);
/// ```
pub fn run(settings: &GeneratorSettings) -> Result<RunOutcome, CliError> {
    let count = validate_count("email count", settings.count())?;
    let format = settings.format()?;
    let (names, name_seed) = collect_names(settings)?;
    let domains = resolve_domains(settings)?;
    let registry = resolve_patterns(settings)?;
    let patterns: Vec<&Pattern> = registry.enabled().collect();
    if patterns.is_empty() {
        return Err(CliError::NoPatterns);
    }

    let mut options = settings.generation_options();
    options.max_records = count;
    debug!(
        names = names.len(),
        patterns = patterns.len(),
        domains = domains.len(),
        "resolved generation inputs"
    );
    let batch = generate_records(&names, &patterns, &domains, &options);
    let contents = encode(&batch.records, format, settings.table())?;

    let written_to = match settings.output.as_deref() {
        Some(path) => {
            let target = write_output(path, format, &contents, Local::now().naive_local())?;
            info!(path = %target, records = batch.records.len(), "export written");
            Some(target)
        }
        None => None,
    };

    Ok(RunOutcome {
        batch,
        name_seed,
        format,
        contents,
        written_to,
    })
}

/// Formats the success message printed after writing an export file.
#[must_use]
pub fn success_message(outcome: &RunOutcome) -> Option<String> {
    outcome.written_to.as_ref().map(|path| {
        format!(
            "Wrote {} records ({}) to {} (email seed {})",
            outcome.batch.records.len(),
            outcome.format,
            path,
            outcome.batch.email_seed
        )
    })
}

/// Formats the warning shown when fewer records were generated than
/// requested.
#[must_use]
pub fn shortfall_message(batch: &GeneratedBatch) -> Option<String> {
    batch.is_short().then(|| {
        format!(
            "Requested {}, generated {}. Try adding more names or domains, enabling more patterns, or allowing duplicates.",
            batch.requested,
            batch.records.len()
        )
    })
}

fn validate_count(what: &'static str, value: usize) -> Result<usize, InputError> {
    if (1..=MAX_RECORDS).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::InvalidCount {
            what,
            value,
            max: MAX_RECORDS,
        })
    }
}

fn collect_names(settings: &GeneratorSettings) -> Result<(Vec<PersonName>, Option<u64>), CliError> {
    let mut names = match settings.names_file.as_deref() {
        Some(path) => read_names_file(path)?,
        None => Vec::new(),
    };

    let mut name_seed = None;
    if let Some(requested) = settings.name_count {
        let name_count = validate_count("name count", requested)?;
        let synthesized = synthesize_names(settings.name_seed, name_count);
        name_seed = Some(synthesized.seed);
        if settings.replace_names {
            names = synthesized.names;
        } else {
            names.extend(synthesized.names);
        }
    }

    if settings.dedup_names {
        let before = names.len();
        names = dedup_names(&names);
        debug!(before, after = names.len(), "deduplicated names");
    }

    if names.is_empty() {
        return Err(CliError::NoNames);
    }
    Ok((names, name_seed))
}

fn resolve_domains(settings: &GeneratorSettings) -> Result<Vec<Domain>, CliError> {
    let domains = match settings.domain_entries() {
        Some(entries) => parse_domains(entries)?,
        None => default_domains(),
    };
    if domains.is_empty() {
        return Err(CliError::NoDomains);
    }
    Ok(domains)
}

fn resolve_patterns(settings: &GeneratorSettings) -> Result<PatternRegistry, CliError> {
    let mut registry = PatternRegistry::builtin();
    if let Some(ids) = settings.pattern_ids() {
        registry.enable_only(ids)?;
    }
    Ok(registry)
}

/// Reads one name per line, skipping blank lines.
fn read_names_file(path: &Path) -> Result<Vec<PersonName>, CliError> {
    let read_error = |message: String| InputError::Read {
        path: path.to_path_buf(),
        message,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error("names path must be a file".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| read_error(err.to_string()))?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(|err| read_error(err.to_string()))?;

    let names = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(PersonName::parse)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}

/// Writes the export to `path`, or to a timestamped file inside it when
/// `path` is an existing directory.
fn write_output(
    path: &Path,
    format: ExportFormat,
    contents: &str,
    timestamp: NaiveDateTime,
) -> Result<Utf8PathBuf, CliError> {
    let target = Utf8Path::from_path(path).ok_or_else(|| ExportError::Write {
        path: Utf8PathBuf::from(path.to_string_lossy().into_owned()),
        message: "output path is not valid UTF-8".to_owned(),
    })?;

    if let Ok(dir) = Dir::open_ambient_dir(target, ambient_authority()) {
        let file_name = default_file_name(format, timestamp);
        let full_path = target.join(&file_name);
        write_atomic(&dir, Utf8Path::new(&file_name), contents)
            .map_err(|err| with_path(err, &full_path))?;
        return Ok(full_path);
    }

    let parent = match target.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = target.file_name().ok_or_else(|| ExportError::Write {
        path: target.to_path_buf(),
        message: "output path must name a file".to_owned(),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        ExportError::Write {
            path: target.to_path_buf(),
            message: err.to_string(),
        }
    })?;
    write_atomic(&dir, Utf8Path::new(file_name), contents)
        .map_err(|err| with_path(err, target))?;
    Ok(target.to_path_buf())
}

fn with_path(err: ExportError, path: &Utf8Path) -> ExportError {
    match err {
        ExportError::Write { message, .. } => ExportError::Write {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests;
