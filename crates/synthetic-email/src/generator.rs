//! Deterministic batch generation of email records.
//!
//! The generator walks every name × pattern × domain combination in input
//! order and stops once the requested number of records exists. Numeric
//! suffixes draw from a dedicated email RNG, independent of the name RNG,
//! so the same inputs and email seed always produce identical output.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::domain::Domain;
use crate::names::PersonName;
use crate::pattern::Pattern;
use crate::record::EmailRecord;
use crate::slug::{sanitize_username, slugify};

/// Hard cap on the number of records a single run may produce.
pub const MAX_RECORDS: usize = 200_000;

/// Default number of records requested.
pub const DEFAULT_RECORD_COUNT: usize = 200;

/// Flags controlling a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Lowercase the whole address. Usernames are always lowercase, so this
    /// only changes the domain part.
    pub lowercase: bool,
    /// Drop combinations whose email was already produced in this run.
    pub enforce_uniqueness: bool,
    /// Maximum number of records to produce, capped at [`MAX_RECORDS`].
    pub max_records: usize,
    /// Seed for numeric suffixes; drawn at random when `None`.
    pub email_seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            enforce_uniqueness: true,
            max_records: DEFAULT_RECORD_COUNT,
            email_seed: None,
        }
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBatch {
    /// Records in iteration order.
    pub records: Vec<EmailRecord>,
    /// Seed that reproduces the numeric suffixes of this run.
    pub email_seed: u64,
    /// Number of records requested after applying [`MAX_RECORDS`].
    pub requested: usize,
    /// Combinations skipped because no valid username could be rendered.
    pub skipped_unrenderable: usize,
    /// Combinations dropped because their email was already produced.
    pub skipped_duplicates: usize,
}

impl GeneratedBatch {
    /// Returns `true` if the combination space ran out before the request
    /// was met.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.records.len() < self.requested
    }

    /// Returns the generated addresses in order.
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.email.as_str())
    }
}

/// Generates email records for every name × pattern × domain combination.
///
/// Combinations are visited in input order: names first, then patterns,
/// then domains. A combination is skipped when either name fragment
/// normalises to an empty slug or the rendered username is rejected. With
/// uniqueness enforced, a combination whose email already exists is dropped
/// and never retried. Generation stops at `options.max_records` or when the
/// combinations run out, whichever comes first; running out is not an
/// error. Empty inputs yield an empty batch.
///
/// # Example
///
/// ```
/// use synthetic_email::{Domain, GenerationOptions, Pattern, PersonName, generate_records};
///
/// let names = [PersonName::parse("Ann Lee").expect("valid name")];
/// let pattern = Pattern::parse("first-dot-last", "{first}.{last}").expect("valid pattern");
/// let domains = [Domain::parse("example.com").expect("valid domain")];
///
/// let batch = generate_records(&names, &[&pattern], &domains, &GenerationOptions::default());
///
/// assert_eq!(batch.emails().collect::<Vec<_>>(), ["ann.lee@example.com"]);
/// ```
#[must_use]
pub fn generate_records(
    names: &[PersonName],
    patterns: &[&Pattern],
    domains: &[Domain],
    options: &GenerationOptions,
) -> GeneratedBatch {
    let email_seed = options.email_seed.unwrap_or_else(|| rand::rng().random());
    let requested = options.max_records.min(MAX_RECORDS);
    debug!(email_seed, requested, "starting email generation");

    let mut rng = ChaCha8Rng::seed_from_u64(email_seed);
    let mut batch = GeneratedBatch {
        records: Vec::with_capacity(requested.min(capacity_hint(names, patterns, domains))),
        email_seed,
        requested,
        skipped_unrenderable: 0,
        skipped_duplicates: 0,
    };
    let mut seen: HashSet<String> = HashSet::new();

    'names: for name in names {
        let (Some(first), Some(last)) = (slugify(name.first()), slugify(name.last())) else {
            batch.skipped_unrenderable += patterns.len() * domains.len();
            continue;
        };
        for pattern in patterns {
            for domain in domains {
                if batch.records.len() >= requested {
                    break 'names;
                }
                let Some(username) = sanitize_username(&pattern.render(&first, &last, &mut rng))
                else {
                    batch.skipped_unrenderable += 1;
                    continue;
                };
                let record = build_record(name, pattern, domain, username, options.lowercase);
                if options.enforce_uniqueness && !seen.insert(record.email.clone()) {
                    batch.skipped_duplicates += 1;
                    continue;
                }
                batch.records.push(record);
            }
        }
    }

    if batch.is_short() {
        warn!(
            requested,
            generated = batch.records.len(),
            "generated fewer records than requested; add names, domains, or patterns, or allow duplicates"
        );
    }
    info!(
        generated = batch.records.len(),
        skipped_unrenderable = batch.skipped_unrenderable,
        skipped_duplicates = batch.skipped_duplicates,
        "email generation finished"
    );
    batch
}

fn build_record(
    name: &PersonName,
    pattern: &Pattern,
    domain: &Domain,
    username: String,
    lowercase: bool,
) -> EmailRecord {
    let domain_text = if lowercase {
        domain.as_str().to_lowercase()
    } else {
        domain.as_str().to_owned()
    };
    EmailRecord {
        name: name.display().to_owned(),
        email: format!("{username}@{domain_text}"),
        domain: domain_text,
        pattern: pattern.id().to_owned(),
        username,
    }
}

fn capacity_hint(names: &[PersonName], patterns: &[&Pattern], domains: &[Domain]) -> usize {
    names
        .len()
        .saturating_mul(patterns.len())
        .saturating_mul(domains.len())
}
