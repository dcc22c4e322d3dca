//! Email domains and their validation.
//!
//! # Validation Rules
//!
//! A domain must fully match `[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}`: a non-empty
//! label section of ASCII letters, digits, dots, and hyphens, followed by a
//! dot and a top-level label of at least two ASCII letters.

use std::fmt;

use crate::error::InputError;

/// RFC 2606 reserved domains, safe to use for test addresses.
pub const DEFAULT_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Minimum length of the top-level label.
const TLD_MIN: usize = 2;

/// A validated email domain.
///
/// # Example
///
/// ```
/// use synthetic_email::Domain;
///
/// let domain = Domain::parse(" Example.COM ").expect("valid domain");
/// assert_eq!(domain.as_str(), "Example.COM");
/// assert!(Domain::parse("localhost").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Validates a domain, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidDomain`] if the domain does not match
    /// the accepted syntax.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let candidate = raw.trim();
        if is_valid_domain(candidate) {
            Ok(Self(candidate.to_owned()))
        } else {
            Err(InputError::InvalidDomain {
                value: candidate.to_owned(),
            })
        }
    }

    /// Returns the domain text as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the safe default domains.
#[must_use]
pub fn default_domains() -> Vec<Domain> {
    DEFAULT_DOMAINS
        .iter()
        .map(|domain| Domain((*domain).to_owned()))
        .collect()
}

/// Validates every entry of a domain list, reporting the first invalid one.
///
/// Blank entries are skipped.
///
/// # Errors
///
/// Returns [`InputError::InvalidDomain`] for the first entry that fails
/// validation.
pub fn parse_domains<I, S>(entries: I) -> Result<Vec<Domain>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter(|entry| !entry.as_ref().trim().is_empty())
        .map(|entry| Domain::parse(entry.as_ref()))
        .collect()
}

/// Returns `true` if `candidate` fully matches the domain syntax.
#[must_use]
pub fn is_valid_domain(candidate: &str) -> bool {
    let Some((labels, tld)) = candidate.rsplit_once('.') else {
        return false;
    };
    // The top-level label cannot contain a dot, so only the last dot can
    // separate it.
    !labels.is_empty()
        && labels.chars().all(is_label_char)
        && tld.chars().count() >= TLD_MIN
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

const fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}
