//! Person names: parsing manual entries and synthesizing fictional ones.
//!
//! Synthesized names are concatenated from small internal syllable tables;
//! no real name lists are involved. The same seed always yields the same
//! sequence.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::InputError;

/// Last name used when a manual entry contains a single word.
pub const SINGLE_WORD_LAST_NAME: &str = "user";

/// Minimum number of alphabetic characters in a manual entry.
const MIN_ALPHABETIC_CHARS: usize = 2;

const FIRST_SYLLABLES: &[&str] = &[
    "al", "an", "ar", "be", "ca", "da", "el", "fa", "jo", "ka", "li", "ma", "na", "or", "pa", "ra",
    "sa", "ta", "ve", "za", "mi", "no", "ri", "lu", "ke", "ti",
];

const MIDDLE_SYLLABLES: &[&str] = &[
    "la", "re", "mi", "no", "ta", "di", "ko", "vi", "ra", "lo", "ne", "",
];

const LAST_SYLLABLES: &[&str] = &[
    "son", "ner", "lin", "mar", "ton", "ric", "ven", "ley", "dan", "tis", "mond", "berg", "stone",
];

const FALLBACK_FIRST: &str = "Alex";
const FALLBACK_LAST: &str = "River";

/// A person name with its display form and the fragments used for usernames.
///
/// # Example
///
/// ```
/// use synthetic_email::PersonName;
///
/// let name = PersonName::parse("  Ada   King Lovelace ").expect("valid name");
/// assert_eq!(name.display(), "Ada King Lovelace");
/// assert_eq!(name.first(), "Ada");
/// assert_eq!(name.last(), "Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    display: String,
    first: String,
    last: String,
}

impl PersonName {
    /// Parses a manually entered name.
    ///
    /// Whitespace is trimmed and collapsed. The first word becomes the first
    /// name and the last word the last name; a single word is paired with
    /// [`SINGLE_WORD_LAST_NAME`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidName`] if the entry is blank, any word
    /// contains a non-alphabetic character, or fewer than two alphabetic
    /// characters are present.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let words: Vec<&str> = raw.split_whitespace().collect();
        let invalid = || InputError::InvalidName {
            value: raw.trim().to_owned(),
        };

        if words
            .iter()
            .any(|word| !word.chars().all(char::is_alphabetic))
        {
            return Err(invalid());
        }
        let letters: usize = words.iter().map(|word| word.chars().count()).sum();
        if letters < MIN_ALPHABETIC_CHARS {
            return Err(invalid());
        }

        let (first, last) = match words.as_slice() {
            [] => return Err(invalid()),
            [only] => ((*only).to_owned(), SINGLE_WORD_LAST_NAME.to_owned()),
            [head, .., tail] => ((*head).to_owned(), (*tail).to_owned()),
        };

        Ok(Self {
            display: words.join(" "),
            first,
            last,
        })
    }

    /// Returns the display form, e.g. `"Ada King Lovelace"`.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the first name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the last name.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    fn from_parts(first: String, last: String) -> Self {
        Self {
            display: format!("{first} {last}"),
            first,
            last,
        }
    }
}

/// Names produced by [`synthesize_names`] together with the seed used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedNames {
    /// Seed that reproduces this sequence.
    pub seed: u64,
    /// The generated names, in generation order.
    pub names: Vec<PersonName>,
}

/// Synthesizes `count` fictional names.
///
/// Uses `seed` to initialise a deterministic RNG; when no seed is supplied
/// one is drawn from the thread RNG and reported back in the result.
///
/// # Example
///
/// ```
/// use synthetic_email::synthesize_names;
///
/// let first = synthesize_names(Some(7), 5);
/// let second = synthesize_names(Some(7), 5);
///
/// assert_eq!(first.names.len(), 5);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn synthesize_names(seed: Option<u64>, count: usize) -> SynthesizedNames {
    let resolved_seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(resolved_seed);
    let names = (0..count).map(|_| fictional_name(&mut rng)).collect();
    debug!(seed = resolved_seed, count, "synthesized fictional names");
    SynthesizedNames {
        seed: resolved_seed,
        names,
    }
}

fn fictional_name(rng: &mut ChaCha8Rng) -> PersonName {
    let first_raw = format!(
        "{}{}",
        pick(rng, FIRST_SYLLABLES),
        pick(rng, MIDDLE_SYLLABLES)
    );
    let last_raw = format!(
        "{}{}{}",
        pick(rng, FIRST_SYLLABLES),
        pick(rng, MIDDLE_SYLLABLES),
        pick(rng, LAST_SYLLABLES)
    );
    PersonName::from_parts(
        capitalize_or(&first_raw, FALLBACK_FIRST),
        capitalize_or(&last_raw, FALLBACK_LAST),
    )
}

fn pick(rng: &mut ChaCha8Rng, table: &[&'static str]) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}

/// Keeps ASCII letters only and uppercases the first one.
fn capitalize_or(raw: &str, fallback: &str) -> String {
    let mut letters = raw.chars().filter(char::is_ascii_alphabetic);
    match letters.next() {
        Some(head) => std::iter::once(head.to_ascii_uppercase())
            .chain(letters.map(|c| c.to_ascii_lowercase()))
            .collect(),
        None => fallback.to_owned(),
    }
}

/// Removes names that repeat an earlier entry, ignoring case.
///
/// The first occurrence is kept and the relative order is preserved.
///
/// # Example
///
/// ```
/// use synthetic_email::{PersonName, dedup_names};
///
/// let names = vec![
///     PersonName::parse("Ann Lee").expect("valid"),
///     PersonName::parse("ANN LEE").expect("valid"),
///     PersonName::parse("Bo Chan").expect("valid"),
/// ];
/// let unique = dedup_names(&names);
///
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].display(), "Ann Lee");
/// ```
#[must_use]
pub fn dedup_names(names: &[PersonName]) -> Vec<PersonName> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.display().to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ann Lee", "Ann Lee", "Ann", "Lee")]
    #[case("  Max   Example ", "Max Example", "Max", "Example")]
    #[case("Ada King Lovelace", "Ada King Lovelace", "Ada", "Lovelace")]
    #[case("Cher", "Cher", "Cher", "user")]
    #[case("Zoë Åberg", "Zoë Åberg", "Zoë", "Åberg")]
    fn parses_valid_names(
        #[case] raw: &str,
        #[case] display: &str,
        #[case] first: &str,
        #[case] last: &str,
    ) {
        let name = PersonName::parse(raw).expect("valid name");
        assert_eq!(name.display(), display);
        assert_eq!(name.first(), first);
        assert_eq!(name.last(), last);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("A")]
    #[case("O'Brien")]
    #[case("Agent 47")]
    #[case("user@example.com")]
    fn rejects_invalid_names(#[case] raw: &str) {
        assert!(matches!(
            PersonName::parse(raw),
            Err(InputError::InvalidName { .. })
        ));
    }

    #[test]
    fn synthesis_is_deterministic_for_a_seed() {
        let first = synthesize_names(Some(2026), 50);
        let second = synthesize_names(Some(2026), 50);
        assert_eq!(first, second);
        assert_eq!(first.seed, 2026);
    }

    #[test]
    fn different_seeds_produce_different_names() {
        let first = synthesize_names(Some(1), 20);
        let second = synthesize_names(Some(2), 20);
        assert_ne!(first.names, second.names);
    }

    #[test]
    fn zero_count_yields_no_names() {
        assert!(synthesize_names(Some(9), 0).names.is_empty());
    }

    #[test]
    fn unseeded_synthesis_reports_a_reproducible_seed() {
        let original = synthesize_names(None, 10);
        let replay = synthesize_names(Some(original.seed), 10);
        assert_eq!(original.names, replay.names);
    }

    #[test]
    fn synthesized_names_are_capitalized_alphabetic_words() {
        for name in synthesize_names(Some(42), 200).names {
            for part in [name.first(), name.last()] {
                assert!(part.chars().all(|c| c.is_ascii_alphabetic()), "{part}");
                assert!(
                    part.chars().next().is_some_and(|c| c.is_ascii_uppercase()),
                    "{part}"
                );
            }
            assert!(PersonName::parse(name.display()).is_ok());
        }
    }

    #[test]
    fn capitalize_falls_back_when_empty() {
        assert_eq!(capitalize_or("", FALLBACK_FIRST), "Alex");
        assert_eq!(capitalize_or("--", FALLBACK_LAST), "River");
        assert_eq!(capitalize_or("kalason", FALLBACK_LAST), "Kalason");
    }

    #[test]
    fn dedup_keeps_first_occurrence_ignoring_case() {
        let names: Vec<PersonName> = ["Ann Lee", "Bo Chan", "ann lee", "BO CHAN", "Cy Dunn"]
            .into_iter()
            .map(|raw| PersonName::parse(raw).expect("valid"))
            .collect();

        let unique = dedup_names(&names);
        let displays: Vec<&str> = unique.iter().map(PersonName::display).collect();
        assert_eq!(displays, ["Ann Lee", "Bo Chan", "Cy Dunn"]);
    }
}
