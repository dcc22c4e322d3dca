//! Slug normalisation for name fragments and rendered usernames.
//!
//! # Rules
//!
//! - Slugs contain only `a-z` and `0-9`
//! - Usernames contain only `a-z`, `0-9`, `.`, `_`, and `-`
//! - Usernames never start or end with a separator, never contain two
//!   separators in a row, and are at least [`USERNAME_MIN`] characters long

/// Minimum accepted length for a rendered username.
pub const USERNAME_MIN: usize = 3;

/// Normalises a name fragment into a slug usable inside a username.
///
/// The fragment is lowercased and every character outside `[a-z0-9]` is
/// dropped. Returns `None` when nothing survives, which marks the
/// combination as unrenderable.
///
/// # Examples
///
/// ```
/// use synthetic_email::slugify;
///
/// assert_eq!(slugify("Ann").as_deref(), Some("ann"));
/// assert_eq!(slugify("O'Brien").as_deref(), Some("obrien"));
/// assert_eq!(slugify("Zoë").as_deref(), Some("zo"));
/// assert_eq!(slugify("---"), None);
/// ```
#[must_use]
pub fn slugify(fragment: &str) -> Option<String> {
    let slug: String = fragment
        .trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if slug.is_empty() { None } else { Some(slug) }
}

/// Returns `true` if the character may appear in a username.
#[must_use]
pub const fn is_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || is_separator(c)
}

const fn is_separator(c: char) -> bool {
    matches!(c, '.' | '_' | '-')
}

/// Cleans a rendered username into its final local-part form.
///
/// Characters outside the username set are dropped, runs of two or more
/// separators collapse into a single `.`, and separators are trimmed from
/// both ends. Returns `None` if the result is shorter than
/// [`USERNAME_MIN`].
///
/// # Examples
///
/// ```
/// use synthetic_email::sanitize_username;
///
/// assert_eq!(sanitize_username("ann.lee").as_deref(), Some("ann.lee"));
/// assert_eq!(sanitize_username("ann._lee").as_deref(), Some("ann.lee"));
/// assert_eq!(sanitize_username("-ann-").as_deref(), Some("ann"));
/// assert_eq!(sanitize_username("a."), None);
/// ```
#[must_use]
pub fn sanitize_username(raw: &str) -> Option<String> {
    let mut cleaned = String::with_capacity(raw.len());
    let mut pending_separators: Vec<char> = Vec::new();

    for c in raw.chars().filter(|c| is_username_char(*c)) {
        if is_separator(c) {
            pending_separators.push(c);
            continue;
        }
        if !cleaned.is_empty() {
            match pending_separators.as_slice() {
                [] => {}
                [single] => cleaned.push(*single),
                _ => cleaned.push('.'),
            }
        }
        pending_separators.clear();
        cleaned.push(c);
    }

    if cleaned.chars().count() < USERNAME_MIN {
        return None;
    }
    Some(cleaned)
}
