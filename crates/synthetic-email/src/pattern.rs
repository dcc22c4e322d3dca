//! Username patterns and their renderer.
//!
//! A pattern is a template such as `{first}.{last}{n2}`. Templates are
//! parsed once, when the pattern is registered, so rendering cannot fail.

use rand::Rng;

use crate::error::PatternError;
use crate::slug::is_username_char;

/// A placeholder recognised inside a pattern template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{first}`: the full first-name slug.
    First,
    /// `{last}`: the full last-name slug.
    Last,
    /// `{f}`: the first character of the first-name slug.
    FirstInitial,
    /// `{l}`: the first character of the last-name slug.
    LastInitial,
    /// `{n2}`: two random digits.
    Digits2,
    /// `{n3}`: three random digits.
    Digits3,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "f" => Some(Self::FirstInitial),
            "l" => Some(Self::LastInitial),
            "n2" => Some(Self::Digits2),
            "n3" => Some(Self::Digits3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed username pattern.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use synthetic_email::Pattern;
///
/// let pattern = Pattern::parse("initial-last", "{f}{last}").expect("valid template");
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// assert_eq!(pattern.render("ann", "lee", &mut rng), "alee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    id: String,
    template: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a template and binds it to an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the template uses an unknown placeholder,
    /// has unbalanced braces, contains a literal character that is not valid
    /// in a username, or contains no placeholder at all.
    pub fn parse(id: impl Into<String>, template: impl Into<String>) -> Result<Self, PatternError> {
        let template_text = template.into();
        let segments = parse_segments(&template_text)?;
        Ok(Self {
            id: id.into(),
            template: template_text,
            segments,
        })
    }

    /// Returns the pattern identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns `true` if rendering draws random digits.
    #[must_use]
    pub fn uses_digits(&self) -> bool {
        self.segments.iter().any(|segment| {
            matches!(
                segment,
                Segment::Placeholder(Placeholder::Digits2 | Placeholder::Digits3)
            )
        })
    }

    /// Substitutes the placeholders for the given slugs.
    ///
    /// Digit placeholders draw from `rng`, each independently, so the caller
    /// controls reproducibility through the RNG seed.
    pub fn render<R: Rng + ?Sized>(&self, first: &str, last: &str, rng: &mut R) -> String {
        let mut out = String::with_capacity(first.len() + last.len() + self.template.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(Placeholder::First) => out.push_str(first),
                Segment::Placeholder(Placeholder::Last) => out.push_str(last),
                Segment::Placeholder(Placeholder::FirstInitial) => {
                    out.extend(first.chars().take(1));
                }
                Segment::Placeholder(Placeholder::LastInitial) => {
                    out.extend(last.chars().take(1));
                }
                Segment::Placeholder(Placeholder::Digits2) => {
                    out.push_str(&format!("{:02}", rng.random_range(0..100_u32)));
                }
                Segment::Placeholder(Placeholder::Digits3) => {
                    out.push_str(&format!("{:03}", rng.random_range(0..1000_u32)));
                }
            }
        }
        out
    }
}

fn parse_segments(template: &str) -> Result<Vec<Segment>, PatternError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    name.push(inner);
                }
                if !closed {
                    return Err(PatternError::UnterminatedPlaceholder {
                        template: template.to_owned(),
                    });
                }
                let placeholder = Placeholder::from_name(&name).ok_or_else(|| {
                    PatternError::UnknownPlaceholder {
                        template: template.to_owned(),
                        placeholder: name.clone(),
                    }
                })?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(placeholder));
            }
            '}' => {
                return Err(PatternError::UnmatchedBrace {
                    template: template.to_owned(),
                });
            }
            other if is_username_char(other) => literal.push(other),
            other => {
                return Err(PatternError::InvalidLiteral {
                    template: template.to_owned(),
                    character: other,
                });
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    if !segments
        .iter()
        .any(|segment| matches!(segment, Segment::Placeholder(_)))
    {
        return Err(PatternError::NoPlaceholders {
            template: template.to_owned(),
        });
    }
    Ok(segments)
}

/// Built-in pattern table: identifier, template, enabled by default.
const BUILTIN_PATTERNS: &[(&str, &str, bool)] = &[
    ("first-dot-last", "{first}.{last}", true),
    ("first-last", "{first}{last}", true),
    ("initial-last", "{f}{last}", true),
    ("first-initial", "{first}{l}", true),
    ("last-dot-first", "{last}.{first}", true),
    ("first-underscore-last", "{first}_{last}", true),
    ("first-hyphen-last", "{first}-{last}", false),
    ("first-dot-last-n2", "{first}.{last}{n2}", false),
    ("first-last-n3", "{first}{last}{n3}", false),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct RegisteredPattern {
    pattern: Pattern,
    enabled: bool,
}

/// The fixed set of username patterns with their enabled flags.
///
/// # Example
///
/// ```
/// use synthetic_email::PatternRegistry;
///
/// let mut registry = PatternRegistry::builtin();
/// assert_eq!(registry.enabled().count(), 6);
///
/// registry.enable_only(["first-last-n3"]).expect("known pattern");
/// let ids: Vec<&str> = registry.enabled().map(|p| p.id()).collect();
/// assert_eq!(ids, ["first-last-n3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRegistry {
    patterns: Vec<RegisteredPattern>,
}

impl PatternRegistry {
    /// Returns the built-in registry with its default enabled flags.
    #[must_use]
    pub fn builtin() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .filter_map(|(id, template, enabled)| {
                Pattern::parse(*id, *template)
                    .ok()
                    .map(|pattern| RegisteredPattern {
                        pattern,
                        enabled: *enabled,
                    })
            })
            .collect();
        Self { patterns }
    }

    /// Looks up a pattern by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|entry| entry.pattern.id() == id)
            .map(|entry| &entry.pattern)
    }

    /// Returns `true` if the identified pattern is enabled.
    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.patterns
            .iter()
            .any(|entry| entry.enabled && entry.pattern.id() == id)
    }

    /// Enables or disables a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownPattern`] if no pattern has this id.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> Result<(), PatternError> {
        let entry = self
            .patterns
            .iter_mut()
            .find(|entry| entry.pattern.id() == id)
            .ok_or_else(|| PatternError::UnknownPattern { id: id.to_owned() })?;
        entry.enabled = enabled;
        Ok(())
    }

    /// Enables exactly the listed patterns and disables the rest.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownPattern`] for the first unknown id;
    /// the registry is left unchanged in that case.
    pub fn enable_only<I, S>(&mut self, ids: I) -> Result<(), PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<S> = ids.into_iter().collect();
        if let Some(unknown) = wanted.iter().find(|id| self.get(id.as_ref()).is_none()) {
            return Err(PatternError::UnknownPattern {
                id: unknown.as_ref().to_owned(),
            });
        }
        for entry in &mut self.patterns {
            entry.enabled = wanted.iter().any(|id| id.as_ref() == entry.pattern.id());
        }
        Ok(())
    }

    /// Iterates over enabled patterns in registry order.
    pub fn enabled(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| &entry.pattern)
    }

    /// Iterates over every pattern with its enabled flag.
    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, bool)> {
        self.patterns
            .iter()
            .map(|entry| (&entry.pattern, entry.enabled))
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
