//! Regular-expression prisms.
//!
//! Both prisms look at the first match only and keep the text around it, so
//! `reverse_get` rebuilds the source string byte for byte.

use std::borrow::Cow;
use std::collections::BTreeMap;

use ::regex::{Captures, Regex};

use crate::optics::Prism;

/// The first match of a pattern and its surroundings.
///
/// `groups[0]` is the whole match, followed by every capture group in
/// order. A group that did not participate is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// Text before the match.
    pub before: String,
    /// The full match followed by each capture group.
    pub groups: Vec<String>,
    /// Text after the match.
    pub after: String,
}

impl Match {
    /// Returns the full matched text.
    pub fn full(&self) -> &str {
        self.groups.first().map_or("", String::as_str)
    }

    /// Reassembles the string the match was taken from.
    pub fn reconstruct(&self) -> String {
        [self.before.as_str(), self.full(), self.after.as_str()].concat()
    }
}

/// The first match of a pattern with its named groups.
///
/// `groups` holds only the named groups that participated in the match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedMatch {
    /// Text before the match.
    pub before: String,
    /// Named groups, keyed by group name.
    pub groups: BTreeMap<String, String>,
    /// The full matched text.
    pub full: String,
    /// Text after the match.
    pub after: String,
}

impl NamedMatch {
    /// Reassembles the string the match was taken from.
    pub fn reconstruct(&self) -> String {
        [self.before.as_str(), self.full.as_str(), self.after.as_str()].concat()
    }
}

fn split_around<'h>(source: &'h str, captures: &Captures<'h>) -> Option<(&'h str, &'h str, &'h str)> {
    let whole = captures.get(0)?;
    Some((
        &source[..whole.start()],
        whole.as_str(),
        &source[whole.end()..],
    ))
}

/// Focuses on the first match of a pattern as a [`Match`].
#[derive(Debug, Clone)]
pub struct RegexPrism {
    regex: Regex,
}

impl RegexPrism {
    /// Creates a prism for `regex`.
    #[must_use]
    pub const fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Returns the pattern.
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Prism<String, Match> for RegexPrism {
    fn get_option(&self, source: &String) -> Option<Match> {
        let captures = self.regex.captures(source)?;
        let (before, _, after) = split_around(source, &captures)?;
        let groups = captures
            .iter()
            .map(|group| group.map_or("", |found| found.as_str()).to_string())
            .collect();
        Some(Match {
            before: before.to_string(),
            groups,
            after: after.to_string(),
        })
    }

    fn reverse_get(&self, value: Match) -> String {
        value.reconstruct()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("RegexMatcher")
    }
}

/// Focuses on the first match of a pattern as a [`NamedMatch`].
#[derive(Debug, Clone)]
pub struct NamedRegexPrism {
    regex: Regex,
}

impl NamedRegexPrism {
    /// Creates a prism for `regex`.
    #[must_use]
    pub const fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Returns the pattern.
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Prism<String, NamedMatch> for NamedRegexPrism {
    fn get_option(&self, source: &String) -> Option<NamedMatch> {
        let captures = self.regex.captures(source)?;
        let (before, full, after) = split_around(source, &captures)?;
        let groups = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                captures
                    .name(name)
                    .map(|found| (name.to_string(), found.as_str().to_string()))
            })
            .collect();
        Some(NamedMatch {
            before: before.to_string(),
            groups,
            full: full.to_string(),
            after: after.to_string(),
        })
    }

    fn reverse_get(&self, value: NamedMatch) -> String {
        value.reconstruct()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("RegexNamedMatcher")
    }
}

/// Creates a prism matching `regex` against a string.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use prismata::optics::{Prism, regex_matcher};
///
/// let prism = regex_matcher(Regex::new(r"(\d+)-(\d+)").unwrap());
/// let found = prism.get_option(&"pages 10-20 of 99".to_string()).unwrap();
///
/// assert_eq!(found.before, "pages ");
/// assert_eq!(found.groups, vec!["10-20", "10", "20"]);
/// assert_eq!(found.after, " of 99");
/// assert_eq!(prism.reverse_get(found), "pages 10-20 of 99");
/// ```
#[must_use]
pub const fn regex_matcher(regex: Regex) -> RegexPrism {
    RegexPrism::new(regex)
}

/// Creates a prism matching `regex` and collecting its named groups.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use prismata::optics::{Prism, regex_named_matcher};
///
/// let prism = regex_named_matcher(Regex::new(r"(?P<user>\w+)@(?P<host>\w+)").unwrap());
/// let found = prism.get_option(&"mail alice@example now".to_string()).unwrap();
///
/// assert_eq!(found.groups["user"], "alice");
/// assert_eq!(found.groups["host"], "example");
/// assert_eq!(found.full, "alice@example");
/// assert_eq!(prism.reverse_get(found), "mail alice@example now");
/// ```
#[must_use]
pub const fn regex_named_matcher(regex: Regex) -> NamedRegexPrism {
    NamedRegexPrism::new(regex)
}
