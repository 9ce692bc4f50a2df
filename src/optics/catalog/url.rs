//! URL parsing prisms.

use std::borrow::Cow;

use ::url::Url;

use crate::optics::Prism;

/// Focuses on the [`Url`] a string parses to.
///
/// Without a base only absolute URLs match. With a base, relative
/// references (including the empty string) are resolved against it.
#[derive(Debug, Clone, Default)]
pub struct UrlPrism {
    base: Option<Url>,
}

impl UrlPrism {
    /// Creates a prism accepting absolute URLs only.
    #[must_use]
    pub const fn new() -> Self {
        Self { base: None }
    }

    /// Creates a prism resolving relative references against `base`.
    #[must_use]
    pub const fn with_base(base: Url) -> Self {
        Self { base: Some(base) }
    }

    /// Returns the base URL, if any.
    pub const fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }
}

impl Prism<String, Url> for UrlPrism {
    fn get_option(&self, source: &String) -> Option<Url> {
        match &self.base {
            Some(base) => base.join(source).ok(),
            None => Url::parse(source).ok(),
        }
    }

    fn reverse_get(&self, value: Url) -> String {
        value.into()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("ParseUrl")
    }
}

/// Parses absolute URLs.
///
/// Only absolute URLs match. The empty string and relative references such
/// as `example.com/x` or `/path` are rejected, because `Url` always carries
/// a scheme. Use [`parse_url_with_base`] to accept them, resolved against a
/// base.
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, parse_url};
///
/// let prism = parse_url();
/// let url = prism.get_option(&"https://example.com/a?b=c".to_string()).unwrap();
///
/// assert_eq!(url.host_str(), Some("example.com"));
/// assert_eq!(prism.get_option(&"/relative/path".to_string()), None);
/// assert_eq!(prism.get_option(&String::new()), None);
/// ```
#[must_use]
pub const fn parse_url() -> UrlPrism {
    UrlPrism::new()
}

/// Parses URLs relative to `base`.
///
/// # Example
///
/// ```
/// use url::Url;
/// use prismata::optics::{Prism, parse_url_with_base};
///
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// let prism = parse_url_with_base(base.clone());
///
/// let resolved = prism.get_option(&"guide.html".to_string()).unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/docs/guide.html");
/// assert_eq!(prism.get_option(&String::new()), Some(base));
/// ```
#[must_use]
pub const fn parse_url_with_base(base: Url) -> UrlPrism {
    UrlPrism::with_base(base)
}
