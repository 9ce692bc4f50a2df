//! Date and time parsing prisms.
//!
//! Layouts use chrono's `strftime` syntax (`%Y-%m-%d`, `%H:%M:%S`, ...).
//! A layout that does not fully determine the value (for example a date
//! layout without a year) never matches.
//!
//! A layout chrono cannot render (an unknown specifier such as `%Q`) makes
//! `reverse_get` return an empty string and emit a `warn!` event, since
//! `reverse_get` must be total. `try_reverse_get` reports the failure.

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::error::PrismError;
use crate::optics::{FunctionPrism, Prism};

/// Renders a chrono `DelayedFormat` without panicking on a bad layout.
fn render(prism: &str, rendered: impl Display) -> Result<String, PrismError> {
    let mut out = String::new();
    write!(out, "{rendered}").map_err(|error: fmt::Error| PrismError::Encode {
        prism: prism.to_owned(),
        source: Box::new(error),
    })?;
    Ok(out)
}

fn render_or_empty(prism: &str, format: &str, result: Result<String, PrismError>) -> String {
    result.unwrap_or_else(|error| {
        warn!(prism, format, %error, "layout cannot render the value, returning an empty string");
        String::new()
    })
}

/// Focuses on the calendar date a string spells in a fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePrism {
    format: Cow<'static, str>,
}

impl DatePrism {
    /// Creates a prism for the given layout.
    #[must_use]
    pub fn new(format: impl Into<Cow<'static, str>>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Returns the layout.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Renders `value` in the layout, reporting a layout chrono cannot
    /// render instead of hiding it.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::Encode`] when the layout contains a specifier
    /// chrono does not support.
    pub fn try_reverse_get(&self, value: NaiveDate) -> Result<String, PrismError> {
        render(&self.name(), value.format(&self.format))
    }
}

impl Prism<String, NaiveDate> for DatePrism {
    fn get_option(&self, source: &String) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(source, &self.format).ok()
    }

    fn reverse_get(&self, value: NaiveDate) -> String {
        render_or_empty(&self.name(), &self.format, self.try_reverse_get(value))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("ParseDate")
    }
}

/// Focuses on the date and time a string spells in a fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimePrism {
    format: Cow<'static, str>,
}

impl DateTimePrism {
    /// Creates a prism for the given layout.
    #[must_use]
    pub fn new(format: impl Into<Cow<'static, str>>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Returns the layout.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Renders `value` in the layout.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::Encode`] when the layout contains a specifier
    /// chrono does not support.
    pub fn try_reverse_get(&self, value: NaiveDateTime) -> Result<String, PrismError> {
        render(&self.name(), value.format(&self.format))
    }
}

impl Prism<String, NaiveDateTime> for DateTimePrism {
    fn get_option(&self, source: &String) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(source, &self.format).ok()
    }

    fn reverse_get(&self, value: NaiveDateTime) -> String {
        render_or_empty(&self.name(), &self.format, self.try_reverse_get(value))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("ParseDateTime")
    }
}

/// Parses dates in `format`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use prismata::optics::{Prism, parse_date};
///
/// let prism = parse_date("%Y-%m-%d");
///
/// assert_eq!(
///     prism.get_option(&"2024-02-29".to_string()),
///     NaiveDate::from_ymd_opt(2024, 2, 29)
/// );
/// assert_eq!(prism.get_option(&"2023-02-29".to_string()), None);
/// assert_eq!(prism.get_option(&"29/02/2024".to_string()), None);
/// ```
#[must_use]
pub fn parse_date(format: impl Into<Cow<'static, str>>) -> DatePrism {
    DatePrism::new(format)
}

/// Parses date-times in `format`.
#[must_use]
pub fn parse_date_time(format: impl Into<Cow<'static, str>>) -> DateTimePrism {
    DateTimePrism::new(format)
}

/// Parses RFC 3339 timestamps, keeping their UTC offset.
///
/// `reverse_get` renders with [`DateTime::to_rfc3339`], which always
/// writes the offset numerically (`Z` becomes `+00:00`).
#[must_use]
pub fn parse_rfc3339() -> impl Prism<String, DateTime<FixedOffset>> + Clone {
    FunctionPrism::named(
        "ParseRfc3339",
        |source: &String| DateTime::parse_from_rfc3339(source).ok(),
        |value: DateTime<FixedOffset>| value.to_rfc3339(),
    )
}
