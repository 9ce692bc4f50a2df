//! Ready-made prisms for common conversions.
//!
//! Each entry wraps a fallible forward conversion (parse, decode, downcast)
//! and a total backward one. Whatever error the forward conversion reports
//! is collapsed to `None`; use [`Prism::get_or_error`](super::Prism::get_or_error)
//! when a diagnostic is needed at the boundary.
//!
//! Entries without configuration return `impl Prism + Clone`. Entries
//! configured with an engine, a format, a pattern or a base URL return a
//! named struct.
//!
//! | Prism | Source | Focus | Feature |
//! |-------|--------|-------|---------|
//! | [`from_either`] | `Either<E, T>` | `T` | |
//! | [`from_result`] | `Result<T, E>` | `T` | |
//! | [`from_option`] | `Option<T>` | `T` | |
//! | [`deref`] | `Option<P>` | `P` | |
//! | [`from_zero`], [`from_non_zero`] | `T` | `T` | |
//! | [`from_non_empty`] | `String` | `String` | |
//! | [`instance_of`] | `Box<dyn Any>` | `T` | |
//! | [`parse`] and the `parse_*` family | `String` | `T: FromStr` | |
//! | `from_encoding` | `String` | `Vec<u8>` | `encoding` |
//! | `parse_url`, `parse_url_with_base` | `String` | `Url` | `url` |
//! | `parse_date`, `parse_date_time`, `parse_rfc3339` | `String` | chrono types | `date` |
//! | `regex_matcher`, `regex_named_matcher` | `String` | `Match`, `NamedMatch` | `regex` |
//! | `from_json`, `from_json_str` | `Vec<u8>`, `String` | `T: Deserialize` | `json` |

mod any;
mod either;
mod parse;
mod zero;

#[cfg(feature = "date")]
mod date;
#[cfg(feature = "encoding")]
mod encoding;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "regex")]
mod regex;
#[cfg(feature = "url")]
mod url;

pub use any::instance_of;
pub use either::{deref, from_either, from_option, from_result};
pub use parse::{
    parse, parse_bool, parse_f32, parse_float, parse_i8, parse_i16, parse_i32, parse_i64,
    parse_i128, parse_int, parse_isize, parse_u8, parse_u16, parse_u32, parse_u64, parse_u128,
    parse_usize,
};
pub use zero::{from_non_empty, from_non_zero, from_zero};

#[cfg(feature = "date")]
pub use date::{DatePrism, DateTimePrism, parse_date, parse_date_time, parse_rfc3339};
#[cfg(feature = "encoding")]
pub use encoding::{EncodingPrism, from_encoding};
#[cfg(feature = "json")]
pub use json::{JsonPrism, JsonStrPrism, from_json, from_json_str};
#[cfg(feature = "regex")]
pub use self::regex::{Match, NamedMatch, NamedRegexPrism, RegexPrism, regex_matcher, regex_named_matcher};
#[cfg(feature = "url")]
pub use self::url::{UrlPrism, parse_url, parse_url_with_base};

static_assertions::assert_impl_all!(
    crate::optics::FilterPrism<u32, fn(&u32) -> bool>: Send, Sync, Clone
);
static_assertions::assert_impl_all!(
    crate::optics::FunctionPrism<String, i64, fn(&String) -> Option<i64>, fn(i64) -> String>:
        Send,
        Sync,
        Clone
);

#[cfg(feature = "date")]
static_assertions::assert_impl_all!(DatePrism: Send, Sync, Clone);
#[cfg(feature = "date")]
static_assertions::assert_impl_all!(DateTimePrism: Send, Sync, Clone);
#[cfg(feature = "encoding")]
static_assertions::assert_impl_all!(
    EncodingPrism<base64::engine::GeneralPurpose>: Send, Sync, Clone
);
#[cfg(feature = "json")]
static_assertions::assert_impl_all!(JsonPrism<Vec<String>>: Send, Sync, Clone);
#[cfg(feature = "json")]
static_assertions::assert_impl_all!(JsonStrPrism<Vec<String>>: Send, Sync, Clone);
#[cfg(feature = "regex")]
static_assertions::assert_impl_all!(RegexPrism: Send, Sync, Clone);
#[cfg(feature = "regex")]
static_assertions::assert_impl_all!(NamedRegexPrism: Send, Sync, Clone);
#[cfg(feature = "url")]
static_assertions::assert_impl_all!(UrlPrism: Send, Sync, Clone);
