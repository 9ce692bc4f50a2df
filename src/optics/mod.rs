//! Prisms and the optics they compose with.
//!
//! A [`Prism`] focuses on a part of a value that may be absent: one variant
//! of an enum, the number inside a numeric string, the bytes inside a base64
//! string. Prisms compose with each other and with the other optics here.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Prism <: Traversal
//! Iso <: Lens
//! Lens + Prism = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Prism`]: partial extraction, total construction
//! - [`Iso`]: lossless conversion between two types
//! - [`Lens`]: get/set access to a struct field
//! - [`Optional`]: a Lens followed by Prisms
//! - [`Traversal`]: zero or more foci
//!
//! The [`catalog`] holds ready-made prisms for common conversions; its
//! functions are re-exported here.
//!
//! # Example
//!
//! ```
//! use prismata::optics::{Prism, from_either, from_predicate};
//! use prismata::control::Either;
//!
//! let positive = from_either::<String, i32>().compose(from_predicate(|n: &i32| *n > 0));
//!
//! assert_eq!(positive.get_option(&Either::Right(42)), Some(42));
//! assert_eq!(positive.get_option(&Either::Right(-5)), None);
//! assert_eq!(positive.get_option(&Either::Left("err".to_string())), None);
//! ```

pub mod catalog;
mod compose;
mod iso;
mod lens;
mod optional;
mod primitives;
mod prism;
mod traced;
mod traversal;

pub use compose::{IsoPrismComposition, PrismIsoComposition};
pub use iso::{ComposedIso, FunctionIso, Iso, IsoAsPrism, ReversedIso, iso_identity};
pub use lens::{ComposedLens, FunctionLens, Lens};
pub use optional::{
    ComposedOptional, LensComposeExtension, LensPrismComposition, Optional,
    OptionalLensComposition,
};
pub use primitives::{FilterPrism, PrismSomeExtension, SomePrism, from_predicate, id, some};
pub use prism::{ComposedPrism, FunctionPrism, ImappedPrism, Prism, PrismAsTraversal};
pub use traced::TracedPrism;
pub use traversal::{ComposedTraversal, Traversal, VecTraversal};

pub use catalog::{
    deref, from_either, from_non_empty, from_non_zero, from_option, from_result, from_zero,
    instance_of, parse, parse_bool, parse_f32, parse_float, parse_i8, parse_i16, parse_i32,
    parse_i64, parse_i128, parse_int, parse_isize, parse_u8, parse_u16, parse_u32, parse_u64,
    parse_u128, parse_usize,
};

#[cfg(feature = "encoding")]
pub use catalog::{EncodingPrism, from_encoding};

#[cfg(feature = "url")]
pub use catalog::{UrlPrism, parse_url, parse_url_with_base};

#[cfg(feature = "date")]
pub use catalog::{DatePrism, DateTimePrism, parse_date, parse_date_time, parse_rfc3339};

#[cfg(feature = "regex")]
pub use catalog::{Match, NamedMatch, NamedRegexPrism, RegexPrism, regex_matcher, regex_named_matcher};

#[cfg(feature = "json")]
pub use catalog::{JsonPrism, JsonStrPrism, from_json, from_json_str};
