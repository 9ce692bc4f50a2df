//! # prismata
//!
//! Composable, law-abiding prisms for navigating and transforming immutable
//! data, together with the isomorphisms, lenses and traversals they compose
//! with.
//!
//! ## Overview
//!
//! A prism is a pair of functions: a partial `get_option` that may fail to
//! extract a focus from a source, and a total `reverse_get` that always
//! builds a source back from a focus. This crate provides:
//!
//! - **Prism core**: [`optics::Prism`], [`optics::FunctionPrism`],
//!   [`optics::id`], [`optics::from_predicate`], `set`, `imap` and `some`
//! - **Composition**: Prism∘Prism, Prism∘Iso, Iso∘Prism and Lens∘Prism
//! - **Catalog**: ready-made prisms for parsing, encoding, regex matching,
//!   JSON, dates, URLs, type assertions and sum-type extraction
//! - **Traversal**: a prism lifted into a zero-or-one focus traversal that
//!   runs inside an arbitrary applicative effect
//! - **Derive**: `#[derive(Prisms)]` and `#[derive(Lenses)]`
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor` / `Applicative` emulation used by traversals
//! - `control`: the `Either` type
//! - `optics`: prisms, isos, lenses, optionals and traversals
//! - `derive`: derive macros for prisms and lenses
//! - `encoding`, `url`, `date`, `regex`, `json`: catalog prisms backed by
//!   `base64`, `url`, `chrono`, `regex` and `serde_json`
//! - `async`: future-based traversal
//! - `serde`: `Serialize` / `Deserialize` for the crate's value types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use prismata::prelude::*;
//!
//! let positive_int = parse_int().compose(from_predicate(|n: &i64| *n > 0));
//!
//! assert_eq!(positive_int.get_option(&"42".to_string()), Some(42));
//! assert_eq!(positive_int.get_option(&"-5".to_string()), None);
//! assert_eq!(positive_int.reverse_get(7), "7");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use prismata::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    pub use crate::error::PrismError;

    #[cfg(feature = "derive")]
    pub use prismata_derive::{Lenses, Prisms};
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use prismata_derive::{Lenses, Prisms};

pub use error::PrismError;
