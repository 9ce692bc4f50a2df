//! Control structures consumed by the optics.
//!
//! - [`Either`]: a value that is one of two alternatives, the sum type the
//!   `from_either` prism extracts from
//!
//! # Examples
//!
//! ```rust
//! use prismata::control::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! assert!(parsed.is_right());
//! assert_eq!(parsed.right(), Some(42));
//! ```

mod either;

pub use either::Either;
