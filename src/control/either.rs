//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is the right-biased sum type the prisms treat as
//! "failure on the left, success on the right". The `from_either` prism
//! focuses on the `Right` payload and discards any `Left` value.
//!
//! # Examples
//!
//! ```rust
//! use prismata::control::Either;
//!
//! let right: Either<String, i32> = Either::Right(21);
//! let doubled = right.map_right(|value| value * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let described = doubled.fold(
//!     |error| format!("failed: {error}"),
//!     |value| format!("value: {value}"),
//! );
//! assert_eq!(described, "value: 42");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` carries failure and `Right` carries success.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prismata::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("ok");
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Option<L>`, discarding a `Right` value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a `Left` value.
    ///
    /// This is the `Right → Some`, `Left → None` conversion the
    /// `from_either` prism is built on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prismata::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("boom");
    /// assert_eq!(left.right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Maps the left value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prismata::control::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left("odd") };
    ///
    /// assert_eq!(Either::Right(8).flat_map(halve), Either::Right(4));
    /// assert_eq!(Either::Right(7).flat_map(halve), Either::Left("odd"));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Collapses both alternatives into a single value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the alternatives.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)` and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)` and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// Right-biased, so a prism traversal can run inside `Either` like `Result`.

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_is_right_biased() {
        let left: Either<&str, i32> = Either::Left("boom");
        assert_eq!(left.fmap(|n| n + 1), Either::Left("boom"));
        assert_eq!(Either::<&str, i32>::Right(1).fmap(|n| n + 1), Either::Right(2));
    }

    #[rstest]
    fn map2_keeps_the_first_left() {
        let first: Either<&str, i32> = Either::Left("first");
        let second: Either<&str, i32> = Either::Left("second");
        assert_eq!(first.map2(second, |a, b| a + b), Either::Left("first"));
    }

    #[rstest]
    fn right_is_right_and_not_left() {
        let value: Either<String, i32> = Either::Right(1);
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    #[case(Either::Right(42), Some(42))]
    #[case(Either::Left("error"), None)]
    fn right_converts_to_option(#[case] value: Either<&'static str, i32>, #[case] expected: Option<i32>) {
        assert_eq!(value.right(), expected);
    }

    #[rstest]
    fn fold_selects_the_matching_branch() {
        let left: Either<i32, String> = Either::Left(3);
        assert_eq!(left.fold(|n| n * 2, |s| s.len() as i32), 6);
    }

    #[rstest]
    fn display_uses_variant_names() {
        let left: Either<i32, String> = Either::Left(42);
        let right: Either<i32, String> = Either::Right("hello".to_string());
        assert_eq!(left.to_string(), "Left(42)");
        assert_eq!(right.to_string(), "Right(hello)");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        assert_eq!(Result::<i32, String>::from(either), Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(Result::<i32, String>::from(either), Err("error".to_string()));
    }
}
