//! Applicative type class - lifting values into an effect.
//!
//! `Applicative` adds `pure` to `Functor`. A prism traversal needs exactly
//! this pair: `pure` to return an untouched source when the prism does not
//! match, and `fmap` to rebuild the source when it does.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use prismata::typeclass::Applicative;
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Some(42));
//!
//! let sum = Some(3).map2(Some(4), |x, y| x + y);
//! assert_eq!(sum, Some(7));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A functor that can lift plain values and combine independent effects.
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prismata::typeclass::Applicative;
    ///
    /// let lifted: Result<&str, ()> = <Result<(), ()>>::pure("hello");
    /// assert_eq!(lifted, Ok("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    ///
    /// If either side is a failure (in the sense of the concrete
    /// applicative) the result fails.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_is_some() {
        assert_eq!(<Option<()>>::pure("x"), Some("x"));
    }

    #[rstest]
    #[case(Ok(1), Ok(2), Ok(3))]
    #[case(Err("left"), Ok(2), Err("left"))]
    #[case(Ok(1), Err("right"), Err("right"))]
    fn result_map2(
        #[case] first: Result<i32, &'static str>,
        #[case] second: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(first.map2(second, |a, b| a + b), expected);
    }

    #[rstest]
    fn option_product() {
        assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
        assert_eq!(Some(1).product(None::<&str>), None);
    }

    #[rstest]
    fn identity_homomorphism_law() {
        let f = |n: i32| n * 2;
        let applied = <Identity<()>>::pure(f).map2(<Identity<()>>::pure(21), |g, x| g(x));
        assert_eq!(applied, <Identity<()>>::pure(f(21)));
    }
}
