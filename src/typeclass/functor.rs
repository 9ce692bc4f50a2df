//! Functor type class - mapping over the value inside an effect.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use prismata::typeclass::Functor;
//!
//! let parsed: Result<i32, String> = Ok(5);
//! assert_eq!(parsed.fmap(|n| n.to_string()), Ok("5".to_string()));
//!
//! let missing: Option<i32> = None;
//! assert_eq!(missing.fmap(|n| n + 1), None);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for effects whose payload can be mapped.
///
/// Prism traversals use `fmap` to push the rebuilt source back into the
/// caller's effect after the focus has been transformed.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the inner value with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> B,
    {
        Box::new(function(*self))
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}
