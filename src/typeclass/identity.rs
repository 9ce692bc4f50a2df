//! Identity wrapper type - the effect that does nothing.
//!
//! Running a prism traversal inside `Identity` is the same as a plain
//! `modify`; it is the base case the effectful traversals reduce to.

use super::TypeConstructor;

/// A transparent wrapper around a single value.
///
/// # Examples
///
/// ```rust
/// use prismata::typeclass::{Functor, Identity};
///
/// let doubled = Identity::new(21).fmap(|n| n * 2);
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    #[inline]
    fn from(value: A) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_and_into_inner_roundtrip() {
        assert_eq!(Identity::new("hello").into_inner(), "hello");
    }

    #[rstest]
    fn as_inner_borrows() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner().len(), 5);
    }
}
