//! Traversal optics for focusing on zero or more elements.
//!
//! A Traversal generalizes a Prism (zero or one focus) to any number of
//! foci. Every prism becomes a traversal through [`Prism::to_traversal`],
//! which also lets its transformation run inside an effect such as
//! `Option`, `Result` or a future.
//!
//! # Laws
//!
//! 1. **Modify Identity Law**: `traversal.modify_all(source, |x| x) == source`
//! 2. **Modify Composition Law**:
//!    `traversal.modify_all(traversal.modify_all(source, f), g) == traversal.modify_all(source, |x| g(f(x)))`
//!
//! # Examples
//!
//! ```
//! use prismata::optics::{Prism, Traversal, VecTraversal, parse_int};
//!
//! let numbers = VecTraversal::new().compose(parse_int().to_traversal());
//! let inputs = vec!["1".to_string(), "x".to_string(), "3".to_string()];
//!
//! assert_eq!(numbers.get_all(&inputs), vec![1, 3]);
//! assert_eq!(
//!     numbers.modify_all(inputs, |n| n * 10),
//!     vec!["10".to_string(), "x".to_string(), "30".to_string()]
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::prism::{Prism, PrismAsTraversal};
use crate::typeclass::Applicative;

/// A Traversal focuses on zero or more elements within a structure.
///
/// Foci are returned by value; a traversal over borrowed data clones.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused elements)
pub trait Traversal<S, A> {
    /// Returns all focused elements in order.
    fn get_all(&self, source: &S) -> Vec<A>;

    /// Modifies all focused elements by applying a function.
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Sets all focused elements to the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{Traversal, VecTraversal};
    ///
    /// let traversal = VecTraversal::new();
    /// assert_eq!(traversal.set_all(vec![1, 2, 3], 0), vec![0, 0, 0]);
    /// ```
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify_all(source, |_| value.clone())
    }

    /// Folds over all focused elements.
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Returns the number of focused elements.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Tests if all focused elements satisfy a predicate.
    ///
    /// Returns `true` if there are no focused elements.
    fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(|element| predicate(element))
    }

    /// Tests if any focused element satisfies a predicate.
    fn exists<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().any(|element| predicate(element))
    }

    /// Returns the first focused element, if any.
    fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }

    /// Composes this traversal with another traversal on each focus.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }
}

/// A traversal over every element of a `Vec`.
pub struct VecTraversal<A> {
    _marker: PhantomData<fn() -> A>,
}

impl<A> VecTraversal<A> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("VecTraversal")
    }
}

impl<A: Clone> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn get_all(&self, source: &Vec<A>) -> Vec<A> {
        source.clone()
    }

    fn modify_all<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }

    fn length(&self, source: &Vec<A>) -> usize {
        source.len()
    }
}

/// Two traversals chained: `second` runs on every focus of `first`.
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<fn() -> A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new `ComposedTraversal`.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, A> fmt::Debug for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn get_all(&self, source: &S) -> Vec<B> {
        self.first
            .get_all(source)
            .iter()
            .flat_map(|intermediate| self.second.get_all(intermediate))
            .collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first.modify_all(source, |intermediate| {
            self.second.modify_all(intermediate, &mut function)
        })
    }
}

impl<P, S, A> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.prism.get_option(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.prism.modify(source, function)
    }

    fn length(&self, source: &S) -> usize {
        usize::from(self.prism.is_match(source))
    }

    fn head_option(&self, source: &S) -> Option<A> {
        self.prism.get_option(source)
    }
}

impl<P, S, A> PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
{
    /// Runs `function` on the focus inside an applicative effect.
    ///
    /// On a match the effect returned by `function` is mapped back through
    /// `reverse_get`. On a mismatch the untouched source is lifted with
    /// `pure`, so the effect reports success.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{Prism, parse_int};
    /// use prismata::typeclass::Identity;
    ///
    /// let traversal = parse_int().to_traversal();
    ///
    /// let halved = traversal.traverse("8".to_string(), |n| {
    ///     if n % 2 == 0 { Some(n / 2) } else { None }
    /// });
    /// assert_eq!(halved, Some("4".to_string()));
    ///
    /// let untouched = traversal.traverse("eight".to_string(), |n| Some(n / 2));
    /// assert_eq!(untouched, Some("eight".to_string()));
    ///
    /// let plain = traversal.traverse("1".to_string(), |n| Identity(n + 1));
    /// assert_eq!(plain, Identity("2".to_string()));
    /// ```
    pub fn traverse<FA, F>(&self, source: S, function: F) -> FA::WithType<S>
    where
        FA: Applicative<Inner = A>,
        F: FnOnce(A) -> FA,
    {
        match self.prism.get_option(&source) {
            Some(value) => function(value).fmap(|rebuilt| self.prism.reverse_get(rebuilt)),
            None => FA::pure(source),
        }
    }

    /// [`traverse`](Self::traverse) specialized to `Option`.
    pub fn traverse_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> Option<A>,
    {
        match self.prism.get_option(&source) {
            Some(value) => function(value).map(|rebuilt| self.prism.reverse_get(rebuilt)),
            None => Some(source),
        }
    }

    /// [`traverse`](Self::traverse) specialized to `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `function`.
    pub fn traverse_result<E, F>(&self, source: S, function: F) -> Result<S, E>
    where
        F: FnOnce(A) -> Result<A, E>,
    {
        match self.prism.get_option(&source) {
            Some(value) => function(value).map(|rebuilt| self.prism.reverse_get(rebuilt)),
            None => Ok(source),
        }
    }

    /// Runs an asynchronous transformation on the focus.
    ///
    /// The returned future resolves to the rebuilt source, or to the
    /// untouched source when the prism does not match. `function` is only
    /// called on a match.
    #[cfg(feature = "async")]
    pub fn traverse_future<F, Fut>(&self, source: S, function: F) -> impl Future<Output = S>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = A>,
    {
        use futures::FutureExt;
        use futures::future;

        match self.prism.get_option(&source) {
            Some(value) => function(value)
                .map(move |rebuilt| self.prism.reverse_get(rebuilt))
                .left_future(),
            None => future::ready(source).right_future(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::FunctionPrism;
    use crate::typeclass::Identity;
    use rstest::rstest;

    fn even() -> impl Prism<u32, u32> + Clone {
        FunctionPrism::new(|n: &u32| (n % 2 == 0).then_some(*n), |n: u32| n)
    }

    #[rstest]
    fn vec_traversal_modify_all() {
        let traversal = VecTraversal::new();
        assert_eq!(traversal.modify_all(vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
        assert_eq!(traversal.length(&vec![1, 2, 3]), 3);
    }

    #[rstest]
    #[case(4, vec![4])]
    #[case(5, vec![])]
    fn prism_traversal_has_at_most_one_focus(#[case] source: u32, #[case] expected: Vec<u32>) {
        assert_eq!(even().to_traversal().get_all(&source), expected);
    }

    #[rstest]
    fn composed_traversal_skips_mismatches() {
        let evens = VecTraversal::new().compose(even().to_traversal());
        let numbers = vec![1, 2, 3, 4];
        assert_eq!(evens.get_all(&numbers), vec![2, 4]);
        assert_eq!(evens.fold(&numbers, 0, |sum, n| sum + n), 6);
        assert!(evens.for_all(&numbers, |n| n % 2 == 0));
        assert!(!evens.exists(&numbers, |n| *n > 4));
        assert_eq!(evens.head_option(&numbers), Some(2));
        assert_eq!(evens.set_all(numbers, 0), vec![1, 0, 3, 0]);
    }

    #[rstest]
    fn traverse_with_result_propagates_the_error() {
        let traversal = even().to_traversal();
        let failed: Result<u32, &str> = traversal.traverse(4, |_| Err("rejected"));
        assert_eq!(failed, Err("rejected"));
        let skipped: Result<u32, &str> = traversal.traverse(3, |_| Err("rejected"));
        assert_eq!(skipped, Ok(3));
    }

    #[rstest]
    fn traverse_with_identity_matches_modify() {
        let traversal = even().to_traversal();
        assert_eq!(traversal.traverse(4, |n| Identity(n + 2)), Identity(6));
        assert_eq!(traversal.modify_all(4, |n| n + 2), 6);
    }

    #[rstest]
    fn traverse_option_short_circuits_on_none() {
        let traversal = even().to_traversal();
        assert_eq!(traversal.traverse_option(4, |_| None), None);
        assert_eq!(traversal.traverse_option(3, |_| None), Some(3));
    }
}
