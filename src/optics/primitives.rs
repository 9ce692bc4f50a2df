//! Prisms that every other prism is built from or composed with.
//!
//! - [`id`]: matches everything
//! - [`from_predicate`]: matches values satisfying a predicate
//! - [`some`]: unwraps an optional focus

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::{ComposedPrism, FunctionPrism, Prism};

/// The identity prism. Always matches; `reverse_get` returns its input.
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, id};
///
/// let prism = id::<String>();
/// assert_eq!(prism.get_option(&"a".to_string()), Some("a".to_string()));
/// assert_eq!(prism.reverse_get("b".to_string()), "b");
/// ```
#[must_use]
pub fn id<S: Clone>() -> impl Prism<S, S> + Clone {
    FunctionPrism::named("Id", |source: &S| Some(source.clone()), |value: S| value)
}

/// A prism that matches values satisfying a predicate.
///
/// `reverse_get` is the identity and does not check the predicate: giving
/// it a value the predicate rejects breaks the first law. Use
/// [`FilterPrism::try_reverse_get`] when the value is not known to pass.
pub struct FilterPrism<S, F> {
    predicate: F,
    name: Cow<'static, str>,
    _marker: PhantomData<fn(&S) -> bool>,
}

impl<S, F> FilterPrism<S, F>
where
    F: Fn(&S) -> bool,
{
    /// Creates a new `FilterPrism`.
    #[must_use]
    pub const fn new(predicate: F) -> Self {
        Self {
            predicate,
            name: Cow::Borrowed("FromPredicate"),
            _marker: PhantomData,
        }
    }

    /// Replaces the debug label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns `value` only if it satisfies the predicate.
    pub fn try_reverse_get(&self, value: S) -> Option<S> {
        (self.predicate)(&value).then_some(value)
    }
}

impl<S, F> Prism<S, S> for FilterPrism<S, F>
where
    S: Clone,
    F: Fn(&S) -> bool,
{
    fn get_option(&self, source: &S) -> Option<S> {
        (self.predicate)(source).then(|| source.clone())
    }

    fn reverse_get(&self, value: S) -> S {
        value
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl<S, F: Clone> Clone for FilterPrism<S, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, F> fmt::Debug for FilterPrism<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterPrism")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Creates a prism matching values for which `predicate` returns `true`.
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, from_predicate};
///
/// let positive = from_predicate(|n: &i32| *n > 0);
///
/// assert_eq!(positive.get_option(&3), Some(3));
/// assert_eq!(positive.get_option(&0), None);
/// assert_eq!(positive.try_reverse_get(-1), None);
/// ```
#[must_use]
pub const fn from_predicate<S, F>(predicate: F) -> FilterPrism<S, F>
where
    F: Fn(&S) -> bool,
{
    FilterPrism::new(predicate)
}

/// Focuses on the payload of an `Option`. `None` does not match.
pub struct SomePrism<A> {
    _marker: PhantomData<fn() -> A>,
}

impl<A> SomePrism<A> {
    /// Creates a new `SomePrism`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for SomePrism<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for SomePrism<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for SomePrism<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SomePrism")
    }
}

impl<A: Clone> Prism<Option<A>, A> for SomePrism<A> {
    fn get_option(&self, source: &Option<A>) -> Option<A> {
        source.clone()
    }

    fn reverse_get(&self, value: A) -> Option<A> {
        Some(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Some")
    }
}

/// Narrows a prism with an optional focus to the present values.
///
/// # Example
///
/// ```
/// use prismata::optics::{FunctionPrism, Prism, some};
///
/// let first_char = FunctionPrism::new(
///     |s: &String| Some(s.chars().next()),
///     |c: Option<char>| c.map(String::from).unwrap_or_default(),
/// );
///
/// let prism = some(first_char);
/// assert_eq!(prism.get_option(&"xyz".to_string()), Some('x'));
/// assert_eq!(prism.get_option(&String::new()), None);
/// ```
#[must_use]
pub fn some<S, A, P>(prism: P) -> ComposedPrism<P, SomePrism<A>, Option<A>>
where
    P: Prism<S, Option<A>>,
    A: Clone,
{
    prism.compose(SomePrism::new())
}

/// Method form of [`some`].
pub trait PrismSomeExtension<S, A>: Prism<S, Option<A>> + Sized
where
    A: Clone,
{
    /// Narrows this prism to present values.
    fn some(self) -> ComposedPrism<Self, SomePrism<A>, Option<A>> {
        some(self)
    }
}

impl<S, A, P> PrismSomeExtension<S, A> for P
where
    P: Prism<S, Option<A>>,
    A: Clone,
{
}
