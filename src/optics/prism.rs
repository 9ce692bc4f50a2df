//! Prism optics for partial extraction and total construction.
//!
//! A Prism pairs a partial `get_option`, which may fail to find its focus in
//! a source, with a total `reverse_get`, which always builds a source from a
//! focus. Enum variants, parsed strings and decoded bytes are all prisms.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **ReverseGetGetOption Law**: Constructing then extracting round-trips.
//!    ```text
//!    prism.get_option(&prism.reverse_get(value)) == Some(value)
//!    ```
//!
//! 2. **GetOptionReverseGet Law**: Re-extraction after reconstruction is stable.
//!    ```text
//!    if prism.get_option(&source) == Some(value) then
//!        prism.get_option(&prism.reverse_get(value)) == Some(value)
//!    ```
//!
//! The second law does not require `reverse_get(value) == source`: a base64
//! prism may not reproduce the exact padding of its input, only the same
//! decoded bytes.
//!
//! # Examples
//!
//! ```
//! use prismata::optics::{Prism, FunctionPrism};
//! use prismata::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.get_option(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.get_option(&Shape::Rectangle(3.0, 4.0)), None);
//! assert_eq!(circle_prism.reverse_get(10.0), Shape::Circle(10.0));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::compose::PrismIsoComposition;
use super::iso::Iso;
use super::traced::TracedPrism;
use crate::error::PrismError;

/// A Prism focuses on a part of `S` that may or may not be present.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
///
/// # Laws
///
/// 1. `prism.get_option(&prism.reverse_get(value)) == Some(value)`
/// 2. If `prism.get_option(&source) == Some(value)` then
///    `prism.get_option(&prism.reverse_get(value)) == Some(value)`
///
/// Implementations are not checked against these laws; upholding them is
/// the implementor's contract.
pub trait Prism<S, A> {
    /// Attempts to extract the focus from the source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value
    ///
    /// # Returns
    ///
    /// `Some(focus)` if the source matches, `None` otherwise
    fn get_option(&self, source: &S) -> Option<A>;

    /// Builds a source from a focus. Always succeeds.
    ///
    /// # Arguments
    ///
    /// * `value` - The focus to embed
    ///
    /// # Returns
    ///
    /// A source that this prism matches
    fn reverse_get(&self, value: A) -> S;

    /// A label used in `Debug` output, error messages and trace events.
    ///
    /// Never part of equality or of the laws.
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Prism")
    }

    /// Returns `true` if the source matches this prism.
    fn is_match(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Replaces the focus with `value` when the source matches.
    ///
    /// If the source does not match, it is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{Prism, parse_int};
    ///
    /// let prism = parse_int();
    /// assert_eq!(prism.set("42".to_string(), 7), "7");
    /// assert_eq!(prism.set("abc".to_string(), 7), "abc");
    /// ```
    fn set(&self, source: S, value: A) -> S {
        if self.is_match(&source) {
            self.reverse_get(value)
        } else {
            source
        }
    }

    /// Applies `function` to the focus and rebuilds the source.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the source matches, `None` otherwise
    fn modify_option<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.get_option(source)
            .map(|value| self.reverse_get(function(value)))
    }

    /// Applies `function` to the focus, or returns the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::Prism;
    /// use prismata::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape {
    ///     Circle(f64),
    ///     Rectangle(f64, f64),
    /// }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let doubled = circle_prism.modify(Shape::Circle(5.0), |r| r * 2.0);
    /// assert_eq!(doubled, Shape::Circle(10.0));
    ///
    /// let rect = Shape::Rectangle(3.0, 4.0);
    /// assert_eq!(circle_prism.modify(rect.clone(), |r| r * 2.0), rect);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.reverse_get(function(value)),
            None => source,
        }
    }

    /// Extracts the focus, reporting a mismatch as [`PrismError::NoMatch`].
    ///
    /// # Errors
    ///
    /// Returns `PrismError::NoMatch` naming this prism when the source does
    /// not match.
    fn get_or_error(&self, source: &S) -> Result<A, PrismError> {
        self.get_option(source).ok_or_else(|| PrismError::NoMatch {
            prism: self.name().into_owned(),
        })
    }

    /// Composes this prism with a prism focusing inside its focus.
    ///
    /// Extraction stops at the first prism that does not match; the second
    /// prism is never invoked in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{Prism, from_predicate, parse_int};
    ///
    /// let positive = parse_int().compose(from_predicate(|n: &i64| *n > 0));
    ///
    /// assert_eq!(positive.get_option(&"42".to_string()), Some(42));
    /// assert_eq!(positive.get_option(&"-5".to_string()), None);
    /// assert_eq!(positive.get_option(&"abc".to_string()), None);
    /// assert_eq!(positive.reverse_get(8), "8");
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with an iso on its focus.
    ///
    /// The iso cannot fail, so extraction only maps the matched focus.
    fn compose_iso<B, I>(self, iso: I) -> PrismIsoComposition<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        PrismIsoComposition::new(self, iso)
    }

    /// Remaps the focus type with a pair of mutually inverse functions.
    ///
    /// `forward` is applied after extraction and `backward` before
    /// construction. If they are not inverses the laws silently degrade.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{Prism, parse_int};
    ///
    /// let cents = parse_int().imap(|dollars| dollars * 100, |cents| cents / 100);
    ///
    /// assert_eq!(cents.get_option(&"3".to_string()), Some(300));
    /// assert_eq!(cents.reverse_get(500), "5");
    /// ```
    fn imap<B, F, G>(self, forward: F, backward: G) -> ImappedPrism<Self, F, G, A>
    where
        Self: Sized,
        F: Fn(A) -> B,
        G: Fn(B) -> A,
    {
        ImappedPrism::new(self, forward, backward)
    }

    /// Converts this prism to a traversal with zero or one focus.
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }

    /// Wraps this prism so every call emits a `tracing` event.
    fn traced(self) -> TracedPrism<Self>
    where
        Self: Sized,
    {
        TracedPrism::new(self)
    }
}

/// A prism built from a `get_option` function and a `reverse_get` function.
///
/// This is the general-purpose constructor: every catalog prism without
/// configuration of its own is a `FunctionPrism`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
/// - `G`: The `get_option` function type
/// - `R`: The `reverse_get` function type
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, FunctionPrism};
///
/// let even = FunctionPrism::named(
///     "Even",
///     |n: &u32| (n % 2 == 0).then_some(n / 2),
///     |half: u32| half * 2,
/// );
///
/// assert_eq!(even.get_option(&10), Some(5));
/// assert_eq!(even.get_option(&7), None);
/// assert_eq!(even.name(), "Even");
/// ```
pub struct FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    get_option_function: G,
    reverse_get_function: R,
    name: Cow<'static, str>,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A, G, R> FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` named `"Prism"`.
    ///
    /// # Arguments
    ///
    /// * `get_option_function` - Attempts to extract the focus from a source
    /// * `reverse_get_function` - Builds a source from a focus
    #[must_use]
    pub const fn new(get_option_function: G, reverse_get_function: R) -> Self {
        Self {
            get_option_function,
            reverse_get_function,
            name: Cow::Borrowed("Prism"),
            _marker: PhantomData,
        }
    }

    /// Creates a new `FunctionPrism` with a debug label.
    #[must_use]
    pub fn named(
        name: impl Into<Cow<'static, str>>,
        get_option_function: G,
        reverse_get_function: R,
    ) -> Self {
        Self::new(get_option_function, reverse_get_function).with_name(name)
    }

    /// Replaces the debug label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}

impl<S, A, G, R> Prism<S, A> for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.get_option_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl<S, A, G, R> Clone for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_option_function: self.get_option_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> fmt::Debug for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<S, A, G, R> fmt::Display for FunctionPrism<S, A, G, R>
where
    G: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// A prism composed of two prisms.
///
/// `first` focuses on an intermediate `A` inside `S`, `second` on a `B`
/// inside `A`.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `A`: The intermediate type (focus of P1, source of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    ///
    /// # Arguments
    ///
    /// * `first` - The prism applied to the source
    /// * `second` - The prism applied to the first prism's focus
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn reverse_get(&self, value: B) -> S {
        let intermediate = self.second.reverse_get(value);
        self.first.reverse_get(intermediate)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} > {}", self.first.name(), self.second.name()))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: fmt::Debug, P2: fmt::Debug, A> fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism whose focus has been remapped through a pair of inverse functions.
///
/// Created by [`Prism::imap`].
pub struct ImappedPrism<P, F, G, A> {
    prism: P,
    forward: F,
    backward: G,
    _marker: PhantomData<fn() -> A>,
}

impl<P, F, G, A> ImappedPrism<P, F, G, A> {
    /// Creates a new `ImappedPrism`.
    #[must_use]
    pub const fn new(prism: P, forward: F, backward: G) -> Self {
        Self {
            prism,
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, F, G> Prism<S, B> for ImappedPrism<P, F, G, A>
where
    P: Prism<S, A>,
    F: Fn(A) -> B,
    G: Fn(B) -> A,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.get_option(source).map(&self.forward)
    }

    fn reverse_get(&self, value: B) -> S {
        self.prism.reverse_get((self.backward)(value))
    }

    fn name(&self) -> Cow<'_, str> {
        self.prism.name()
    }
}

impl<P: Clone, F: Clone, G: Clone, A> Clone for ImappedPrism<P, F, G, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: fmt::Debug, F, G, A> fmt::Debug for ImappedPrism<P, F, G, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ImappedPrism")
            .field("prism", &self.prism)
            .finish_non_exhaustive()
    }
}

/// A prism converted to a traversal.
///
/// It yields zero or one focus. Besides the [`Traversal`](super::Traversal)
/// operations it can run a transformation inside an effect; see
/// [`PrismAsTraversal::traverse`].
///
/// # Type Parameters
///
/// - `P`: The type of the underlying prism
/// - `S`: The source type
/// - `A`: The focus type
pub struct PrismAsTraversal<P, S, A> {
    pub(crate) prism: P,
    _marker: PhantomData<fn(S) -> A>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Creates a new `PrismAsTraversal` from a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying prism.
    pub fn into_prism(self) -> P {
        self.prism
    }
}

impl<P: Clone, S, A> Clone for PrismAsTraversal<P, S, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: fmt::Debug, S, A> fmt::Debug for PrismAsTraversal<P, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PrismAsTraversal")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Creates a prism for a single-field tuple variant of an enum.
///
/// The generated prism clones the variant's payload on extraction, so the
/// payload type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// For multi-field or struct variants use `#[derive(Prisms)]` or
/// `FunctionPrism::new` directly.
///
/// # Example
///
/// ```
/// use prismata::optics::Prism;
/// use prismata::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Payment {
///     Card(String),
///     Cash(u64),
/// }
///
/// let cash = prism!(Payment, Cash);
///
/// assert_eq!(cash.get_option(&Payment::Cash(20)), Some(20));
/// assert_eq!(cash.get_option(&Payment::Card("visa".into())), None);
/// assert_eq!(cash.reverse_get(5), Payment::Cash(5));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::named(
            stringify!($variant),
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::named(
            stringify!($variant),
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::named(
            stringify!($variant),
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Rectangle(f64, f64),
    }

    fn circle_prism() -> impl Prism<Shape, f64> + Clone {
        FunctionPrism::named(
            "Circle",
            |shape: &Shape| match shape {
                Shape::Circle(radius) => Some(*radius),
                Shape::Rectangle(..) => None,
            },
            Shape::Circle,
        )
    }

    #[test]
    fn test_function_prism_get_option_match() {
        assert_eq!(circle_prism().get_option(&Shape::Circle(5.0)), Some(5.0));
    }

    #[test]
    fn test_function_prism_get_option_no_match() {
        assert_eq!(circle_prism().get_option(&Shape::Rectangle(3.0, 4.0)), None);
    }

    #[test]
    fn test_function_prism_reverse_get() {
        assert_eq!(circle_prism().reverse_get(10.0), Shape::Circle(10.0));
    }

    #[test]
    fn test_set_is_noop_on_mismatch() {
        let rect = Shape::Rectangle(3.0, 4.0);
        assert_eq!(circle_prism().set(rect.clone(), 1.0), rect);
        assert_eq!(circle_prism().set(Shape::Circle(2.0), 1.0), Shape::Circle(1.0));
    }

    #[test]
    fn test_modify_option() {
        let prism = circle_prism();
        assert_eq!(
            prism.modify_option(&Shape::Circle(5.0), |r| r * 2.0),
            Some(Shape::Circle(10.0))
        );
        assert_eq!(prism.modify_option(&Shape::Rectangle(1.0, 1.0), |r| r * 2.0), None);
    }

    #[test]
    fn test_get_or_error_names_the_prism() {
        let error = circle_prism()
            .get_or_error(&Shape::Rectangle(1.0, 2.0))
            .unwrap_err();
        assert_eq!(error.prism(), "Circle");
    }

    #[test]
    fn test_prism_macro() {
        let prism = prism!(Shape, Circle);
        assert_eq!(prism.get_option(&Shape::Circle(5.0)), Some(5.0));
        assert_eq!(prism.name(), "Circle");
    }

    #[test]
    fn test_composed_name_joins_both_names() {
        let nested = FunctionPrism::named("Outer", |n: &i32| Some(*n), |n| n)
            .compose(FunctionPrism::named("Inner", |n: &i32| Some(*n), |n| n));
        assert_eq!(nested.name(), "Outer > Inner");
    }

    #[test]
    fn test_imap_keeps_the_name() {
        let prism = circle_prism().imap(|r| r * 2.0, |d| d / 2.0);
        assert_eq!(prism.get_option(&Shape::Circle(1.5)), Some(3.0));
        assert_eq!(prism.reverse_get(3.0), Shape::Circle(1.5));
        assert_eq!(prism.name(), "Circle");
    }
}
