//! Iso optics for lossless conversions.
//!
//! An Iso is a bidirectional conversion where no information is lost. It is
//! the strongest optic here: every Iso is also a Prism whose extraction never
//! fails, so it composes on either side of a prism.
//!
//! # Laws
//!
//! 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! # Examples
//!
//! ```
//! use prismata::optics::{Iso, FunctionIso};
//!
//! let celsius = FunctionIso::new(
//!     |kelvin: i64| kelvin - 273,
//!     |celsius: i64| celsius + 273,
//! );
//!
//! assert_eq!(celsius.get(300), 27);
//! assert_eq!(celsius.reverse_get(27), 300);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::Prism;
use super::compose::IsoPrismComposition;

/// An isomorphism between `S` and `A`.
///
/// # Laws
///
/// 1. `iso.reverse_get(iso.get(source)) == source`
/// 2. `iso.get(iso.reverse_get(value)) == value`
pub trait Iso<S, A> {
    /// Converts from the source type to the target type.
    fn get(&self, source: S) -> A;

    /// Converts from the target type back to the source type.
    fn reverse_get(&self, value: A) -> S;

    /// Returns the Iso running in the opposite direction.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{Iso, FunctionIso};
    ///
    /// let to_chars = FunctionIso::new(
    ///     |s: String| s.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// assert_eq!(to_chars.reverse().get(vec!['h', 'i']), "hi");
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Applies a function to the converted value and converts back.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let converted = self.get(source);
        self.reverse_get(function(converted))
    }

    /// Composes this Iso with another Iso.
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Composes this Iso with a prism on its target.
    ///
    /// The result is a prism from `S` to `B`. Extraction converts the source
    /// through the iso and then runs the prism.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{Iso, FunctionIso, Prism, parse_int};
    ///
    /// let trimmed = FunctionIso::new(
    ///     |s: String| s.trim().to_string(),
    ///     |s: String| s,
    /// );
    ///
    /// let prism = trimmed.compose_prism(parse_int());
    /// assert_eq!(prism.get_option(&"  12 ".to_string()), Some(12));
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> IsoPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        IsoPrismComposition::new(self, prism)
    }

    /// Converts this Iso to a Prism that always matches.
    fn to_prism(self) -> IsoAsPrism<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

/// An Iso implemented with a pair of functions.
///
/// The `iso!` macro generates a `FunctionIso`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The get function type
/// - `Rg`: The `reverse_get` function type
pub struct FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    get_function: G,
    reverse_get_function: Rg,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new `FunctionIso`.
    ///
    /// # Arguments
    ///
    /// * `get_function` - Converts from S to A
    /// * `reverse_get_function` - Converts from A to S
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: Rg) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, Rg> Clone for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A + Clone,
    Rg: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> fmt::Debug for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

/// An Iso with its direction swapped. Created by [`Iso::reverse`].
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Creates a new `ReversedIso`.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

impl<I: Clone> Clone for ReversedIso<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for ReversedIso<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReversedIso")
            .field("inner", &self.inner)
            .finish()
    }
}

/// Two Isos chained end to end. Created by [`Iso::compose`].
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<fn() -> A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new `ComposedIso`.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I1: fmt::Debug, I2: fmt::Debug, A> fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An Iso used as a Prism. Created by [`Iso::to_prism`].
///
/// `get_option` always returns `Some`. The source is cloned because
/// [`Iso::get`] consumes its argument.
pub struct IsoAsPrism<I, S, A> {
    iso: I,
    _marker: PhantomData<fn(S) -> A>,
}

impl<I, S, A> IsoAsPrism<I, S, A> {
    /// Creates a new `IsoAsPrism`.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Prism<S, A> for IsoAsPrism<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.iso.get(source.clone()))
    }

    fn reverse_get(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Iso")
    }
}

impl<I: Clone, S, A> Clone for IsoAsPrism<I, S, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I: fmt::Debug, S, A> fmt::Debug for IsoAsPrism<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IsoAsPrism")
            .field("iso", &self.iso)
            .finish()
    }
}

/// The identity Iso, mapping every value to itself.
#[must_use]
pub fn iso_identity<S>() -> impl Iso<S, S> + Clone {
    FunctionIso::new(|source: S| source, |value: S| value)
}

/// Creates an Iso from get and `reverse_get` functions.
///
/// # Example
///
/// ```
/// use prismata::optics::Iso;
/// use prismata::iso;
///
/// let swap = iso!(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b)
/// );
///
/// let swapped = swap.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_chars_iso() -> impl Iso<String, Vec<char>> + Clone {
        FunctionIso::new(
            |s: String| s.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        )
    }

    #[test]
    fn test_function_iso_roundtrip() {
        let iso = string_chars_iso();
        let chars = iso.get("hello".to_string());
        assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(iso.reverse_get(chars), "hello");
    }

    #[test]
    fn test_reversed_iso() {
        let reversed = string_chars_iso().reverse();
        assert_eq!(reversed.get(vec!['o', 'k']), "ok");
        assert_eq!(reversed.reverse_get("ok".to_string()), vec!['o', 'k']);
    }

    #[test]
    fn test_iso_compose() {
        let widen = FunctionIso::new(i64::from, |x: i64| x as i32);
        let negate = FunctionIso::new(|x: i64| -x, |x: i64| -x);
        let composed = widen.compose(negate);
        assert_eq!(composed.get(5_i32), -5_i64);
        assert_eq!(composed.reverse_get(-5), 5);
    }

    #[test]
    fn test_iso_modify() {
        let result = string_chars_iso().modify("abc".to_string(), |mut chars| {
            chars.reverse();
            chars
        });
        assert_eq!(result, "cba");
    }

    #[test]
    fn test_iso_as_prism_always_matches() {
        let prism = string_chars_iso().to_prism();
        assert_eq!(prism.get_option(&"hi".to_string()), Some(vec!['h', 'i']));
        assert_eq!(prism.reverse_get(vec!['y', 'o']), "yo");
    }

    #[test]
    fn test_iso_identity() {
        let identity = iso_identity::<u8>();
        assert_eq!(identity.get(7), 7);
        assert_eq!(identity.reverse_get(7), 7);
    }

    #[test]
    fn test_iso_macro() {
        let double = crate::iso!(|x: i32| x * 2, |x: i32| x / 2);
        assert_eq!(double.get(21), 42);
        assert_eq!(double.reverse_get(42), 21);
    }
}
