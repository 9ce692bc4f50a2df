//! Mixed compositions of prisms and isos.
//!
//! - [`PrismIsoComposition`]: a prism followed by an iso on its focus
//! - [`IsoPrismComposition`]: an iso followed by a prism on its target
//!
//! Both are prisms. Prism-with-prism composition lives on
//! [`ComposedPrism`](super::ComposedPrism) and lens-with-prism on
//! [`LensPrismComposition`](super::LensPrismComposition).

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::{Iso, Prism};

/// A prism whose focus is converted through an iso.
///
/// Created by [`Prism::compose_iso`].
///
/// # Example
///
/// ```
/// use prismata::optics::{FunctionIso, Prism, parse_int};
///
/// let negated = parse_int().compose_iso(FunctionIso::new(|n: i64| -n, |n: i64| -n));
///
/// assert_eq!(negated.get_option(&"4".to_string()), Some(-4));
/// assert_eq!(negated.reverse_get(-9), "9");
/// ```
pub struct PrismIsoComposition<P, I, A> {
    prism: P,
    iso: I,
    _marker: PhantomData<fn() -> A>,
}

impl<P, I, A> PrismIsoComposition<P, I, A> {
    /// Creates a new `PrismIsoComposition`.
    #[must_use]
    pub const fn new(prism: P, iso: I) -> Self {
        Self {
            prism,
            iso,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, I> Prism<S, B> for PrismIsoComposition<P, I, A>
where
    P: Prism<S, A>,
    I: Iso<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.get_option(source).map(|value| self.iso.get(value))
    }

    fn reverse_get(&self, value: B) -> S {
        self.prism.reverse_get(self.iso.reverse_get(value))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} > Iso", self.prism.name()))
    }
}

impl<P: Clone, I: Clone, A> Clone for PrismIsoComposition<P, I, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: fmt::Debug, I: fmt::Debug, A> fmt::Debug for PrismIsoComposition<P, I, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PrismIsoComposition")
            .field("prism", &self.prism)
            .field("iso", &self.iso)
            .finish()
    }
}

/// An iso followed by a prism on the iso's target.
///
/// Created by [`Iso::compose_prism`]. The source is cloned on extraction
/// because [`Iso::get`] consumes its argument.
pub struct IsoPrismComposition<I, P, A> {
    iso: I,
    prism: P,
    _marker: PhantomData<fn() -> A>,
}

impl<I, P, A> IsoPrismComposition<I, P, A> {
    /// Creates a new `IsoPrismComposition`.
    #[must_use]
    pub const fn new(iso: I, prism: P) -> Self {
        Self {
            iso,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I, P> Prism<S, B> for IsoPrismComposition<I, P, A>
where
    I: Iso<S, A>,
    P: Prism<A, B>,
    S: Clone,
{
    fn get_option(&self, source: &S) -> Option<B> {
        let converted = self.iso.get(source.clone());
        self.prism.get_option(&converted)
    }

    fn reverse_get(&self, value: B) -> S {
        self.iso.reverse_get(self.prism.reverse_get(value))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Iso > {}", self.prism.name()))
    }
}

impl<I: Clone, P: Clone, A> Clone for IsoPrismComposition<I, P, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I: fmt::Debug, P: fmt::Debug, A> fmt::Debug for IsoPrismComposition<I, P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IsoPrismComposition")
            .field("iso", &self.iso)
            .field("prism", &self.prism)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{FunctionIso, FunctionPrism};

    fn even_half() -> impl Prism<u32, u32> + Clone {
        FunctionPrism::named(
            "EvenHalf",
            |n: &u32| (n % 2 == 0).then_some(n / 2),
            |half: u32| half * 2,
        )
    }

    #[test]
    fn test_prism_then_iso_maps_the_focus() {
        let prism = even_half().compose_iso(FunctionIso::new(
            |n: u32| n.to_string(),
            |s: String| s.parse().unwrap_or_default(),
        ));
        assert_eq!(prism.get_option(&10), Some("5".to_string()));
        assert_eq!(prism.get_option(&3), None);
        assert_eq!(prism.reverse_get("4".to_string()), 8);
        assert_eq!(prism.name(), "EvenHalf > Iso");
    }

    #[test]
    fn test_iso_then_prism_runs_the_prism_on_the_target() {
        let prism = FunctionIso::new(|n: u32| n + 1, |n: u32| n - 1).compose_prism(even_half());
        assert_eq!(prism.get_option(&9), Some(5));
        assert_eq!(prism.get_option(&8), None);
        assert_eq!(prism.reverse_get(5), 9);
        assert_eq!(prism.name(), "Iso > EvenHalf");
    }
}
