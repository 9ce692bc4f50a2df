//! Optional optics for focusing on values that may be absent.
//!
//! An Optional is what composing a Lens with a Prism produces: the lens
//! always finds its field, the prism may not match what is there. Chains of
//! lenses and prisms over nested optional structures are Optionals.
//!
//! # Laws
//!
//! 1. **`GetOptionSet` Law**: if `optional.get_option(&source) == Some(value)`
//!    then `optional.set(source, value) == source`.
//! 2. **`SetGetOption` Law**: if the focus is present,
//!    `optional.get_option(&optional.set(source, value)) == Some(value)`.
//!
//! `set` on a source whose focus is absent returns the source unchanged,
//! as [`Prism::set`] does.
//!
//! # Examples
//!
//! ```
//! use prismata::optics::{LensComposeExtension, Optional, from_option};
//! use prismata::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { nickname: Option<String> }
//!
//! let nickname = lens!(Profile, nickname).compose_prism(from_option());
//!
//! let named = Profile { nickname: Some("neo".to_string()) };
//! assert_eq!(nickname.get_option(&named), Some("neo".to_string()));
//!
//! let anonymous = Profile { nickname: None };
//! assert_eq!(nickname.get_option(&anonymous), None);
//! assert_eq!(nickname.set(anonymous.clone(), "x".to_string()), anonymous);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub trait Optional<S, A> {
    /// Attempts to get the focused element.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focused element. A source without one is returned
    /// unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused element if present.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the element is present, `None` otherwise
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get_option(&source)?;
        Some(self.set(source, function(value)))
    }

    /// Modifies the focused element if present, otherwise returns the source.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Checks if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Extends the chain with a prism on the focused element.
    fn compose<B, P>(self, other: P) -> ComposedOptional<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Extends the chain with a lens on the focused element.
    fn compose_lens<B, L>(self, other: L) -> OptionalLensComposition<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        OptionalLensComposition::new(self, other)
    }
}

/// The result of composing a Lens with a Prism.
///
/// # Type Parameters
///
/// - `L`: The type of the lens
/// - `P`: The type of the prism
/// - `A`: The intermediate type (target of L, source of P)
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<fn() -> A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Creates a new `LensPrismComposition`.
    ///
    /// # Arguments
    ///
    /// * `lens` - The lens that focuses on the intermediate structure
    /// * `prism` - The prism that focuses on the final value
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.get_option(self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        if self.prism.is_match(self.lens.get(&source)) {
            let intermediate = self.prism.reverse_get(value);
            self.lens.set(source, intermediate)
        } else {
            source
        }
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: fmt::Debug, P: fmt::Debug, A> fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// An Optional followed by a Prism. Created by [`Optional::compose`].
pub struct ComposedOptional<O, P, A> {
    optional: O,
    prism: P,
    _marker: PhantomData<fn() -> A>,
}

impl<O, P, A> ComposedOptional<O, P, A> {
    /// Creates a new `ComposedOptional`.
    #[must_use]
    pub const fn new(optional: O, prism: P) -> Self {
        Self {
            optional,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, P> Optional<S, B> for ComposedOptional<O, P, A>
where
    O: Optional<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional
            .get_option(source)
            .and_then(|intermediate| self.prism.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.optional.get_option(&source) {
            Some(intermediate) if self.prism.is_match(&intermediate) => {
                let rebuilt = self.prism.reverse_get(value);
                self.optional.set(source, rebuilt)
            }
            _ => source,
        }
    }
}

impl<O: Clone, P: Clone, A> Clone for ComposedOptional<O, P, A> {
    fn clone(&self) -> Self {
        Self {
            optional: self.optional.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O: fmt::Debug, P: fmt::Debug, A> fmt::Debug for ComposedOptional<O, P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("optional", &self.optional)
            .field("prism", &self.prism)
            .finish()
    }
}

/// An Optional followed by a Lens. Created by [`Optional::compose_lens`].
///
/// The lens focus is cloned out of the intermediate on extraction.
pub struct OptionalLensComposition<O, L, A> {
    optional: O,
    lens: L,
    _marker: PhantomData<fn() -> A>,
}

impl<O, L, A> OptionalLensComposition<O, L, A> {
    /// Creates a new `OptionalLensComposition`.
    #[must_use]
    pub const fn new(optional: O, lens: L) -> Self {
        Self {
            optional,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, L> Optional<S, B> for OptionalLensComposition<O, L, A>
where
    O: Optional<S, A>,
    L: Lens<A, B>,
    B: Clone,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional
            .get_option(source)
            .map(|intermediate| self.lens.get(&intermediate).clone())
    }

    fn set(&self, source: S, value: B) -> S {
        match self.optional.get_option(&source) {
            Some(intermediate) => {
                let updated = self.lens.set(intermediate, value);
                self.optional.set(source, updated)
            }
            None => source,
        }
    }
}

impl<O: Clone, L: Clone, A> Clone for OptionalLensComposition<O, L, A> {
    fn clone(&self) -> Self {
        Self {
            optional: self.optional.clone(),
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O: fmt::Debug, L: fmt::Debug, A> fmt::Debug for OptionalLensComposition<O, L, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OptionalLensComposition")
            .field("optional", &self.optional)
            .field("lens", &self.lens)
            .finish()
    }
}

/// Adds `compose_prism` to every Lens.
pub trait LensComposeExtension<S, A>: Lens<S, A> + Sized {
    /// Composes this lens with a prism, producing an Optional.
    ///
    /// # Example
    ///
    /// ```
    /// use prismata::optics::{LensComposeExtension, Optional, parse_int};
    /// use prismata::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Form { age: String }
    ///
    /// let age = lens!(Form, age).compose_prism(parse_int());
    ///
    /// assert_eq!(age.get_option(&Form { age: "31".to_string() }), Some(31));
    /// assert_eq!(age.get_option(&Form { age: "old".to_string() }), None);
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, prism)
    }
}

impl<S, A, L: Lens<S, A>> LensComposeExtension<S, A> for L {}
