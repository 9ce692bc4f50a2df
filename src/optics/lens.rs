//! Lens optics for focusing on struct fields.
//!
//! A Lens gives total get/set access to one field of a structure. Lenses
//! matter here as the left-hand side of a Lens-then-Prism composition,
//! which produces an [`Optional`](super::Optional).
//!
//! # Laws
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use prismata::optics::Lens;
//! use prismata::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Config { port: u16, host: String }
//!
//! let port = lens!(Config, port);
//!
//! let config = Config { port: 80, host: "localhost".to_string() };
//! assert_eq!(*port.get(&config), 80);
//!
//! let updated = port.set(config, 8080);
//! assert_eq!(updated.port, 8080);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Sets the focused field to a new value, returning a new source.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Composes this lens with another lens to focus on a nested field.
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens implemented with a getter and a setter.
///
/// The `lens!` macro and `#[derive(Lenses)]` generate `FunctionLens` values.
///
/// # Example
///
/// ```
/// use prismata::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(*x_lens.get(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens`.
    ///
    /// # Arguments
    ///
    /// * `getter` - Returns a reference to the focused field
    /// * `setter` - Replaces the focused field
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// Two lenses chained to reach a nested field. Created by [`Lens::compose`].
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new `ComposedLens`.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let updated = self.second.set(intermediate, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a named field of a struct.
///
/// # Example
///
/// ```
/// use prismata::optics::Lens;
/// use prismata::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let updated = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
/// assert_eq!(updated, Point { x: 20, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Address {
        city: String,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Person {
        name: String,
        address: Address,
    }

    fn alice() -> Person {
        Person {
            name: "Alice".to_string(),
            address: Address {
                city: "Lisbon".to_string(),
            },
        }
    }

    #[test]
    fn test_lens_macro_get_and_set() {
        let name = crate::lens!(Person, name);
        assert_eq!(name.get(&alice()), "Alice");
        assert_eq!(name.set(alice(), "Bob".to_string()).name, "Bob");
    }

    #[test]
    fn test_lens_compose() {
        let city = crate::lens!(Person, address).compose(crate::lens!(Address, city));
        assert_eq!(city.get(&alice()), "Lisbon");

        let moved = city.modify(alice(), |c| c.to_uppercase());
        assert_eq!(moved.address.city, "LISBON");
        assert_eq!(moved.name, "Alice");
    }
}
