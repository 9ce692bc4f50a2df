//! Higher-kinded type emulation through generic associated types.
//!
//! Rust has no higher-kinded types: a trait cannot abstract over `Option<_>`
//! or `Result<_, E>` as type constructors. `TypeConstructor` recovers that
//! ability with a generic associated type, which is what lets a prism
//! traversal run inside "any effect `F`" without the prism depending on `F`.
//!
//! # Example
//!
//! ```rust
//! use prismata::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty_like(Some(42));
//! assert_eq!(none, None);
//! ```

/// A type of the shape `F<Inner>` that can be re-applied to another type.
///
/// # Type Members
///
/// - `Inner`: the type the constructor is currently applied to
/// - `WithType<B>`: the same constructor applied to `B`
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same type constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
