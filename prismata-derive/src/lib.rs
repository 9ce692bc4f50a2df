//! Derive macros for prismata optics.
//!
//! - [`Lenses`]: one lens per field of a struct
//! - [`Prisms`]: one prism per variant of an enum
//!
//! The macros expand to paths under `::prismata::optics`, so they are meant
//! to be used through the `prismata` crate with its `derive` feature
//! enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use prismata::optics::Prism;
//! use prismata::Prisms;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = Shape::circle_prism();
//! assert_eq!(circle_prism.get_option(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.name(), "Circle");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derives a `{field}_lens()` method for every named field of a struct.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// Tuple structs, unit structs, enums and unions are rejected with a
/// compile error.
///
/// # Example
///
/// ```rust,ignore
/// use prismata::optics::Lens;
/// use prismata::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Alice".to_string(), age: 30 };
/// let updated = Person::age_lens().set(person, 31);
/// assert_eq!(updated.age, 31);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derives a `{variant_snake_case}_prism()` method for every enum variant.
///
/// Each generated prism is a `FunctionPrism` named after its variant, so
/// `Shape::circle_prism().name()` is `"Circle"`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Empty`): `impl Prism<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Some(T)`): `impl Prism<Enum, T>`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): `impl Prism<Enum, (T1, T2, ...)>`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): `impl Prism<Enum, (T1, T2, ...)>`,
///   fields in declaration order
///
/// `get_option` clones the payload out, so every payload type must be
/// `Clone`.
///
/// # Example
///
/// ```rust,ignore
/// use prismata::optics::Prism;
/// use prismata::Prisms;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     KeyPress(char),
///     Closed,
/// }
///
/// let click = Event::Click { x: 10, y: 20 };
/// assert_eq!(Event::click_prism().get_option(&click), Some((10, 20)));
/// assert_eq!(Event::key_press_prism().get_option(&click), None);
/// assert_eq!(Event::closed_prism().reverse_get(()), Event::Closed);
/// ```
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Clone, Prisms)]
/// enum Tree<T> {
///     Leaf(T),
///     Empty,
/// }
///
/// let prism = Tree::<i32>::leaf_prism();
/// assert_eq!(prism.get_option(&Tree::Leaf(42)), Some(42));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
