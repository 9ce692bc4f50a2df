//! Type classes for the effects prism traversals run in.
//!
//! A prism lifted into a traversal does not know which effect its caller
//! works in (optional results, validation, plain values). These traits
//! describe the two capabilities it needs from that effect:
//!
//! - [`Functor`]: map the payload (`fmap`)
//! - [`Applicative`]: lift a plain value (`pure`) and combine effects
//!
//! [`TypeConstructor`] emulates higher-kinded types with generic associated
//! types, and [`Identity`] is the effect that does nothing.
//!
//! # Example
//!
//! ```rust
//! use prismata::typeclass::{Applicative, Functor};
//!
//! let lifted: Option<i32> = <Option<()>>::pure(20);
//! assert_eq!(lifted.fmap(|n| n + 22), Some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
