//! Prisms into the success side of sum types.

use std::ops::Deref;

use crate::control::Either;
use crate::optics::{FunctionPrism, Prism};

/// Focuses on the `Right` payload of an [`Either`].
///
/// A `Left` does not match and its value is discarded.
///
/// # Example
///
/// ```
/// use prismata::control::Either;
/// use prismata::optics::{Prism, from_either};
///
/// let prism = from_either::<String, u8>();
/// assert_eq!(prism.get_option(&Either::Right(1)), Some(1));
/// assert_eq!(prism.get_option(&Either::Left("no".to_string())), None);
/// assert_eq!(prism.reverse_get(2), Either::Right(2));
/// ```
#[must_use]
pub fn from_either<E, T: Clone>() -> impl Prism<Either<E, T>, T> + Clone {
    FunctionPrism::named(
        "FromEither",
        |source: &Either<E, T>| source.right_ref().cloned(),
        Either::Right,
    )
}

/// Focuses on the `Ok` payload of a `Result`.
#[must_use]
pub fn from_result<T: Clone, E>() -> impl Prism<Result<T, E>, T> + Clone {
    FunctionPrism::named(
        "FromResult",
        |source: &Result<T, E>| source.as_ref().ok().cloned(),
        Ok,
    )
}

/// Focuses on the payload of an `Option`.
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, from_option};
///
/// let prism = from_option::<&str>();
/// assert_eq!(prism.get_option(&Some("x")), Some("x"));
/// assert_eq!(prism.get_option(&None), None);
/// ```
#[must_use]
pub fn from_option<T: Clone>() -> impl Prism<Option<T>, T> + Clone {
    FunctionPrism::named("FromOption", |source: &Option<T>| source.clone(), Some)
}

/// Focuses on a present smart pointer.
///
/// Extraction clones the pointer, not the value behind it, so an `Rc` or
/// `Arc` focus shares its pointee with the source.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use prismata::optics::{Prism, deref};
///
/// let shared = Arc::new(42);
/// let focus = deref().get_option(&Some(Arc::clone(&shared))).unwrap();
/// assert!(Arc::ptr_eq(&focus, &shared));
/// ```
#[must_use]
pub fn deref<P>() -> impl Prism<Option<P>, P> + Clone
where
    P: Deref + Clone,
{
    FunctionPrism::named("Deref", |source: &Option<P>| source.clone(), Some)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ok(3), Some(3))]
    #[case(Err("bad"), None)]
    fn from_result_focuses_on_ok(#[case] source: Result<i32, &'static str>, #[case] expected: Option<i32>) {
        assert_eq!(from_result().get_option(&source), expected);
    }

    #[rstest]
    fn from_result_reverse_get_is_ok() {
        assert_eq!(from_result::<i32, String>().reverse_get(5), Ok(5));
    }

    #[rstest]
    fn deref_set_through_absent_pointer_stays_absent() {
        let prism = deref::<Rc<i32>>();
        assert_eq!(prism.set(None, Rc::new(1)), None);
        assert_eq!(prism.set(Some(Rc::new(0)), Rc::new(1)), Some(Rc::new(1)));
    }

    #[rstest]
    fn from_either_discards_left() {
        let prism = from_either::<i32, i32>();
        assert_eq!(prism.get_option(&Either::Left(7)), None);
        assert_eq!(prism.name(), "FromEither");
    }
}
