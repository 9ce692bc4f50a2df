//! Prisms that match on a value's emptiness.
//!
//! "Zero" is `T::default()`: `0` for numbers, `""` for strings, `false`
//! for booleans. Like [`from_predicate`](crate::optics::from_predicate),
//! `reverse_get` does not re-check the condition; use
//! [`FilterPrism::try_reverse_get`] for unchecked input.

use crate::optics::{FilterPrism, FunctionPrism, Prism};

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

fn is_non_zero<T: Default + PartialEq>(value: &T) -> bool {
    !is_zero(value)
}

/// Matches only the zero value of `T`.
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, from_zero};
///
/// let prism = from_zero::<i32>();
/// assert_eq!(prism.get_option(&0), Some(0));
/// assert_eq!(prism.get_option(&3), None);
/// ```
#[must_use]
pub fn from_zero<T>() -> FilterPrism<T, fn(&T) -> bool>
where
    T: Default + PartialEq + Clone,
{
    FilterPrism::new(is_zero::<T> as fn(&T) -> bool).with_name("FromZero")
}

/// Matches every value of `T` except zero.
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, from_non_zero};
///
/// let prism = from_non_zero::<String>();
/// assert_eq!(prism.get_option(&"x".to_string()), Some("x".to_string()));
/// assert_eq!(prism.get_option(&String::new()), None);
/// assert_eq!(prism.try_reverse_get(String::new()), None);
/// ```
#[must_use]
pub fn from_non_zero<T>() -> FilterPrism<T, fn(&T) -> bool>
where
    T: Default + PartialEq + Clone,
{
    FilterPrism::new(is_non_zero::<T> as fn(&T) -> bool).with_name("FromNonZero")
}

/// Matches non-empty strings.
#[must_use]
pub fn from_non_empty() -> impl Prism<String, String> + Clone {
    FunctionPrism::named(
        "FromNonEmpty",
        |source: &String| (!source.is_empty()).then(|| source.clone()),
        |value: String| value,
    )
}
