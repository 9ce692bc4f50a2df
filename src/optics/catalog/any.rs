//! Downcasting prism over type-erased values.

use std::any::Any;

use crate::optics::{FunctionPrism, Prism};

/// Focuses on a boxed [`Any`] holding a `T`.
///
/// A value of any other type does not match. The focus is cloned out of the
/// box.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use prismata::optics::{Prism, instance_of};
///
/// let prism = instance_of::<u32>();
/// let boxed: Box<dyn Any> = Box::new(9_u32);
/// let other: Box<dyn Any> = Box::new("nine");
///
/// assert_eq!(prism.get_option(&boxed), Some(9));
/// assert_eq!(prism.get_option(&other), None);
/// ```
#[must_use]
pub fn instance_of<T>() -> impl Prism<Box<dyn Any>, T> + Clone
where
    T: Any + Clone,
{
    FunctionPrism::named(
        "InstanceOf",
        |source: &Box<dyn Any>| (**source).downcast_ref::<T>().cloned(),
        |value: T| Box::new(value) as Box<dyn Any>,
    )
}
