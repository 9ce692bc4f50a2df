//! A prism adapter that logs every extraction and construction.

use std::borrow::Cow;

use tracing::trace;

use super::Prism;

/// Wraps a prism and emits a `tracing` event on every call.
///
/// `get_option` events carry the fields `prism` (the wrapped prism's name)
/// and `matched`. `reverse_get` events carry `prism`. Behaviour is otherwise
/// identical to the wrapped prism.
///
/// Created by [`Prism::traced`].
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, parse_int};
///
/// let prism = parse_int().traced();
/// assert_eq!(prism.get_option(&"5".to_string()), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct TracedPrism<P> {
    inner: P,
}

impl<P> TracedPrism<P> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the wrapped prism.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<S, A, P> Prism<S, A> for TracedPrism<P>
where
    P: Prism<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        let focus = self.inner.get_option(source);
        trace!(prism = %self.inner.name(), matched = focus.is_some(), "get_option");
        focus
    }

    fn reverse_get(&self, value: A) -> S {
        trace!(prism = %self.inner.name(), "reverse_get");
        self.inner.reverse_get(value)
    }

    fn name(&self) -> Cow<'_, str> {
        self.inner.name()
    }
}
