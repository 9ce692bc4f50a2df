//! Error types for the fallible companions of prism operations.
//!
//! A prism itself never fails: a source that does not match is reported as
//! `None` by `get_option`, and `reverse_get` is total. `PrismError` is only
//! produced by the explicitly fallible helpers, for callers that need a
//! diagnostic at the boundary where a prism is used.

use thiserror::Error;

/// Errors produced by the fallible companion operations on prisms.
///
/// # Examples
///
/// ```rust
/// use prismata::PrismError;
///
/// let error = PrismError::NoMatch { prism: "ParseInt".to_string() };
/// assert_eq!(error.to_string(), "prism `ParseInt` did not match the source");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrismError {
    /// The source did not match the prism.
    #[error("prism `{prism}` did not match the source")]
    NoMatch {
        /// Name of the prism that was applied.
        prism: String,
    },

    /// The focus could not be encoded back into the source type.
    #[error("prism `{prism}` failed to encode the focus")]
    Encode {
        /// Name of the prism that was applied.
        prism: String,
        /// The underlying encoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PrismError {
    /// Returns the name of the prism that produced this error.
    pub fn prism(&self) -> &str {
        match self {
            Self::NoMatch { prism } | Self::Encode { prism, .. } => prism,
        }
    }
}
