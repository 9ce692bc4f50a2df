//! JSON decoding prisms.
//!
//! `get_option` deserializes with `serde_json`; malformed input and type
//! mismatches do not match. `reverse_get` must be total, so a value that
//! fails to serialize (a map with non-string keys, a failing `Serialize`
//! impl) yields an empty document and a `warn!` event. Callers that need
//! to see that error use `try_reverse_get`.
//!
//! `serde_json` writes non-finite floats (`NaN`, infinities) as `null`
//! without an error. Such a value therefore does not survive
//! `reverse_get` followed by `get_option`: `from_json::<f64>()` renders
//! `f64::NAN` as `b"null"`, which no longer matches.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::PrismError;
use crate::optics::Prism;

/// Focuses on the `T` a JSON byte buffer deserializes to.
pub struct JsonPrism<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new `JsonPrism`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Serializes `value`, reporting failure instead of hiding it.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::Encode`] when `serde_json` cannot serialize
    /// the value.
    pub fn try_reverse_get(&self, value: &T) -> Result<Vec<u8>, PrismError> {
        serde_json::to_vec(value).map_err(|error| PrismError::Encode {
            prism: self.name().into_owned(),
            source: Box::new(error),
        })
    }
}

impl<T> Prism<Vec<u8>, T> for JsonPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    fn get_option(&self, source: &Vec<u8>) -> Option<T> {
        serde_json::from_slice(source).ok()
    }

    fn reverse_get(&self, value: T) -> Vec<u8> {
        self.try_reverse_get(&value).unwrap_or_else(|error| {
            warn!(prism = %self.name(), %error, "serialization failed, returning an empty document");
            Vec::new()
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("FromJson")
    }
}

impl<T> Default for JsonPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonPrism<T> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonPrism<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("JsonPrism")
    }
}

/// Focuses on the `T` a JSON string deserializes to.
pub struct JsonStrPrism<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonStrPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new `JsonStrPrism`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Serializes `value`, reporting failure instead of hiding it.
    ///
    /// # Errors
    ///
    /// Returns [`PrismError::Encode`] when `serde_json` cannot serialize
    /// the value.
    pub fn try_reverse_get(&self, value: &T) -> Result<String, PrismError> {
        serde_json::to_string(value).map_err(|error| PrismError::Encode {
            prism: self.name().into_owned(),
            source: Box::new(error),
        })
    }
}

impl<T> Prism<String, T> for JsonStrPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    fn get_option(&self, source: &String) -> Option<T> {
        serde_json::from_str(source).ok()
    }

    fn reverse_get(&self, value: T) -> String {
        self.try_reverse_get(&value).unwrap_or_else(|error| {
            warn!(prism = %self.name(), %error, "serialization failed, returning an empty document");
            String::new()
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("FromJsonStr")
    }
}

impl<T> Default for JsonStrPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonStrPrism<T> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonStrPrism<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("JsonStrPrism")
    }
}

/// Creates a prism from JSON bytes to `T`.
///
/// # Example
///
/// ```
/// use prismata::optics::{Prism, from_json};
///
/// let prism = from_json::<Vec<u32>>();
///
/// assert_eq!(prism.get_option(&b"[1,2,3]".to_vec()), Some(vec![1, 2, 3]));
/// assert_eq!(prism.get_option(&b"[1,".to_vec()), None);
/// assert_eq!(prism.get_option(&br#"["a"]"#.to_vec()), None);
/// assert_eq!(prism.reverse_get(vec![4]), b"[4]".to_vec());
/// ```
#[must_use]
pub const fn from_json<T>() -> JsonPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    JsonPrism::new()
}

/// Creates a prism from a JSON string to `T`.
#[must_use]
pub const fn from_json_str<T>() -> JsonStrPrism<T>
where
    T: Serialize + DeserializeOwned,
{
    JsonStrPrism::new()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Order {
        id: u64,
        items: Vec<String>,
    }

    #[test]
    fn test_from_json_str_decodes_structs() {
        let prism = from_json_str::<Order>();
        let order = prism
            .get_option(&r#"{"id":7,"items":["tea"]}"#.to_string())
            .unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(prism.reverse_get(order), r#"{"id":7,"items":["tea"]}"#);
    }

    #[test]
    fn test_from_json_str_rejects_missing_fields() {
        assert_eq!(from_json_str::<Order>().get_option(&r#"{"id":7}"#.to_string()), None);
    }

    #[test]
    fn test_unserializable_value_is_flagged() {
        let prism = from_json::<BTreeMap<(u8, u8), u8>>();
        let value = BTreeMap::from([((1, 2), 3)]);

        let error = prism.try_reverse_get(&value).unwrap_err();
        assert!(matches!(error, PrismError::Encode { .. }));
        assert_eq!(error.prism(), "FromJson");

        assert!(prism.reverse_get(value).is_empty());
    }
}
