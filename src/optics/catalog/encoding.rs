//! Base64 decoding prism.

use std::borrow::Cow;

use base64::Engine;

use crate::optics::Prism;

/// Focuses on the bytes a base64 string decodes to.
///
/// The alphabet and padding rules come from the [`Engine`]. Input the engine
/// rejects (bad characters, bad padding) does not match. `reverse_get`
/// encodes with the same engine, so a source with non-canonical padding
/// re-encodes differently but decodes to the same bytes.
#[derive(Debug, Clone)]
pub struct EncodingPrism<E> {
    engine: E,
}

impl<E: Engine> EncodingPrism<E> {
    /// Creates a prism decoding with `engine`.
    #[must_use]
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }
}

impl<E: Engine> Prism<String, Vec<u8>> for EncodingPrism<E> {
    fn get_option(&self, source: &String) -> Option<Vec<u8>> {
        self.engine.decode(source).ok()
    }

    fn reverse_get(&self, value: Vec<u8>) -> String {
        self.engine.encode(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("FromEncoding")
    }
}

/// Creates a base64 prism for the given engine.
///
/// # Example
///
/// ```
/// use base64::engine::general_purpose::STANDARD;
/// use prismata::optics::{Prism, from_encoding};
///
/// let prism = from_encoding(STANDARD);
///
/// assert_eq!(prism.get_option(&"aGVsbG8=".to_string()), Some(b"hello".to_vec()));
/// assert_eq!(prism.get_option(&"not base64!".to_string()), None);
/// assert_eq!(prism.reverse_get(b"hello".to_vec()), "aGVsbG8=");
/// ```
#[must_use]
pub const fn from_encoding<E: Engine>(engine: E) -> EncodingPrism<E> {
    EncodingPrism::new(engine)
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", Some(vec![]))]
    #[case("AQID", Some(vec![1, 2, 3]))]
    #[case("AQI", None)]
    #[case("A===", None)]
    fn standard_engine_cases(#[case] input: &str, #[case] expected: Option<Vec<u8>>) {
        assert_eq!(from_encoding(STANDARD).get_option(&input.to_string()), expected);
    }

    #[rstest]
    fn url_safe_engine_uses_its_own_alphabet() {
        let prism = from_encoding(URL_SAFE_NO_PAD);
        assert_eq!(prism.reverse_get(vec![0xfb, 0xff]), "-_8");
        assert_eq!(prism.get_option(&"-_8".to_string()), Some(vec![0xfb, 0xff]));
        assert_eq!(from_encoding(STANDARD).get_option(&"-_8=".to_string()), None);
    }
}
