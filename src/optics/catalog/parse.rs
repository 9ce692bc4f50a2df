//! Prisms from strings to the values they spell.

use std::str::FromStr;

use paste::paste;

use crate::optics::{FunctionPrism, Prism};

/// Parses a string with [`FromStr`] and renders it back with [`ToString`].
///
/// Any parse error means no match. Round-tripping is exact for the focus,
/// not for the source: `"+7"` parses to `7`, which renders as `"7"`.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
/// use prismata::optics::{Prism, parse};
///
/// let prism = parse::<Ipv4Addr>();
/// assert_eq!(prism.get_option(&"127.0.0.1".to_string()), Some(Ipv4Addr::LOCALHOST));
/// assert_eq!(prism.get_option(&"localhost".to_string()), None);
/// ```
#[must_use]
pub fn parse<T>() -> impl Prism<String, T> + Clone
where
    T: FromStr + ToString,
{
    FunctionPrism::named(
        "Parse",
        |source: &String| source.parse::<T>().ok(),
        |value: T| value.to_string(),
    )
}

/// Parses a decimal `i64`.
#[must_use]
pub fn parse_int() -> impl Prism<String, i64> + Clone {
    parse::<i64>()
}

/// Parses an `f64`.
#[must_use]
pub fn parse_float() -> impl Prism<String, f64> + Clone {
    parse::<f64>()
}

/// Parses `"true"` or `"false"`.
#[must_use]
pub fn parse_bool() -> impl Prism<String, bool> + Clone {
    parse::<bool>()
}

macro_rules! parse_prisms {
    ($($number:ident),+ $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Parses a `", stringify!($number), "`.")]
                #[must_use]
                pub fn [<parse_ $number>]() -> impl Prism<String, $number> + Clone {
                    parse::<$number>()
                }
            )+
        }
    };
}

parse_prisms!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Some(42))]
    #[case("-7", Some(-7))]
    #[case("4.2", None)]
    #[case("", None)]
    #[case("abc", None)]
    fn parse_int_cases(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_int().get_option(&input.to_string()), expected);
    }

    #[rstest]
    #[case("255", Some(255))]
    #[case("256", None)]
    fn parse_u8_respects_the_range(#[case] input: &str, #[case] expected: Option<u8>) {
        assert_eq!(parse_u8().get_option(&input.to_string()), expected);
    }

    #[rstest]
    fn parse_float_renders_back() {
        let prism = parse_float();
        assert_eq!(prism.get_option(&"1.5".to_string()), Some(1.5));
        assert_eq!(prism.reverse_get(2.25), "2.25");
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("false", Some(false))]
    #[case("True", None)]
    fn parse_bool_is_case_sensitive(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool().get_option(&input.to_string()), expected);
    }

    #[rstest]
    fn parse_f32_is_generated() {
        assert_eq!(parse_f32().get_option(&"0.5".to_string()), Some(0.5_f32));
        assert_eq!(parse_i128().reverse_get(-1), "-1");
    }
}
