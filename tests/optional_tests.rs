//! Tests for optionals built from lenses and prisms.

use prismata::lens;
use prismata::optics::{LensComposeExtension, Optional, from_option, parse_int};
use rstest::rstest;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Inner {
    value: Option<i32>,
}

#[derive(Clone, PartialEq, Debug)]
struct Outer {
    inner: Option<Inner>,
}

fn outer(value: Option<Option<i32>>) -> Outer {
    Outer {
        inner: value.map(|value| Inner { value }),
    }
}

fn nested_value() -> impl Optional<Outer, i32> {
    lens!(Outer, inner)
        .compose_prism(from_option::<Inner>())
        .compose_lens(lens!(Inner, value))
        .compose(from_option::<i32>())
}

// =============================================================================
// Three-level composition
// =============================================================================

#[rstest]
#[case(outer(Some(Some(7))), Some(7))]
#[case(outer(Some(None)), None)]
#[case(outer(None), None)]
fn get_option_through_three_levels(#[case] source: Outer, #[case] expected: Option<i32>) {
    assert_eq!(nested_value().get_option(&source), expected);
}

#[rstest]
#[case(outer(Some(Some(7))), outer(Some(Some(8))))]
#[case(outer(Some(None)), outer(Some(None)))]
#[case(outer(None), outer(None))]
fn set_through_three_levels(#[case] source: Outer, #[case] expected: Outer) {
    assert_eq!(nested_value().set(source, 8), expected);
}

#[rstest]
fn modify_option_through_three_levels() {
    let optional = nested_value();
    assert_eq!(
        optional.modify_option(outer(Some(Some(2))), |n| n * 10),
        Some(outer(Some(Some(20))))
    );
    assert_eq!(optional.modify_option(outer(Some(None)), |n| n * 10), None);
}

#[rstest]
fn is_present_tracks_every_level() {
    let optional = nested_value();
    assert!(optional.is_present(&outer(Some(Some(0)))));
    assert!(!optional.is_present(&outer(Some(None))));
    assert!(!optional.is_present(&outer(None)));
}

// =============================================================================
// Lens then parsing prism
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Form {
    quantity: String,
}

#[rstest]
#[case("3", Some(3))]
#[case("three", None)]
fn lens_then_parse(#[case] quantity: &str, #[case] expected: Option<i64>) {
    let optional = lens!(Form, quantity).compose_prism(parse_int());
    let form = Form {
        quantity: quantity.to_string(),
    };
    assert_eq!(optional.get_option(&form), expected);
}

#[rstest]
fn lens_then_parse_set_leaves_invalid_text_alone() {
    let optional = lens!(Form, quantity).compose_prism(parse_int());
    let invalid = Form {
        quantity: "many".to_string(),
    };
    assert_eq!(optional.set(invalid.clone(), 4), invalid);
    assert_eq!(
        optional.modify(Form { quantity: "4".to_string() }, |n| n + 1),
        Form { quantity: "5".to_string() }
    );
}
