//! Integration tests for the prism core: construction, `set`, `imap`,
//! `some`, composition with prisms and isos, and the fallible companions.

use prismata::PrismError;
use prismata::control::Either;
use prismata::optics::{
    FunctionIso, FunctionPrism, Iso, Prism, PrismSomeExtension, from_either, from_predicate, id,
    iso_identity, parse_int, some,
};
use prismata::prism;
use rstest::rstest;

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Payment {
    Card(String),
    Cash(u32),
    Voucher(Option<u32>),
}

fn cash_prism() -> impl Prism<Payment, u32> + Clone {
    prism!(Payment, Cash)
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case("42", Some(42))]
#[case("-7", Some(-7))]
#[case("abc", None)]
#[case("", None)]
#[case("4 2", None)]
fn parse_int_get_option(#[case] input: &str, #[case] expected: Option<i64>) {
    assert_eq!(parse_int().get_option(&input.to_string()), expected);
}

#[rstest]
fn parse_int_reverse_get() {
    assert_eq!(parse_int().reverse_get(42), "42");
}

#[rstest]
fn function_prism_default_name_is_prism() {
    let prism = FunctionPrism::new(|n: &u8| Some(*n), |n: u8| n);
    assert_eq!(prism.name(), "Prism");
    assert_eq!(prism.clone().with_name("Byte").name(), "Byte");
}

#[rstest]
#[case(Payment::Cash(10), true)]
#[case(Payment::Card("visa".to_string()), false)]
fn macro_prism_matches_its_variant(#[case] payment: Payment, #[case] matches: bool) {
    assert_eq!(cash_prism().is_match(&payment), matches);
}

#[rstest]
fn id_always_matches() {
    let prism = id::<Payment>();
    let payment = Payment::Card("amex".to_string());
    assert_eq!(prism.get_option(&payment), Some(payment.clone()));
    assert_eq!(prism.reverse_get(payment.clone()), payment);
}

// =============================================================================
// FromPredicate boundary
// =============================================================================

#[rstest]
#[case(0, None)]
#[case(1, Some(1))]
#[case(-1, None)]
fn from_predicate_matches_iff_the_predicate_holds(#[case] input: i32, #[case] expected: Option<i32>) {
    let positive = from_predicate(|n: &i32| *n > 0);
    assert_eq!(positive.get_option(&input), expected);
}

#[rstest]
fn from_predicate_reverse_get_is_identity_even_out_of_domain() {
    let positive = from_predicate(|n: &i32| *n > 0);
    assert_eq!(positive.reverse_get(-3), -3);
    assert_eq!(positive.try_reverse_get(-3), None);
    assert_eq!(positive.try_reverse_get(3), Some(3));
}

// =============================================================================
// Set and modify
// =============================================================================

#[rstest]
#[case("12", 99, "99")]
#[case("twelve", 99, "twelve")]
fn set_replaces_only_a_matching_focus(#[case] source: &str, #[case] value: i64, #[case] expected: &str) {
    assert_eq!(parse_int().set(source.to_string(), value), expected);
}

#[rstest]
fn modify_option_reports_a_mismatch() {
    let prism = cash_prism();
    assert_eq!(
        prism.modify_option(&Payment::Cash(5), |amount| amount * 2),
        Some(Payment::Cash(10))
    );
    assert_eq!(
        prism.modify_option(&Payment::Card("visa".to_string()), |amount| amount * 2),
        None
    );
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
#[case(Either::Right(42), Some(42))]
#[case(Either::Right(-5), None)]
#[case(Either::Left("err".to_string()), None)]
fn either_then_predicate(#[case] source: Either<String, i32>, #[case] expected: Option<i32>) {
    let prism = from_either::<String, i32>().compose(from_predicate(|n: &i32| *n > 0));
    assert_eq!(prism.get_option(&source), expected);
}

#[rstest]
fn composed_reverse_get_runs_inner_first() {
    let prism = from_either::<String, i32>().compose(from_predicate(|n: &i32| *n > 0));
    assert_eq!(prism.reverse_get(7), Either::Right(7));
}

#[rstest]
fn composed_name_joins_both_names() {
    let prism = from_either::<String, i32>()
        .compose(from_predicate(|n: &i32| *n > 0).with_name("Positive"));
    assert_eq!(prism.name(), "FromEither > Positive");
}

#[rstest]
fn second_prism_is_not_invoked_after_a_mismatch() {
    let calls = std::cell::Cell::new(0);
    let counting = FunctionPrism::new(
        |n: &i64| {
            calls.set(calls.get() + 1);
            Some(*n)
        },
        |n: i64| n,
    );
    let prism = parse_int().compose(counting);

    assert_eq!(prism.get_option(&"x".to_string()), None);
    assert_eq!(calls.get(), 0);
    assert_eq!(prism.get_option(&"1".to_string()), Some(1));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn prism_then_iso() {
    let celsius = FunctionIso::new(|tenths: i64| tenths as f64 / 10.0, |c: f64| (c * 10.0) as i64);
    let prism = parse_int().compose_iso(celsius);

    assert_eq!(prism.get_option(&"215".to_string()), Some(21.5));
    assert_eq!(prism.reverse_get(3.0), "30");
    assert_eq!(prism.get_option(&"warm".to_string()), None);
}

#[rstest]
fn iso_then_prism() {
    let trimmed = FunctionIso::new(|s: String| s.trim().to_string(), |s: String| s);
    let prism = trimmed.compose_prism(parse_int());

    assert_eq!(prism.get_option(&"  8 ".to_string()), Some(8));
    assert_eq!(prism.reverse_get(8), "8");
}

#[rstest]
fn identity_iso_is_a_neutral_element() {
    let prism = iso_identity::<String>().compose_prism(parse_int());
    assert_eq!(prism.get_option(&"3".to_string()), Some(3));
    assert_eq!(iso_identity::<u8>().to_prism().get_option(&4), Some(4));
}

// =============================================================================
// IMap and Some
// =============================================================================

#[rstest]
fn imap_maps_both_directions() {
    let prism = cash_prism().imap(|cents| f64::from(cents) / 100.0, |amount: f64| (amount * 100.0) as u32);
    assert_eq!(prism.get_option(&Payment::Cash(250)), Some(2.5));
    assert_eq!(prism.reverse_get(1.25), Payment::Cash(125));
    assert_eq!(prism.name(), "Cash");
}

#[rstest]
#[case(Payment::Voucher(Some(5)), Some(5))]
#[case(Payment::Voucher(None), None)]
#[case(Payment::Cash(5), None)]
fn some_unwraps_an_optional_focus(#[case] payment: Payment, #[case] expected: Option<u32>) {
    let voucher = prism!(Payment, Voucher);
    assert_eq!(some(voucher.clone()).get_option(&payment), expected);
    assert_eq!(voucher.some().get_option(&payment), expected);
}

#[rstest]
fn some_reverse_get_wraps_in_some() {
    let prism = some(prism!(Payment, Voucher));
    assert_eq!(prism.reverse_get(3), Payment::Voucher(Some(3)));
}

// =============================================================================
// get_or_error
// =============================================================================

#[rstest]
fn get_or_error_names_the_prism() {
    let error = parse_int().get_or_error(&"nope".to_string()).unwrap_err();
    assert!(matches!(error, PrismError::NoMatch { .. }));
    assert_eq!(error.prism(), "Parse");
    assert_eq!(error.to_string(), "prism `Parse` did not match the source");
}

#[rstest]
fn get_or_error_returns_the_focus() {
    assert_eq!(cash_prism().get_or_error(&Payment::Cash(1)).ok(), Some(1));
}
