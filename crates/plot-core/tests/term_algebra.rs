// File: crates/plot-core/tests/term_algebra.rs
// Purpose: Validate term parsing, multiplication policies, and distribution.

use plot_core::term::{distribute, multiply, parse_expression, term_multiply, Op, Term};

#[test]
fn parse_recognizes_sign_literal_and_variable() {
    let t = Term::parse("-2.5y");
    assert_eq!(t.coefficient_raw, "-2.5");
    assert_eq!(t.coefficient_value, Some(-2.5));
    assert_eq!(t.variable, "y");

    let bare = Term::parse("-x");
    assert_eq!(bare.coefficient_value, Some(-1.0));
    assert_eq!(bare.variable, "x");
    assert!(!bare.has_explicit_coefficient());

    let constant = Term::parse("5");
    assert_eq!(constant.coefficient_value, Some(5.0));
    assert_eq!(constant.variable, "");
    assert!(constant.is_constant());

    let unsigned = Term::parse("x");
    assert_eq!(unsigned.coefficient_value, Some(1.0));
}

#[test]
fn parse_falls_back_to_opaque_token() {
    let t = Term::parse("2^x");
    assert_eq!(t.coefficient_value, None);
    assert_eq!(t.variable, "2^x");

    // Opaque tokens re-serialize verbatim.
    assert_eq!(t.to_string(), "2^x");
}

#[test]
fn display_elides_unit_coefficients() {
    assert_eq!(Term::parse("x").to_string(), "x");
    assert_eq!(Term::parse("-x").to_string(), "-x");
    assert_eq!(Term::parse("-2.5y").to_string(), "-2.5y");
    assert_eq!(Term::parse("7").to_string(), "7");
}

#[test]
fn multiply_by_one_is_identity() {
    for term in ["2x", "-x", "5", "-2.5y", "weird+token"] {
        assert_eq!(multiply(term, 1), term);
        assert_eq!(multiply(term, "1"), term);
    }
}

#[test]
fn multiply_by_minus_one_toggles_sign() {
    assert_eq!(multiply("3x", -1), "-3x");
    assert_eq!(multiply("-3x", -1), "3x");
    // Sign removed, coefficient digits untouched.
    assert_eq!(multiply("-1x", -1), "1x");

    // Toggling twice restores the original.
    for term in ["3x", "-y", "12"] {
        assert_eq!(multiply(&multiply(term, -1), -1), term);
    }
}

#[test]
fn multiply_numeric_pairs() {
    assert_eq!(multiply("2x", 3), "6x");
    assert_eq!(multiply("2x", "3"), "6x");
    assert_eq!(multiply("-5", 3), "-15");
    assert_eq!(multiply("0.5x", 0.5), "0.25x");
    // Whole-number products print without a decimal point.
    assert_eq!(multiply("4y", 0.5), "2y");
}

#[test]
fn multiply_bare_variable_takes_multiplier_as_coefficient() {
    assert_eq!(multiply("x", 3), "3x");
    assert_eq!(multiply("x", 2.5), "2.5x");
    // Text multipliers are kept verbatim.
    assert_eq!(multiply("y", "4"), "4y");
}

#[test]
fn multiply_non_numeric_degrades_to_concatenation() {
    assert_eq!(multiply("2x", "a"), "a2x");
    assert_eq!(multiply("x+1", 2), "2x+1");
}

#[test]
fn term_multiply_merges_operation_with_product_sign() {
    assert_eq!(term_multiply("2x", 3, Op::Add), "+ 6x");
    assert_eq!(term_multiply("-5", 3, Op::Add), "- 15");
    assert_eq!(term_multiply("-5", 3, Op::Sub), "+ 15");
}

#[test]
fn distribute_builds_display_expression() {
    assert_eq!(distribute(3, &["2x", "-5"], Op::Add), "6x - 15");
    assert_eq!(distribute("3", &["2x", "-5"], Op::Add), "6x - 15");
    assert_eq!(distribute(2, &["3x", "4"], Op::Sub), "6x - 8");
    assert_eq!(distribute(-1, &["x", "2"], Op::Add), "-x - 2");
}

#[test]
fn parse_expression_splits_signed_terms() {
    let terms = parse_expression("2x - 5");
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].to_string(), "2x");
    assert_eq!(terms[1].coefficient_value, Some(-5.0));

    assert!(parse_expression("").is_empty());

    let trailing = parse_expression("x+3");
    assert_eq!(trailing[0].variable, "x");
    assert_eq!(trailing[1].coefficient_value, Some(3.0));
}
