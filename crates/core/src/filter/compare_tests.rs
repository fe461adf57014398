// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::hostname::NameComponentMatcher;
use serde_json::json;
use yare::parameterized;

// ─────────────────────────────────────────────────────────────────────────────
// Typed comparison
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    str_eq = { CompareOp::Eq, json!("web01"), FilterValue::from("web01"), true },
    str_ne = { CompareOp::Eq, json!("web01"), FilterValue::from("web02"), false },
    str_lt = { CompareOp::Lt, json!("alpha"), FilterValue::from("beta"), true },
    str_ge = { CompareOp::Ge, json!("alpha"), FilterValue::from("beta"), false },
    num_eq = { CompareOp::Eq, json!(1024), FilterValue::from(1024), true },
    num_lt = { CompareOp::Lt, json!(9), FilterValue::from(10), true },
    num_le_boundary = { CompareOp::Le, json!(10), FilterValue::from(10), true },
    num_gt = { CompareOp::Gt, json!(11), FilterValue::from(10), true },
    num_gt_boundary = { CompareOp::Gt, json!(10), FilterValue::from(10), false },
    num_ge = { CompareOp::Ge, json!(-1), FilterValue::from(0), false },
    huge_unsigned = { CompareOp::Gt, json!(u64::MAX), FilterValue::from(i64::MAX), true },
    float_value = { CompareOp::Lt, json!(2.5), FilterValue::from(3), true },
    float_fraction_above = { CompareOp::Gt, json!(2.5), FilterValue::from(2), true },
    float_fraction_below = { CompareOp::Lt, json!(-0.5), FilterValue::from(0), true },
    float_whole_eq = { CompareOp::Eq, json!(4.0), FilterValue::from(4), true },
    float_beyond_i64 = { CompareOp::Gt, json!(1e19), FilterValue::from(i64::MAX), true },
    float_below_i64 = { CompareOp::Lt, json!(-1e19), FilterValue::from(i64::MIN), true },
)]
fn typed_comparison(op: CompareOp, value: Value, literal: FilterValue, expected: bool) {
    assert_eq!(compare_typed(op, &value, &literal).unwrap(), expected);
}

#[test]
fn float_compares_exactly_against_large_literal() {
    // 2^53 + 1 has no f64 representation; rounding it would report equality.
    let value = json!(9_007_199_254_740_992.0_f64);
    let literal = FilterValue::from(9_007_199_254_740_993);
    assert!(!compare_typed(CompareOp::Eq, &value, &literal).unwrap());
    assert!(compare_typed(CompareOp::Lt, &value, &literal).unwrap());
}

#[test]
fn numbers_compare_numerically_not_as_text() {
    // "10" < "9" as text, but not as numbers.
    assert!(!compare_typed(CompareOp::Lt, &json!(10), &FilterValue::from(9)).unwrap());
}

#[parameterized(
    string_literal_number_value = { json!(42), FilterValue::from("42") },
    number_literal_string_value = { json!("42"), FilterValue::from(42) },
    bool_value = { json!(true), FilterValue::from(1) },
    null_value = { Value::Null, FilterValue::from("x") },
    list_value = { json!(["a"]), FilterValue::from("a") },
)]
fn typed_comparison_kind_mismatch(value: Value, literal: FilterValue) {
    let err = compare_typed(CompareOp::Eq, &value, &literal).unwrap_err();
    match err {
        Error::TypeMismatch { expected, actual } => {
            assert_eq!(expected, literal.to_string());
            assert_eq!(actual, value.to_string());
        }
        other => unreachable!("expected TypeMismatch, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode-sensitive equality
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    short_name = { json!("node1.cluster.local"), "node1", true },
    exact = { json!("node1.cluster.local"), "node1.cluster.local", true },
    prefix_not_component = { json!("node10.cluster.local"), "node1", false },
    other_node = { json!("node2.cluster.local"), "node1", false },
)]
fn hostname_equality(value: Value, literal: &str, expected: bool) {
    let matcher = NameComponentMatcher::default();
    let result = compare_eq(&matcher, QffMode::Hostname, &value, &FilterValue::from(literal));
    assert_eq!(result.unwrap(), expected);
}

#[test]
fn normal_equality_is_raw_string_equality() {
    let matcher = NameComponentMatcher::default();
    let value = json!("node1.cluster.local");
    let result = compare_eq(&matcher, QffMode::Normal, &value, &FilterValue::from("node1"));
    assert!(!result.unwrap());
}

#[test]
fn hostname_numeric_value_is_programmer_error() {
    let matcher = NameComponentMatcher::default();
    let err = compare_eq(&matcher, QffMode::Hostname, &json!(7), &FilterValue::from("node1"))
        .unwrap_err();
    assert!(matches!(err, Error::NumericHostname { .. }));
    assert!(err.is_programmer_error());
}

#[test]
fn hostname_numeric_literal_is_parameter_error() {
    let matcher = NameComponentMatcher::default();
    let err = compare_eq(&matcher, QffMode::Hostname, &json!("node1"), &FilterValue::from(1))
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert!(!err.is_programmer_error());
}

#[test]
fn hostname_non_string_value_is_parameter_error() {
    let matcher = NameComponentMatcher::default();
    let err = compare_eq(&matcher, QffMode::Hostname, &json!(true), &FilterValue::from("x"))
        .unwrap_err();
    assert!(matches!(err, Error::NotAString { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Regex, membership, boolean
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn regex_matches_string_value() {
    let re = FilterRegex::new("^web[0-9]+").unwrap();
    assert!(regex_match(&json!("web01.example.com"), &re).unwrap());
    assert!(!regex_match(&json!("db01.example.com"), &re).unwrap());
}

#[test]
fn regex_rejects_non_string_value() {
    let re = FilterRegex::new("^1").unwrap();
    let err = regex_match(&json!(12), &re).unwrap_err();
    assert!(matches!(err, Error::NotAString { .. }));
    assert!(!err.is_programmer_error());
}

#[parameterized(
    string_member = { json!(["rack:a", "ssd"]), FilterValue::from("ssd"), true },
    string_absent = { json!(["rack:a", "ssd"]), FilterValue::from("hdd"), false },
    empty_list = { json!([]), FilterValue::from("ssd"), false },
    number_member = { json!([1, 2, 3]), FilterValue::from(2), true },
    number_absent = { json!([1, 2, 3]), FilterValue::from(4), false },
)]
fn contains_membership(value: Value, literal: FilterValue, expected: bool) {
    assert_eq!(contains(&value, &literal).unwrap(), expected);
}

#[parameterized(
    numbers_for_string = { json!([1, 2]), FilterValue::from("1") },
    strings_for_number = { json!(["1"]), FilterValue::from(1) },
    not_a_list = { json!("ssd"), FilterValue::from("ssd") },
)]
fn contains_decode_failure(value: Value, literal: FilterValue) {
    let err = contains(&value, &literal).unwrap_err();
    match err {
        Error::ListDecode { element, .. } => assert_eq!(element, literal.kind_name()),
        other => unreachable!("expected ListDecode, got {:?}", other),
    }
}

#[test]
fn contains_decode_failure_names_element_kind() {
    let err = contains(&json!([1, 2]), &FilterValue::from("1")).unwrap_err();
    assert!(err.to_string().contains("as a list of string values"));
    let err = contains(&json!(["a"]), &FilterValue::from(1)).unwrap_err();
    assert!(err.to_string().contains("as a list of integer values"));
}

#[test]
fn is_true_requires_boolean() {
    assert!(is_true(&json!(true)).unwrap());
    assert!(!is_true(&json!(false)).unwrap());
    let err = is_true(&json!("true")).unwrap_err();
    assert!(err.to_string().contains("unexpected value in boolean context"));
}
