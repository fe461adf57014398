// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    unknown_field = { Error::UnknownField { field: "no_such_field".into() }, "no_such_field" },
    not_a_boolean = { Error::NotABoolean { actual: "\"yes\"".into() }, "boolean context" },
    missing_value = { Error::MissingValue { field: "mtotal".into() }, "without a value" },
    timestamp_shape = { Error::TimestampShape { actual: "17".into() }, "(seconds, fraction)" },
    config = { Error::Config("bad name_field".into()), "bad name_field" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn type_mismatch_display_names_both_sides() {
    let err = Error::TypeMismatch {
        expected: "\"web\"".into(),
        actual: "42".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("\"web\""));
    assert!(msg.contains("42"));
}

#[parameterized(
    unknown_field = { Error::UnknownField { field: "x".into() }, ErrorKind::Parameter },
    type_mismatch = {
        Error::TypeMismatch { expected: "1".into(), actual: "\"a\"".into() },
        ErrorKind::Parameter
    },
    not_a_string = {
        Error::NotAString { context: "regexp", actual: "1".into() },
        ErrorKind::Parameter
    },
    missing_value = { Error::MissingValue { field: "x".into() }, ErrorKind::Programmer },
    timestamp_shape = { Error::TimestampShape { actual: "1".into() }, ErrorKind::Programmer },
    numeric_hostname = { Error::NumericHostname { actual: "1".into() }, ErrorKind::Programmer },
)]
fn error_kind(err: Error, kind: ErrorKind) {
    assert_eq!(err.kind(), kind);
    assert_eq!(err.is_programmer_error(), kind == ErrorKind::Programmer);
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.kind(), ErrorKind::Parameter);
}
