// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Type-aware comparison of fetched field values against filter literals.
//!
//! A string literal only compares with a string value and an integer
//! literal only with a numeric value; anything else is a type error.

use serde_json::{Number, Value};
use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::hostname::NameMatcher;
use crate::value::{FilterRegex, FilterValue, QffMode};

/// Ordering operators for typed comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareOp {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    fn holds(self, ord: Ordering) -> bool {
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Le => ord != Ordering::Greater,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Ge => ord != Ordering::Less,
        }
    }
}

fn mismatch(literal: &FilterValue, value: &Value) -> Error {
    Error::TypeMismatch {
        expected: literal.to_string(),
        actual: value.to_string(),
    }
}

/// Orders a JSON number against an integer literal in the number's own type.
fn cmp_number(number: &Number, literal: i64) -> Option<Ordering> {
    if let Some(n) = number.as_i64() {
        Some(n.cmp(&literal))
    } else if number.is_u64() {
        // Only reached for values above i64::MAX.
        Some(Ordering::Greater)
    } else {
        cmp_float(number.as_f64()?, literal)
    }
}

/// Orders a float against an integer without rounding the integer to `f64`.
fn cmp_float(value: f64, literal: i64) -> Option<Ordering> {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if value.is_nan() {
        return None;
    }
    if value >= LIMIT {
        return Some(Ordering::Greater);
    }
    if value < -LIMIT {
        return Some(Ordering::Less);
    }
    let whole = value.trunc();
    // In range, so the cast is exact.
    let ord = (whole as i64).cmp(&literal);
    Some(ord.then(value.total_cmp(&whole)))
}

/// `value op literal`, with both sides required to be the same kind.
pub(crate) fn compare_typed(op: CompareOp, value: &Value, literal: &FilterValue) -> Result<bool> {
    let ord = match (literal, value) {
        (FilterValue::QuotedString(lit), Value::String(v)) => v.as_str().cmp(lit.as_str()),
        (FilterValue::NumericValue(lit), Value::Number(v)) => {
            cmp_number(v, *lit).ok_or_else(|| mismatch(literal, value))?
        }
        _ => return Err(mismatch(literal, value)),
    };
    Ok(op.holds(ord))
}

/// Equality under `mode`: hostname fields compare by name component.
pub(crate) fn compare_eq(
    matcher: &dyn NameMatcher,
    mode: QffMode,
    value: &Value,
    literal: &FilterValue,
) -> Result<bool> {
    match mode {
        QffMode::Normal | QffMode::Timestamp => compare_typed(CompareOp::Eq, value, literal),
        QffMode::Hostname => match (literal, value) {
            (FilterValue::QuotedString(lit), Value::String(v)) => {
                Ok(matcher.compare(v, lit).is_match())
            }
            (FilterValue::NumericValue(_), Value::String(_)) => Err(mismatch(literal, value)),
            (_, Value::Number(_)) => Err(Error::NumericHostname {
                actual: value.to_string(),
            }),
            _ => Err(Error::NotAString {
                context: "hostname comparison",
                actual: value.to_string(),
            }),
        },
    }
}

pub(crate) fn regex_match(value: &Value, regex: &FilterRegex) -> Result<bool> {
    match value {
        Value::String(s) => Ok(regex.is_match(s)),
        _ => Err(Error::NotAString {
            context: "regular expression match",
            actual: value.to_string(),
        }),
    }
}

/// Decodes `value` as a list of elements of the literal's kind.
fn decode_list<T>(value: &Value, literal: &FilterValue) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value.clone()).map_err(|source| Error::ListDecode {
        element: literal.kind_name(),
        actual: value.to_string(),
        source,
    })
}

/// Membership of `literal` in the list `value`.
pub(crate) fn contains(value: &Value, literal: &FilterValue) -> Result<bool> {
    match literal {
        FilterValue::QuotedString(lit) => {
            let items: Vec<String> = decode_list(value, literal)?;
            Ok(items.iter().any(|item| item == lit))
        }
        FilterValue::NumericValue(lit) => {
            let items: Vec<i64> = decode_list(value, literal)?;
            Ok(items.contains(lit))
        }
    }
}

pub(crate) fn is_true(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        _ => Err(Error::NotABoolean {
            actual: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
