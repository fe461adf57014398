// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter literals, field-processing modes and getter results.
//!
//! Getters report field values as [`serde_json::Value`]; the filter side only
//! ever carries the two literal kinds in [`FilterValue`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{Error, Result};

/// A literal value appearing in a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterValue {
    /// A string literal.
    QuotedString(String),
    /// An integer literal.
    NumericValue(i64),
}

impl FilterValue {
    /// Returns the kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FilterValue::QuotedString(_) => "string",
            FilterValue::NumericValue(_) => "integer",
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::QuotedString(s) => write!(f, "{:?}", s),
            FilterValue::NumericValue(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::QuotedString(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::QuotedString(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::NumericValue(n)
    }
}

/// A regular expression compiled once and reused across evaluations.
#[derive(Debug, Clone)]
pub struct FilterRegex {
    pattern: String,
    regex: Regex,
}

impl FilterRegex {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegex`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(FilterRegex {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The source text of the pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for FilterRegex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for FilterRegex {}

impl fmt::Display for FilterRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.pattern)
    }
}

/// How a fetched value is normalized before comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QffMode {
    /// Compare the value as-is.
    #[default]
    Normal,
    /// Equality uses name-component matching instead of string equality.
    Hostname,
    /// The value is a `(seconds, fraction)` pair; only seconds are compared.
    Timestamp,
}

/// Status of a field value as reported by a getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// The value is known and present.
    Normal,
    /// The field is not known to the catalog.
    Unknown,
    /// No data was collected for the field.
    NoData,
    /// The value is not available for this object.
    Unavailable,
    /// The node holding the data is offline.
    Offline,
    /// Collecting the value failed.
    Error,
}

impl ResultStatus {
    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Normal => "normal",
            ResultStatus::Unknown => "unknown",
            ResultStatus::NoData => "nodata",
            ResultStatus::Unavailable => "unavailable",
            ResultStatus::Offline => "offline",
            ResultStatus::Error => "error",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a getter knows about one field of one object.
///
/// `value` is only meaningful when `status` is [`ResultStatus::Normal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub status: ResultStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ResultEntry {
    /// A known value.
    pub fn normal(value: impl Into<Value>) -> Self {
        ResultEntry {
            status: ResultStatus::Normal,
            value: Some(value.into()),
        }
    }

    /// An entry carrying only a status.
    pub fn with_status(status: ResultStatus) -> Self {
        ResultEntry {
            status,
            value: None,
        }
    }

    pub fn unknown() -> Self {
        Self::with_status(ResultStatus::Unknown)
    }

    pub fn unavailable() -> Self {
        Self::with_status(ResultStatus::Unavailable)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
