// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for filter compilation and evaluation.

use thiserror::Error;

/// Which party an [`Error`] blames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid user input: the filter or the configuration is wrong.
    Parameter,
    /// A field getter or the catalog broke its contract.
    Programmer,
}

/// All possible errors that can occur while compiling or evaluating filters.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("cannot compare field value {actual} with filter value {expected}")]
    TypeMismatch { expected: String, actual: String },

    #[error("{context} requires a string value, got {actual}")]
    NotAString {
        context: &'static str,
        actual: String,
    },

    #[error("unexpected value in boolean context: {actual}")]
    NotABoolean { actual: String },

    #[error("cannot decode {actual} as a list of {element} values: {source}")]
    ListDecode {
        element: &'static str,
        actual: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("field '{field}' reported a normal status without a value")]
    MissingValue { field: String },

    #[error("timestamp field returned {actual}, expected a (seconds, fraction) pair")]
    TimestampShape { actual: String },

    #[error("hostname field returned a numeric value: {actual}")]
    NumericHostname { actual: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classifies the error as a user mistake or an internal contract violation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingValue { .. }
            | Error::TimestampShape { .. }
            | Error::NumericHostname { .. } => ErrorKind::Programmer,
            Error::UnknownField { .. }
            | Error::TypeMismatch { .. }
            | Error::NotAString { .. }
            | Error::NotABoolean { .. }
            | Error::ListDecode { .. }
            | Error::InvalidRegex { .. }
            | Error::Config(_)
            | Error::Io(_) => ErrorKind::Parameter,
        }
    }

    /// Returns true for getter/catalog contract violations.
    pub fn is_programmer_error(&self) -> bool {
        self.kind() == ErrorKind::Programmer
    }
}

/// A specialized Result type for clq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
