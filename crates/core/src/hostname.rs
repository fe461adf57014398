// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hostname comparison by name component.
//!
//! A short name matches a fully qualified one when it names the leading
//! components: `node1` and `node1.cluster` both match `node1.cluster.local`,
//! while `node` does not.

/// Outcome of comparing a full hostname against a lookup name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupResult {
    /// The names are identical.
    Exact,
    /// The lookup name is a leading-component prefix of the full name.
    Partial,
    NoMatch,
}

impl LookupResult {
    pub fn is_match(self) -> bool {
        matches!(self, LookupResult::Exact | LookupResult::Partial)
    }
}

/// Compares a hostname-mode field value against a filter literal.
pub trait NameMatcher: Send + Sync {
    /// Compare the field value `full` against the filter literal `lookup`.
    fn compare(&self, full: &str, lookup: &str) -> LookupResult;
}

/// The default [`NameMatcher`]: exact or leading-component matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameComponentMatcher {
    case_sensitive: bool,
}

impl NameComponentMatcher {
    pub fn new(case_sensitive: bool) -> Self {
        NameComponentMatcher { case_sensitive }
    }

    fn same(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }
}

impl Default for NameComponentMatcher {
    fn default() -> Self {
        NameComponentMatcher::new(true)
    }
}

impl NameMatcher for NameComponentMatcher {
    fn compare(&self, full: &str, lookup: &str) -> LookupResult {
        if self.same(full, lookup) {
            return LookupResult::Exact;
        }
        let head_matches = full
            .get(..lookup.len())
            .is_some_and(|head| self.same(head, lookup));
        if head_matches && full[lookup.len()..].starts_with('.') {
            LookupResult::Partial
        } else {
            LookupResult::NoMatch
        }
    }
}

#[cfg(test)]
#[path = "hostname_tests.rs"]
mod tests;
