// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recognizing "exactly these names" queries.
//!
//! A filter that is `Empty`, or an `Or` of equalities on the name field,
//! can be served by direct lookup instead of a scan over all objects.

use crate::value::FilterValue;

use super::expr::Filter;

/// Extracts the names requested by a pure name-lookup filter.
///
/// Returns `Some(vec![])` for [`Filter::Empty`] (no restriction) and `None`
/// for any filter that is not an `Or` of `Eq(name_field, _)` leaves.
pub fn requested_names(name_field: &str, filter: &Filter<String>) -> Option<Vec<FilterValue>> {
    match filter {
        Filter::Empty => Some(Vec::new()),
        Filter::Or(children) => {
            let mut names = Vec::new();
            for child in children {
                names.extend(requested_names(name_field, child)?);
            }
            Some(names)
        }
        Filter::Eq(field, value) if field == name_field => Some(vec![value.clone()]),
        _ => None,
    }
}

/// Builds a filter selecting exactly `names`.
///
/// The inverse of [`requested_names`]: an empty list gives [`Filter::Empty`].
pub fn name_filter(name_field: &str, names: &[FilterValue]) -> Filter<String> {
    if names.is_empty() {
        return Filter::Empty;
    }
    Filter::Or(
        names
            .iter()
            .map(|name| Filter::Eq(name_field.to_string(), name.clone()))
            .collect(),
    )
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
