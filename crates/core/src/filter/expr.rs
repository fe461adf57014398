// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The filter tree.
//!
//! A [`Filter`] is generic over its leaf: a field name before compilation,
//! a [`CompiledField`](super::CompiledField) afterwards. Compilation builds a
//! new tree with the same shape; trees are never mutated in place.

use std::convert::Infallible;

use crate::value::{FilterRegex, FilterValue};

/// A boolean expression over field predicates.
///
/// Comparisons read as `field op literal`: `Lt(f, v)` holds when the value of
/// `f` is less than `v`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<L> {
    /// Matches everything.
    Empty,
    And(Vec<Filter<L>>),
    Or(Vec<Filter<L>>),
    Not(Box<Filter<L>>),
    /// The field value is boolean `true`.
    IsTrue(L),
    Eq(L, FilterValue),
    Lt(L, FilterValue),
    Le(L, FilterValue),
    Gt(L, FilterValue),
    Ge(L, FilterValue),
    /// The field value is a string matching the pattern.
    Regexp(L, FilterRegex),
    /// The field value is a list containing the literal.
    Contains(L, FilterValue),
}

impl<L> Filter<L> {
    /// Wraps `inner` in a [`Filter::Not`].
    pub fn negate(inner: Filter<L>) -> Self {
        Filter::Not(Box::new(inner))
    }

    /// All leaves, left to right.
    pub fn leaves(&self) -> Vec<&L> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a L>) {
        match self {
            Filter::Empty => {}
            Filter::And(children) | Filter::Or(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            Filter::Not(child) => child.collect_leaves(out),
            Filter::IsTrue(leaf)
            | Filter::Eq(leaf, _)
            | Filter::Lt(leaf, _)
            | Filter::Le(leaf, _)
            | Filter::Gt(leaf, _)
            | Filter::Ge(leaf, _)
            | Filter::Regexp(leaf, _)
            | Filter::Contains(leaf, _) => out.push(leaf),
        }
    }

    /// Builds a tree of the same shape with every leaf replaced by `f(leaf)`.
    pub fn map_leaves<M, F>(&self, mut f: F) -> Filter<M>
    where
        F: FnMut(&L) -> M,
    {
        let mapped: Result<Filter<M>, Infallible> = self.try_map_inner(&mut |leaf| Ok(f(leaf)));
        match mapped {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }

    /// Like [`map_leaves`](Self::map_leaves), stopping at the first error.
    ///
    /// No partial tree is returned on failure.
    pub fn try_map_leaves<M, E, F>(&self, mut f: F) -> Result<Filter<M>, E>
    where
        F: FnMut(&L) -> Result<M, E>,
    {
        self.try_map_inner(&mut f)
    }

    fn try_map_inner<M, E, F>(&self, f: &mut F) -> Result<Filter<M>, E>
    where
        F: FnMut(&L) -> Result<M, E>,
    {
        Ok(match self {
            Filter::Empty => Filter::Empty,
            Filter::And(children) => Filter::And(Self::try_map_all(children, f)?),
            Filter::Or(children) => Filter::Or(Self::try_map_all(children, f)?),
            Filter::Not(child) => Filter::Not(Box::new(child.try_map_inner(f)?)),
            Filter::IsTrue(leaf) => Filter::IsTrue(f(leaf)?),
            Filter::Eq(leaf, v) => Filter::Eq(f(leaf)?, v.clone()),
            Filter::Lt(leaf, v) => Filter::Lt(f(leaf)?, v.clone()),
            Filter::Le(leaf, v) => Filter::Le(f(leaf)?, v.clone()),
            Filter::Gt(leaf, v) => Filter::Gt(f(leaf)?, v.clone()),
            Filter::Ge(leaf, v) => Filter::Ge(f(leaf)?, v.clone()),
            Filter::Regexp(leaf, re) => Filter::Regexp(f(leaf)?, re.clone()),
            Filter::Contains(leaf, v) => Filter::Contains(f(leaf)?, v.clone()),
        })
    }

    fn try_map_all<M, E, F>(children: &[Filter<L>], f: &mut F) -> Result<Vec<Filter<M>>, E>
    where
        F: FnMut(&L) -> Result<M, E>,
    {
        children.iter().map(|child| child.try_map_inner(f)).collect()
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
