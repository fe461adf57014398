// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of compiled filters against objects.
//!
//! Evaluation runs in one of two phases. Without a runtime snapshot, every
//! predicate on a runtime-backed field passes, so a first pass can prune
//! candidates without ever rejecting one that might match. With a runtime
//! snapshot the same filter gives the final verdict.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::field::FieldGetter;
use crate::hostname::{NameComponentMatcher, NameMatcher};
use crate::value::{QffMode, ResultEntry, ResultStatus};

use super::compare::{self, CompareOp};
use super::compile::{CompiledField, CompiledFilter};
use super::expr::Filter;

/// Runs `getter` if its inputs are available.
///
/// Returns `None` for runtime-backed getters when `runtime` is absent.
pub fn resolve_getter<C, O, R>(
    config: &C,
    runtime: Option<&R>,
    object: &O,
    getter: &FieldGetter<C, O, R>,
) -> Option<ResultEntry> {
    match getter {
        FieldGetter::Simple(f) => Some(f(object)),
        FieldGetter::Config(f) => Some(f(config, object)),
        FieldGetter::Runtime(f) => runtime.map(|rt| f(rt, object)),
        FieldGetter::ConfigRuntime(f) => runtime.map(|rt| f(config, rt, object)),
        FieldGetter::Unknown => Some(ResultEntry::unknown()),
    }
}

/// Applies the field mode to a fetched value.
fn normalize(mode: QffMode, value: Value) -> Result<Value> {
    match mode {
        QffMode::Normal | QffMode::Hostname => Ok(value),
        QffMode::Timestamp => match value {
            Value::Array(mut pair) if pair.len() == 2 && pair[0].is_number() => {
                Ok(pair.swap_remove(0))
            }
            other => Err(Error::TimestampShape {
                actual: other.to_string(),
            }),
        },
    }
}

/// Evaluates compiled filters.
///
/// Holds the hostname matcher used for equality on hostname-mode fields.
#[derive(Clone)]
pub struct Evaluator {
    matcher: Arc<dyn NameMatcher>,
}

impl Evaluator {
    pub fn new(matcher: impl NameMatcher + 'static) -> Self {
        Evaluator {
            matcher: Arc::new(matcher),
        }
    }

    /// Evaluate `filter` for `object`.
    ///
    /// `And` and `Or` stop at the first deciding child or the first error.
    ///
    /// # Errors
    ///
    /// Returns a parameter error when the filter does not fit a field's
    /// value, and a programmer error when a getter breaks its contract.
    pub fn evaluate<C, O, R>(
        &self,
        config: &C,
        runtime: Option<&R>,
        object: &O,
        filter: &CompiledFilter<C, O, R>,
    ) -> Result<bool> {
        let subject = Subject {
            config,
            runtime,
            object,
        };

        match filter {
            Filter::Empty => Ok(true),
            Filter::And(children) => {
                for child in children {
                    if !self.evaluate(config, runtime, object, child)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Filter::Or(children) => {
                for child in children {
                    if self.evaluate(config, runtime, object, child)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Filter::Not(child) => Ok(!self.evaluate(config, runtime, object, child)?),
            Filter::IsTrue(field) => subject.check(field, compare::is_true),
            Filter::Eq(field, lit) => subject.check(field, |v| {
                compare::compare_eq(self.matcher.as_ref(), field.mode, v, lit)
            }),
            Filter::Lt(field, lit) => {
                subject.check(field, |v| compare::compare_typed(CompareOp::Lt, v, lit))
            }
            Filter::Le(field, lit) => {
                subject.check(field, |v| compare::compare_typed(CompareOp::Le, v, lit))
            }
            Filter::Gt(field, lit) => {
                subject.check(field, |v| compare::compare_typed(CompareOp::Gt, v, lit))
            }
            Filter::Ge(field, lit) => {
                subject.check(field, |v| compare::compare_typed(CompareOp::Ge, v, lit))
            }
            Filter::Regexp(field, re) => subject.check(field, |v| compare::regex_match(v, re)),
            Filter::Contains(field, lit) => subject.check(field, |v| compare::contains(v, lit)),
        }
    }
}

/// The inputs one evaluation is judged against.
struct Subject<'a, C, O, R> {
    config: &'a C,
    runtime: Option<&'a R>,
    object: &'a O,
}

impl<C, O, R> Subject<'_, C, O, R> {
    /// Decides one leaf. Missing data of any kind passes.
    fn check<F>(&self, field: &CompiledField<C, O, R>, action: F) -> Result<bool>
    where
        F: FnOnce(&Value) -> Result<bool>,
    {
        let Some(entry) = resolve_getter(self.config, self.runtime, self.object, &field.getter)
        else {
            return Ok(true);
        };
        match entry.status {
            ResultStatus::Normal => {
                let value = entry.value.ok_or_else(|| Error::MissingValue {
                    field: field.name.clone(),
                })?;
                action(&normalize(field.mode, value)?)
            }
            ResultStatus::Unknown
            | ResultStatus::NoData
            | ResultStatus::Unavailable
            | ResultStatus::Offline
            | ResultStatus::Error => Ok(true),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(NameComponentMatcher::default())
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator").finish_non_exhaustive()
    }
}

/// Evaluate `filter` with the default hostname matcher.
///
/// Pass `runtime = None` for the pruning pass and `Some(..)` for the final one.
pub fn evaluate_filter<C, O, R>(
    config: &C,
    runtime: Option<&R>,
    object: &O,
    filter: &CompiledFilter<C, O, R>,
) -> Result<bool> {
    Evaluator::default().evaluate(config, runtime, object, filter)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
