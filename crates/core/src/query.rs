// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-phase query execution.
//!
//! 1. Evaluate the compiled filter for every object without runtime data
//!    and keep the objects that pass.
//! 2. Ask the [`RuntimeSource`] for runtime snapshots of the survivors only.
//! 3. Evaluate the same filter again with those snapshots.
//!
//! When no leaf of the filter needs runtime data the first pass is already
//! final and the runtime source is never called.

use crate::error::{Error, ErrorKind, Result};
use crate::field::FieldCatalog;
use crate::filter::{compile_filter, needs_runtime, CompiledFilter, Evaluator, Filter};

/// Gathers runtime snapshots for a batch of objects.
pub trait RuntimeSource<O, R> {
    /// Returns one entry per object, in order. `None` means no data could
    /// be collected for that object; its runtime-backed leaves then pass.
    fn gather(&mut self, objects: &[&O]) -> Vec<Option<R>>;
}

impl<O, R, F> RuntimeSource<O, R> for F
where
    F: FnMut(&[&O]) -> Vec<Option<R>>,
{
    fn gather(&mut self, objects: &[&O]) -> Vec<Option<R>> {
        self(objects)
    }
}

/// An object whose evaluation failed.
#[derive(Debug)]
pub struct ObjectFailure {
    /// Position of the object in the input slice.
    pub index: usize,
    pub error: Error,
}

/// Result of running a query over a batch of objects.
#[derive(Debug, Default)]
pub struct QueryOutcome {
    /// Positions of matching objects, in input order.
    pub matched: Vec<usize>,
    /// Objects whose evaluation failed; they are not in `matched`.
    pub failures: Vec<ObjectFailure>,
}

impl QueryOutcome {
    /// The matching objects themselves.
    pub fn matched_objects<'a, O>(&self, objects: &'a [O]) -> Vec<&'a O> {
        self.matched.iter().filter_map(|&i| objects.get(i)).collect()
    }

    /// Fails with the first recorded error, for callers that treat any
    /// per-object error as fatal to the whole query.
    pub fn into_result(mut self) -> Result<Vec<usize>> {
        if self.failures.is_empty() {
            Ok(self.matched)
        } else {
            Err(self.failures.swap_remove(0).error)
        }
    }
}

/// A compiled filter plus the evaluator to run it with.
pub struct TwoPhaseQuery<C, O, R> {
    filter: CompiledFilter<C, O, R>,
    evaluator: Evaluator,
    needs_runtime: bool,
}

impl<C, O, R> TwoPhaseQuery<C, O, R> {
    pub fn new(filter: CompiledFilter<C, O, R>) -> Self {
        let needs_runtime = needs_runtime(&filter);
        TwoPhaseQuery {
            filter,
            evaluator: Evaluator::default(),
            needs_runtime,
        }
    }

    /// Compiles `filter` against `catalog`.
    pub fn compile(catalog: &FieldCatalog<C, O, R>, filter: &Filter<String>) -> Result<Self> {
        Ok(Self::new(compile_filter(catalog, filter)?))
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn filter(&self) -> &CompiledFilter<C, O, R> {
        &self.filter
    }

    /// Returns true if the second pass (and the runtime source) is needed.
    pub fn needs_runtime(&self) -> bool {
        self.needs_runtime
    }

    /// Runs both passes over `objects`.
    ///
    /// An error for one object is recorded in the outcome and does not stop
    /// the evaluation of the others.
    pub fn run<S>(&self, config: &C, objects: &[O], source: &mut S) -> QueryOutcome
    where
        S: RuntimeSource<O, R>,
    {
        let mut outcome = QueryOutcome::default();

        let mut survivors = Vec::new();
        for (index, object) in objects.iter().enumerate() {
            match self.evaluator.evaluate(config, None, object, &self.filter) {
                Ok(true) => survivors.push(index),
                Ok(false) => {}
                Err(error) => record_failure(&mut outcome, index, error),
            }
        }
        tracing::debug!("{} of {} objects survived the first pass", survivors.len(), objects.len());

        if !self.needs_runtime {
            outcome.matched = survivors;
            return outcome;
        }
        if survivors.is_empty() {
            return outcome;
        }

        let batch: Vec<&O> = survivors.iter().map(|&i| &objects[i]).collect();
        let runtimes = source.gather(&batch);
        if runtimes.len() != batch.len() {
            tracing::warn!(
                "runtime source returned {} snapshots for {} objects",
                runtimes.len(),
                batch.len()
            );
        }

        for (pos, (&index, object)) in survivors.iter().zip(&batch).enumerate() {
            let runtime = runtimes.get(pos).and_then(Option::as_ref);
            match self.evaluator.evaluate(config, runtime, *object, &self.filter) {
                Ok(true) => outcome.matched.push(index),
                Ok(false) => {}
                Err(error) => record_failure(&mut outcome, index, error),
            }
        }
        tracing::debug!("{} objects matched", outcome.matched.len());
        outcome
    }
}

fn record_failure(outcome: &mut QueryOutcome, index: usize, error: Error) {
    match error.kind() {
        ErrorKind::Programmer => {
            tracing::error!("field getter contract violated for object {}: {}", index, error)
        }
        ErrorKind::Parameter => tracing::debug!("filter rejected object {}: {}", index, error),
    }
    outcome.failures.push(ObjectFailure { index, error });
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
