// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! clq-core: query filter evaluation for cluster objects.
//!
//! Decides, for each cluster object (node, instance, job, ...), whether it
//! satisfies a boolean filter over named fields.
//!
//! # Main Components
//!
//! - [`FieldCatalog`] - field names mapped to getters and comparison modes
//! - [`Filter`] - the filter tree, compiled with [`compile_filter`]
//! - [`Evaluator`] - evaluates a compiled filter against one object
//! - [`requested_names`] / [`name_filter`] - the "exactly these names" fast path
//! - [`TwoPhaseQuery`] - prune without runtime data, then decide with it
//!
//! # Usage
//!
//! ```rust,ignore
//! use clq_core::{compile_filter, evaluate_filter, Filter, FilterValue};
//!
//! let filter = Filter::Gt("mfree".to_string(), FilterValue::from(1024));
//! let compiled = compile_filter(&catalog, &filter)?;
//!
//! // First pass: runtime-backed leaves pass.
//! let maybe = evaluate_filter(&config, None, &node, &compiled)?;
//! // Second pass, for survivors only.
//! let matches = evaluate_filter(&config, Some(&live), &node, &compiled)?;
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod filter;
pub mod hostname;
pub mod query;
pub mod value;

#[cfg(test)]
mod test_helpers;

pub use config::{HostnameConfig, QueryConfig};
pub use error::{Error, ErrorKind, Result};
pub use field::{FieldCatalog, FieldDefinition, FieldEntry, FieldGetter, FieldType};
pub use filter::{
    compile_filter, evaluate_filter, name_filter, needs_runtime, requested_names,
    resolve_getter, CompiledField, CompiledFilter, Evaluator, Filter,
};
pub use hostname::{LookupResult, NameComponentMatcher, NameMatcher};
pub use query::{ObjectFailure, QueryOutcome, RuntimeSource, TwoPhaseQuery};
pub use value::{FilterRegex, FilterValue, QffMode, ResultEntry, ResultStatus};
