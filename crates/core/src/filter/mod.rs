// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter trees, their compilation and evaluation.
//!
//! A query filter is built over field names, compiled once against a
//! [`FieldCatalog`](crate::field::FieldCatalog), then evaluated per object:
//!
//! ```text
//! Filter<String> --compile_filter--> CompiledFilter --evaluate--> bool
//! ```
//!
//! # Operators
//!
//! - `And`, `Or`, `Not` - boolean structure, evaluated left to right with
//!   short-circuiting
//! - `IsTrue` - the field is boolean `true`
//! - `Eq`, `Lt`, `Le`, `Gt`, `Ge` - typed comparison with a string or
//!   integer literal
//! - `Regexp` - the field is a string matching a pattern
//! - `Contains` - the field is a list holding the literal
//!
//! # Missing data
//!
//! A leaf whose value is not available (no runtime snapshot yet, or a
//! non-normal result status) passes. This keeps a first pass without runtime
//! data from discarding objects that could still match.

mod compare;
mod compile;
mod eval;
mod expr;
mod names;

pub use compile::{compile_filter, needs_runtime, CompiledField, CompiledFilter};
pub use eval::{evaluate_filter, resolve_getter, Evaluator};
pub use expr::Filter;
pub use names::{name_filter, requested_names};
