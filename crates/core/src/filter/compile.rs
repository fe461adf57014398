// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of field names to getters.

use std::fmt;

use crate::error::{Error, Result};
use crate::field::{FieldCatalog, FieldGetter};
use crate::value::QffMode;

use super::expr::Filter;

/// A filter leaf after compilation: the getter and mode taken from the catalog.
pub struct CompiledField<C, O, R> {
    /// Field name, kept for diagnostics.
    pub name: String,
    pub getter: FieldGetter<C, O, R>,
    pub mode: QffMode,
}

impl<C, O, R> Clone for CompiledField<C, O, R> {
    fn clone(&self) -> Self {
        CompiledField {
            name: self.name.clone(),
            getter: self.getter.clone(),
            mode: self.mode,
        }
    }
}

impl<C, O, R> fmt::Debug for CompiledField<C, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledField")
            .field("name", &self.name)
            .field("getter", &self.getter)
            .field("mode", &self.mode)
            .finish()
    }
}

/// A filter ready for evaluation.
pub type CompiledFilter<C, O, R> = Filter<CompiledField<C, O, R>>;

/// Compile a name-based filter against `catalog`.
///
/// # Errors
///
/// Returns [`Error::UnknownField`] for the first leaf naming a field the
/// catalog does not have. No partial tree is returned.
pub fn compile_filter<C, O, R>(
    catalog: &FieldCatalog<C, O, R>,
    filter: &Filter<String>,
) -> Result<CompiledFilter<C, O, R>> {
    let compiled = filter.try_map_leaves(|name| -> Result<CompiledField<C, O, R>> {
        let entry = catalog.get(name).ok_or_else(|| Error::UnknownField {
            field: name.clone(),
        })?;
        Ok(CompiledField {
            name: name.clone(),
            getter: entry.getter.clone(),
            mode: entry.mode,
        })
    })?;
    tracing::debug!(
        "compiled filter over fields: {}",
        filter
            .leaves()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(compiled)
}

/// Returns true if any leaf needs a runtime snapshot to be judged.
pub fn needs_runtime<C, O, R>(filter: &CompiledFilter<C, O, R>) -> bool {
    filter.leaves().iter().any(|leaf| leaf.getter.is_runtime())
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
