// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field getters and the field catalog.
//!
//! A catalog maps field names to a display definition, a getter and a
//! [`QffMode`]. Getters are generic over three types supplied by the caller:
//!
//! - `C` - the configuration snapshot (always available)
//! - `O` - the object being filtered (node, instance, job, ...)
//! - `R` - the per-object runtime snapshot (only available in the second pass)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::value::{QffMode, ResultEntry};

type SimpleFn<O> = Arc<dyn Fn(&O) -> ResultEntry + Send + Sync>;
type ConfigFn<C, O> = Arc<dyn Fn(&C, &O) -> ResultEntry + Send + Sync>;
type RuntimeFn<R, O> = Arc<dyn Fn(&R, &O) -> ResultEntry + Send + Sync>;
type ConfigRuntimeFn<C, R, O> = Arc<dyn Fn(&C, &R, &O) -> ResultEntry + Send + Sync>;

/// Computes one field's value for an object.
///
/// The variant records which inputs the getter depends on, which is what
/// lets the evaluator tell cheap fields from ones needing runtime data.
pub enum FieldGetter<C, O, R> {
    /// Depends on the object only.
    Simple(SimpleFn<O>),
    /// Depends on the configuration and the object.
    Config(ConfigFn<C, O>),
    /// Depends on the runtime snapshot and the object.
    Runtime(RuntimeFn<R, O>),
    /// Depends on configuration, runtime snapshot and object.
    ConfigRuntime(ConfigRuntimeFn<C, R, O>),
    /// Always reports [`ResultStatus::Unknown`](crate::value::ResultStatus::Unknown).
    Unknown,
}

impl<C, O, R> FieldGetter<C, O, R> {
    pub fn simple<F>(f: F) -> Self
    where
        F: Fn(&O) -> ResultEntry + Send + Sync + 'static,
    {
        FieldGetter::Simple(Arc::new(f))
    }

    pub fn config<F>(f: F) -> Self
    where
        F: Fn(&C, &O) -> ResultEntry + Send + Sync + 'static,
    {
        FieldGetter::Config(Arc::new(f))
    }

    pub fn runtime<F>(f: F) -> Self
    where
        F: Fn(&R, &O) -> ResultEntry + Send + Sync + 'static,
    {
        FieldGetter::Runtime(Arc::new(f))
    }

    pub fn config_runtime<F>(f: F) -> Self
    where
        F: Fn(&C, &R, &O) -> ResultEntry + Send + Sync + 'static,
    {
        FieldGetter::ConfigRuntime(Arc::new(f))
    }

    /// Returns true if the getter can only be resolved with a runtime snapshot.
    pub fn is_runtime(&self) -> bool {
        matches!(self, FieldGetter::Runtime(_) | FieldGetter::ConfigRuntime(_))
    }

    fn variant_name(&self) -> &'static str {
        match self {
            FieldGetter::Simple(_) => "Simple",
            FieldGetter::Config(_) => "Config",
            FieldGetter::Runtime(_) => "Runtime",
            FieldGetter::ConfigRuntime(_) => "ConfigRuntime",
            FieldGetter::Unknown => "Unknown",
        }
    }
}

// Manual impl: derive would demand `C: Clone, O: Clone, R: Clone`.
impl<C, O, R> Clone for FieldGetter<C, O, R> {
    fn clone(&self) -> Self {
        match self {
            FieldGetter::Simple(f) => FieldGetter::Simple(Arc::clone(f)),
            FieldGetter::Config(f) => FieldGetter::Config(Arc::clone(f)),
            FieldGetter::Runtime(f) => FieldGetter::Runtime(Arc::clone(f)),
            FieldGetter::ConfigRuntime(f) => FieldGetter::ConfigRuntime(Arc::clone(f)),
            FieldGetter::Unknown => FieldGetter::Unknown,
        }
    }
}

impl<C, O, R> fmt::Debug for FieldGetter<C, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldGetter::{}", self.variant_name())
    }
}

/// Display type of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Unknown,
    Text,
    Bool,
    Number,
    /// A size, in mebibytes.
    Unit,
    Timestamp,
    Other,
}

/// Display metadata for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Name used in filters and field selections.
    pub name: String,
    /// Column title for tabular output.
    pub title: String,
    pub kind: FieldType,
    pub doc: String,
}

impl FieldDefinition {
    pub fn new(name: &str, title: &str, kind: FieldType, doc: &str) -> Self {
        FieldDefinition {
            name: name.to_string(),
            title: title.to_string(),
            kind,
            doc: doc.to_string(),
        }
    }
}

/// One catalog row.
pub struct FieldEntry<C, O, R> {
    pub definition: FieldDefinition,
    pub getter: FieldGetter<C, O, R>,
    pub mode: QffMode,
}

impl<C, O, R> Clone for FieldEntry<C, O, R> {
    fn clone(&self) -> Self {
        FieldEntry {
            definition: self.definition.clone(),
            getter: self.getter.clone(),
            mode: self.mode,
        }
    }
}

impl<C, O, R> fmt::Debug for FieldEntry<C, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("definition", &self.definition)
            .field("getter", &self.getter)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Mapping from field name to its definition, getter and mode.
pub struct FieldCatalog<C, O, R> {
    fields: BTreeMap<String, FieldEntry<C, O, R>>,
}

impl<C, O, R> FieldCatalog<C, O, R> {
    pub fn new() -> Self {
        FieldCatalog {
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field, replacing any existing field with the same name.
    pub fn insert(
        &mut self,
        definition: FieldDefinition,
        getter: FieldGetter<C, O, R>,
        mode: QffMode,
    ) {
        self.fields.insert(
            definition.name.clone(),
            FieldEntry {
                definition,
                getter,
                mode,
            },
        );
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_field(
        mut self,
        definition: FieldDefinition,
        getter: FieldGetter<C, O, R>,
        mode: QffMode,
    ) -> Self {
        self.insert(definition, getter, mode);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldEntry<C, O, R>> {
        self.fields.get(name)
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<C, O, R> Default for FieldCatalog<C, O, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, O, R> fmt::Debug for FieldCatalog<C, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
