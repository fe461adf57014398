// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers: a small node catalog over a fake cluster.

use serde_json::json;

use crate::field::{FieldCatalog, FieldDefinition, FieldGetter, FieldType};
use crate::value::{QffMode, ResultEntry};

/// Cluster-wide configuration snapshot.
pub struct Cluster {
    pub master: String,
    pub memory_reserve: i64,
}

/// A node as stored in the configuration.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub offline: bool,
    pub tags: Vec<String>,
    pub ctime: (i64, i64),
    pub cpu_count: i64,
}

/// Live data collected from a node.
#[derive(Debug, Clone)]
pub struct NodeRuntime {
    pub memory_free: i64,
    pub memory_total: i64,
}

pub type NodeCatalog = FieldCatalog<Cluster, Node, NodeRuntime>;
pub type NodeGetter = FieldGetter<Cluster, Node, NodeRuntime>;

pub fn cluster() -> Cluster {
    Cluster {
        master: "node1.cluster.local".to_string(),
        memory_reserve: 512,
    }
}

pub fn node(name: &str) -> Node {
    Node {
        name: name.to_string(),
        offline: false,
        tags: vec!["rack:a".to_string(), "ssd".to_string()],
        ctime: (1_700_000_000, 250_000),
        cpu_count: 8,
    }
}

pub fn runtime(memory_free: i64) -> NodeRuntime {
    NodeRuntime {
        memory_free,
        memory_total: 16384,
    }
}

fn def(name: &str, kind: FieldType) -> FieldDefinition {
    FieldDefinition::new(name, &name.to_uppercase(), kind, "")
}

/// The catalog used by most evaluator tests.
pub fn node_catalog() -> NodeCatalog {
    FieldCatalog::new()
        .with_field(
            def("name", FieldType::Text),
            FieldGetter::simple(|n: &Node| ResultEntry::normal(n.name.clone())),
            QffMode::Hostname,
        )
        .with_field(
            def("offline", FieldType::Bool),
            FieldGetter::simple(|n: &Node| ResultEntry::normal(n.offline)),
            QffMode::Normal,
        )
        .with_field(
            def("master", FieldType::Bool),
            FieldGetter::config(|c: &Cluster, n: &Node| ResultEntry::normal(c.master == n.name)),
            QffMode::Normal,
        )
        .with_field(
            def("tags", FieldType::Other),
            FieldGetter::simple(|n: &Node| ResultEntry::normal(json!(n.tags))),
            QffMode::Normal,
        )
        .with_field(
            def("ctime", FieldType::Timestamp),
            FieldGetter::simple(|n: &Node| ResultEntry::normal(json!([n.ctime.0, n.ctime.1]))),
            QffMode::Timestamp,
        )
        .with_field(
            def("cpu_count", FieldType::Number),
            FieldGetter::simple(|n: &Node| ResultEntry::normal(n.cpu_count)),
            QffMode::Normal,
        )
        .with_field(
            def("mfree", FieldType::Unit),
            FieldGetter::runtime(|r: &NodeRuntime, _: &Node| ResultEntry::normal(r.memory_free)),
            QffMode::Normal,
        )
        .with_field(
            def("mtotal", FieldType::Unit),
            FieldGetter::runtime(|r: &NodeRuntime, _: &Node| ResultEntry::normal(r.memory_total)),
            QffMode::Normal,
        )
        .with_field(
            def("mavail", FieldType::Unit),
            FieldGetter::config_runtime(|c: &Cluster, r: &NodeRuntime, _: &Node| {
                ResultEntry::normal(r.memory_free - c.memory_reserve)
            }),
            QffMode::Normal,
        )
        .with_field(def("serial_no", FieldType::Unknown), FieldGetter::Unknown, QffMode::Normal)
}

/// `node_catalog()` plus one extra field.
pub fn catalog_with(name: &str, getter: NodeGetter, mode: QffMode) -> NodeCatalog {
    node_catalog().with_field(def(name, FieldType::Other), getter, mode)
}
