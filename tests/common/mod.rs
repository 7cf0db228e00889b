//! Common test utilities for graphframe integration tests
//!
//! Fixture tables, a helper that writes them to disk, and a comparable
//! view of a graph's observable state.

#![allow(dead_code)]

use graphframe::{EdgeFrame, Graph, NodeFrame, Selection};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// A small social graph: three people and a city
pub fn people_nodes() -> Value {
    json!([
        {"id": 1, "type": "person", "label": "ann", "age": 41},
        {"id": 2, "type": "person", "label": "bo", "age": 29},
        {"id": 3, "type": "person", "label": "cy", "nickname": null},
        {"id": 4, "type": "city", "label": "oslo"}
    ])
}

pub fn people_edges() -> Value {
    json!([
        {"from": 1, "to": 2, "rel": "knows"},
        {"from": 2, "to": 3, "rel": "knows", "since": 2020},
        {"from": 1, "to": 4, "rel": "lives_in"},
        {"from": 3, "to": 4, "rel": "lives_in"}
    ])
}

/// Write `value` as pretty JSON to `dir/name`
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(value).expect("serialize fixture");
    std::fs::write(&path, text).expect("write fixture");
    path
}

/// Write `value` as YAML to `dir/name`
pub fn write_yaml(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    let text = serde_yaml::to_string(value).expect("serialize fixture");
    std::fs::write(&path, text).expect("write fixture");
    path
}

/// Everything a caller can observe about a graph, in comparable form
#[derive(Debug, Clone, PartialEq)]
pub struct GraphState {
    pub nodes: NodeFrame,
    pub edges: EdgeFrame,
    pub directed: bool,
    pub selection: Selection,
    pub log_len: usize,
    pub next_node: u64,
    pub next_edge: u64,
}

impl GraphState {
    pub fn of(graph: &Graph) -> Self {
        Self {
            nodes: graph.get_node_df(),
            edges: graph.get_edge_df(),
            directed: graph.is_directed(),
            selection: graph.get_selection().clone(),
            log_len: graph.log().len(),
            next_node: graph.nodes().next_id().get(),
            next_edge: graph.edges().next_id().get(),
        }
    }
}
