//! Node and edge tables exchanged with callers
//!
//! The same row types describe construction input (`create_graph`) and
//! snapshot output (`get_node_df` / `get_edge_df`), so a graph built from a
//! frame hands back the values it was given.

use crate::graph::{AttrValue, Attrs, EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node row: required `id`, optional `type` and `label`, any extra columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNodeRow")]
pub struct NodeRow {
    pub id: NodeId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub attrs: Attrs,
}

/// Wire shape of a node row; `null` cells read as unset
#[derive(Deserialize)]
struct RawNodeRow {
    id: NodeId,
    #[serde(rename = "type", default)]
    node_type: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(flatten)]
    attrs: BTreeMap<String, Option<AttrValue>>,
}

impl From<RawNodeRow> for NodeRow {
    fn from(raw: RawNodeRow) -> Self {
        Self {
            id: raw.id,
            node_type: raw.node_type,
            label: raw.label,
            attrs: drop_nulls(raw.attrs),
        }
    }
}

impl NodeRow {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            node_type: None,
            label: None,
            attrs: Attrs::new(),
        }
    }

    pub fn node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// One edge row: required `from` and `to`, optional `id`, `rel` and extras
///
/// Rows without an `id` are numbered by the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEdgeRow")]
pub struct EdgeRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EdgeId>,
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(flatten)]
    pub attrs: Attrs,
}

#[derive(Deserialize)]
struct RawEdgeRow {
    #[serde(default)]
    id: Option<EdgeId>,
    from: NodeId,
    to: NodeId,
    #[serde(default)]
    rel: Option<String>,
    #[serde(flatten)]
    attrs: BTreeMap<String, Option<AttrValue>>,
}

impl From<RawEdgeRow> for EdgeRow {
    fn from(raw: RawEdgeRow) -> Self {
        Self {
            id: raw.id,
            from: raw.from,
            to: raw.to,
            rel: raw.rel,
            attrs: drop_nulls(raw.attrs),
        }
    }
}

impl EdgeRow {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            id: None,
            from: from.into(),
            to: to.into(),
            rel: None,
            attrs: Attrs::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<EdgeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

fn drop_nulls(cells: BTreeMap<String, Option<AttrValue>>) -> Attrs {
    cells
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
}

/// Extra column names in first-seen order across `attrs`
fn collect_columns<'a>(attrs: impl Iterator<Item = &'a Attrs>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in attrs {
        for key in row.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// A node table
///
/// `columns` lists the extra columns, including ones no row has a value in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeFrame {
    #[serde(default)]
    pub columns: Vec<String>,
    pub rows: Vec<NodeRow>,
}

impl NodeFrame {
    /// Build a frame whose columns are the extras used by `rows`
    pub fn new(rows: Vec<NodeRow>) -> Self {
        let columns = collect_columns(rows.iter().map(|r| &r.attrs));
        Self { columns, rows }
    }

    /// Declare a column even if no row uses it
    pub fn with_column(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.columns.contains(&name) {
            self.columns.push(name);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeRow> {
        self.rows.iter().find(|r| r.id == id)
    }
}

/// An edge table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeFrame {
    #[serde(default)]
    pub columns: Vec<String>,
    pub rows: Vec<EdgeRow>,
}

impl EdgeFrame {
    pub fn new(rows: Vec<EdgeRow>) -> Self {
        let columns = collect_columns(rows.iter().map(|r| &r.attrs));
        Self { columns, rows }
    }

    pub fn with_column(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.columns.contains(&name) {
            self.columns.push(name);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
