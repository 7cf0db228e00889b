//! Filters for selecting nodes and edges by their attributes

use crate::graph::{AttrValue, Edge, EdgeId, EdgeStore, Node, NodeId, NodeStore, Record};

/// Criteria for selecting nodes; every set criterion must hold
#[derive(Debug, Clone, Default)]
pub struct NodeFilter {
    /// Filter by `type`
    pub node_type: Option<String>,
    /// Filter by `label`
    pub label: Option<String>,
    /// Filter by attribute presence (reserved or extra)
    pub has_attr: Option<String>,
    /// Filter by attribute value
    pub attr_equals: Option<(String, AttrValue)>,
}

impl NodeFilter {
    /// Create a new empty filter (matches all nodes)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>) -> Self {
        self.has_attr = Some(key.into());
        self
    }

    pub fn with_attr_value(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attr_equals = Some((key.into(), value.into()));
        self
    }

    /// IDs of matching nodes, in insertion order
    pub fn execute(&self, nodes: &NodeStore) -> Vec<NodeId> {
        nodes
            .iter()
            .filter(|node| self.matches(node))
            .map(|node| node.id)
            .collect()
    }

    /// Check if a node matches all criteria
    pub fn matches(&self, node: &Node) -> bool {
        if let Some(ref expected) = self.node_type {
            if node.node_type.as_ref() != Some(expected) {
                return false;
            }
        }

        if let Some(ref expected) = self.label {
            if node.label.as_ref() != Some(expected) {
                return false;
            }
        }

        matches_attrs(node, &self.has_attr, &self.attr_equals)
    }
}

/// Criteria for selecting edges; every set criterion must hold
#[derive(Debug, Clone, Default)]
pub struct EdgeFilter {
    pub rel: Option<String>,
    pub from: Option<NodeId>,
    pub to: Option<NodeId>,
    pub has_attr: Option<String>,
    pub attr_equals: Option<(String, AttrValue)>,
}

impl EdgeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_from(mut self, from: NodeId) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NodeId) -> Self {
        self.to = Some(to);
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>) -> Self {
        self.has_attr = Some(key.into());
        self
    }

    pub fn with_attr_value(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attr_equals = Some((key.into(), value.into()));
        self
    }

    pub fn execute(&self, edges: &EdgeStore) -> Vec<EdgeId> {
        edges
            .iter()
            .filter(|edge| self.matches(edge))
            .map(|edge| edge.id)
            .collect()
    }

    pub fn matches(&self, edge: &Edge) -> bool {
        if let Some(ref expected) = self.rel {
            if edge.rel.as_ref() != Some(expected) {
                return false;
            }
        }
        if self.from.is_some_and(|from| edge.from != from) {
            return false;
        }
        if self.to.is_some_and(|to| edge.to != to) {
            return false;
        }

        matches_attrs(edge, &self.has_attr, &self.attr_equals)
    }
}

fn matches_attrs<R: Record>(
    row: &R,
    has_attr: &Option<String>,
    attr_equals: &Option<(String, AttrValue)>,
) -> bool {
    if let Some(key) = has_attr {
        if row.value(key).is_none() {
            return false;
        }
    }

    if let Some((key, expected)) = attr_equals {
        match row.value(key) {
            Some(ref value) if value == expected => {}
            _ => return false,
        }
    }

    true
}
