//! Selections of nodes or edges carried by a graph

use super::edge::EdgeId;
use super::node::NodeId;
use std::collections::BTreeSet;

/// The graph's active selection
///
/// Holds either node IDs or edge IDs, never both: every `select_*`
/// operation replaces the whole selection. An empty selection means
/// nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    nodes: BTreeSet<NodeId>,
    edges: BTreeSet<EdgeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_nodes(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            nodes: ids.into_iter().collect(),
            edges: BTreeSet::new(),
        }
    }

    pub fn of_edges(ids: impl IntoIterator<Item = EdgeId>) -> Self {
        Self {
            nodes: BTreeSet::new(),
            edges: ids.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn has_nodes(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<EdgeId> {
        &self.edges
    }

    /// Selected node IDs in ascending order
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().copied().collect()
    }

    /// Selected edge IDs in ascending order
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().copied().collect()
    }

    /// Drop IDs whose rows no longer exist
    pub(crate) fn retain(
        &mut self,
        node_alive: impl Fn(NodeId) -> bool,
        edge_alive: impl Fn(EdgeId) -> bool,
    ) {
        self.nodes.retain(|&id| node_alive(id));
        self.edges.retain(|&id| edge_alive(id));
    }
}
