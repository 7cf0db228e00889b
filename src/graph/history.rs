//! Graph identity, options and the log of applied mutations

use super::edge::EdgeId;
use super::node::NodeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphId(Uuid);

impl GraphId {
    /// Create a new random GraphId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options fixed when a graph is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    /// Whether edges have an orientation (default `true`)
    pub directed: bool,
    /// Optional human-readable name
    pub name: Option<String>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            name: None,
        }
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn undirected() -> Self {
        Self::default().directed(false)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Identity of a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub id: GraphId,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GraphMetadata {
    pub(crate) fn new(name: Option<String>) -> Self {
        Self {
            id: GraphId::new(),
            name,
            created_at: Utc::now(),
        }
    }
}

/// Summary of a graph for display
#[derive(Debug, Clone, Serialize)]
pub struct GraphInfo {
    pub id: GraphId,
    pub name: Option<String>,
    pub directed: bool,
    pub node_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for GraphInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} nodes, {} edges)",
            self.name.as_deref().unwrap_or("<unnamed>"),
            if self.directed { "directed" } else { "undirected" },
            self.node_count,
            self.edge_count
        )
    }
}

/// One applied mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAction {
    /// 1-based position in the log
    pub step: usize,
    /// Name of the operation that produced this entry
    pub function: String,
    pub time: DateTime<Utc>,
    pub nodes_created: Vec<NodeId>,
    pub edges_created: Vec<EdgeId>,
    /// Node count after the operation
    pub node_count: usize,
    /// Edge count after the operation
    pub edge_count: usize,
}

/// Append-only record of mutations applied to a graph
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    actions: Vec<GraphAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        function: &str,
        nodes_created: Vec<NodeId>,
        edges_created: Vec<EdgeId>,
        node_count: usize,
        edge_count: usize,
    ) {
        self.actions.push(GraphAction {
            step: self.actions.len() + 1,
            function: function.to_string(),
            time: Utc::now(),
            nodes_created,
            edges_created,
            node_count,
            edge_count,
        });
    }

    pub fn last(&self) -> Option<&GraphAction> {
        self.actions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GraphAction> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
