//! Result types for edge listings

use crate::graph::{GraphError, NodeId};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Shape of an edge listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeFormat {
    /// `"1->2"` strings (`"1--2"` in undirected graphs)
    #[default]
    Pairs,
    /// Two-column `(from, to)` rows
    Table,
}

impl FromStr for EdgeFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pairs" => Ok(EdgeFormat::Pairs),
            "table" => Ok(EdgeFormat::Table),
            other => Err(GraphError::InvalidArgument(format!(
                "unknown edge format '{}' (expected 'pairs' or 'table')",
                other
            ))),
        }
    }
}

/// How endpoints are rendered in an edge listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeValues {
    #[default]
    Ids,
    Labels,
}

/// One rendered endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Endpoint {
    Id(NodeId),
    /// The node's label; `None` when the label is unset
    Label(Option<String>),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Id(id) => write!(f, "{}", id),
            Endpoint::Label(Some(label)) => write!(f, "{}", label),
            Endpoint::Label(None) => write!(f, "NA"),
        }
    }
}

/// One row of a two-column edge table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgePair {
    pub from: Endpoint,
    pub to: Endpoint,
}

/// Edges of a graph in the requested format, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EdgeListing {
    Pairs(Vec<String>),
    Table(Vec<EdgePair>),
}

impl EdgeListing {
    pub fn len(&self) -> usize {
        match self {
            EdgeListing::Pairs(p) => p.len(),
            EdgeListing::Table(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pair strings, if this is a `Pairs` listing
    pub fn pairs(&self) -> Option<&[String]> {
        match self {
            EdgeListing::Pairs(p) => Some(p),
            EdgeListing::Table(_) => None,
        }
    }

    /// The table rows, if this is a `Table` listing
    pub fn table(&self) -> Option<&[EdgePair]> {
        match self {
            EdgeListing::Table(t) => Some(t),
            EdgeListing::Pairs(_) => None,
        }
    }
}
