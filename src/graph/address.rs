//! Addressing nodes by ID or by label

use super::error::{GraphError, GraphResult};
use super::node::NodeId;
use std::fmt;
use std::str::FromStr;

/// How textual endpoints are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Addressing {
    #[default]
    Id,
    Label,
}

impl FromStr for Addressing {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Addressing::Id),
            "label" => Ok(Addressing::Label),
            other => Err(GraphError::InvalidArgument(format!(
                "unknown addressing mode '{}' (expected 'id' or 'label')",
                other
            ))),
        }
    }
}

/// A reference to a node, resolved against the node store before use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    Id(NodeId),
    Label(String),
}

impl NodeRef {
    /// Interpret `text` under the given addressing mode
    pub fn parse(text: &str, addressing: Addressing) -> GraphResult<Self> {
        match addressing {
            Addressing::Id => text
                .parse::<u64>()
                .map(|raw| NodeRef::Id(NodeId::new(raw)))
                .map_err(|_| GraphError::InvalidArgument(format!("'{}' is not a node ID", text))),
            Addressing::Label => Ok(NodeRef::Label(text.to_string())),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Id(id) => write!(f, "{}", id),
            NodeRef::Label(label) => write!(f, "'{}'", label),
        }
    }
}

impl From<NodeId> for NodeRef {
    fn from(id: NodeId) -> Self {
        NodeRef::Id(id)
    }
}

impl From<u64> for NodeRef {
    fn from(raw: u64) -> Self {
        NodeRef::Id(NodeId::new(raw))
    }
}

impl From<&str> for NodeRef {
    fn from(label: &str) -> Self {
        NodeRef::Label(label.to_string())
    }
}

impl From<String> for NodeRef {
    fn from(label: String) -> Self {
        NodeRef::Label(label)
    }
}
