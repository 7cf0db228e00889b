//! Node records and the node store

use super::error::{GraphError, GraphResult};
use super::table::{reserved_name, AttributeTable, Record, Target};
use super::value::{AttrInput, AttrValue, Attrs};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier of a node within one graph
///
/// Assigned by the graph starting at 1 and never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Largest node ID a graph accepts or hands out; IDs read back as
    /// signed integer cells
    pub const MAX: NodeId = NodeId(i64::MAX as u64);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A node row
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Reserved `type` column
    pub node_type: Option<String>,
    /// Reserved `label` column; may be used to address the node
    pub label: Option<String>,
    /// Extra columns
    pub attrs: Attrs,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            node_type: None,
            label: None,
            attrs: Attrs::new(),
        }
    }
}

impl Record for Node {
    type Key = NodeId;
    const RESERVED: &'static [&'static str] = &["id", "type", "label"];
    const READ_ONLY: &'static [&'static str] = &["id"];

    fn key(&self) -> NodeId {
        self.id
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    fn reserved(&self, name: &str) -> Option<AttrValue> {
        match name {
            "id" => i64::try_from(self.id.get()).ok().map(AttrValue::Int),
            "type" => self.node_type.clone().map(AttrValue::String),
            "label" => self.label.clone().map(AttrValue::String),
            _ => None,
        }
    }

    fn set_reserved(&mut self, name: &str, value: &AttrValue) {
        match name {
            "type" => self.node_type = Some(value.to_string()),
            "label" => self.label = Some(value.to_string()),
            _ => {}
        }
    }

    fn not_found(key: NodeId) -> GraphError {
        GraphError::NodeNotFound(key)
    }
}

/// Attributes for a node about to be created
///
/// `from` and `to` are only read by `Graph::add_node`: every node in `from`
/// gets an edge into the new node, and the new node gets an edge to every
/// node in `to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSpec {
    pub node_type: Option<String>,
    pub label: Option<String>,
    pub attrs: Attrs,
    pub from: Vec<NodeId>,
    pub to: Vec<NodeId>,
}

impl NodeSpec {
    pub fn new() -> Self {
        Self::default()
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

    pub fn from_nodes(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.from.extend(ids);
        self
    }

    pub fn to_nodes(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.to.extend(ids);
        self
    }

    /// Extra attributes must not shadow `id`, `type` or `label`
    pub(crate) fn check(&self) -> GraphResult<()> {
        match reserved_name::<Node>(&self.attrs) {
            Some(name) => Err(GraphError::InvalidArgument(format!(
                "'{}' is a reserved node column and cannot be an extra attribute",
                name
            ))),
            None => Ok(()),
        }
    }

    fn build(&self, id: NodeId) -> Node {
        Node {
            id,
            node_type: self.node_type.clone(),
            label: self.label.clone(),
            attrs: self.attrs.clone(),
        }
    }
}

/// Node table plus the node ID counter
#[derive(Debug, Clone)]
pub struct NodeStore {
    table: AttributeTable<Node>,
    next_id: u64,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStore {
    pub fn new() -> Self {
        Self {
            table: AttributeTable::new(),
            next_id: 1,
        }
    }

    /// The ID the next `add_node` will return
    pub fn next_id(&self) -> NodeId {
        NodeId(self.next_id)
    }

    /// Fail unless `n` more node IDs can be handed out
    pub(crate) fn reserve(&self, n: usize) -> GraphResult<()> {
        let remaining = NodeId::MAX.get() + 1 - self.next_id;
        if u64::try_from(n).map_or(true, |n| n > remaining) {
            return Err(GraphError::InvalidGraph("node ID space exhausted".to_string()));
        }
        Ok(())
    }

    pub fn add_node(&mut self, spec: &NodeSpec) -> GraphResult<NodeId> {
        spec.check()?;
        self.reserve(1)?;
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.table.insert(spec.build(id));
        Ok(id)
    }

    /// Insert a row carrying its own ID; the counter moves past it
    pub(crate) fn insert_row(&mut self, node: Node) -> GraphResult<()> {
        let id = node.id;
        if id.get() == 0 || id > NodeId::MAX {
            return Err(GraphError::InvalidGraph(format!(
                "node ID {} is outside 1..={}",
                id,
                NodeId::MAX
            )));
        }
        if let Some(name) = reserved_name::<Node>(&node.attrs) {
            return Err(GraphError::InvalidGraph(format!(
                "node {} uses reserved column '{}' as an extra attribute",
                id, name
            )));
        }
        if !self.table.insert(node) {
            return Err(GraphError::InvalidGraph(format!("duplicate node ID {}", id)));
        }
        self.next_id = self.next_id.max(id.get() + 1);
        Ok(())
    }

    /// Remove one node; edges are the caller's concern
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<Node> {
        self.table.remove(id).ok_or(GraphError::NodeNotFound(id))
    }

    pub(crate) fn delete_where<F>(&mut self, pred: F) -> Vec<Node>
    where
        F: FnMut(&Node) -> bool,
    {
        self.table.remove_where(pred)
    }

    pub fn get_node_ids(&self) -> Vec<NodeId> {
        self.table.keys()
    }

    pub fn node_count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.table.contains(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.table.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.table.iter()
    }

    pub fn columns(&self) -> &[String] {
        self.table.columns()
    }

    pub fn check(&self, id: NodeId) -> GraphResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(id))
        }
    }

    /// First node, in insertion order, carrying `label`
    pub fn find_by_label(&self, label: &str) -> GraphResult<NodeId> {
        let mut matches = self
            .table
            .iter()
            .filter(|n| n.label.as_deref() == Some(label))
            .map(|n| n.id);
        let first = matches
            .next()
            .ok_or_else(|| GraphError::LabelNotFound(label.to_string()))?;
        if matches.next().is_some() {
            warn!(label, node = %first, "label is not unique; using the first node carrying it");
        }
        Ok(first)
    }

    pub fn get_attr(&self, id: NodeId, name: &str) -> GraphResult<Option<AttrValue>> {
        self.table.get_attr(id, name)
    }

    pub fn column_values(
        &self,
        name: &str,
        ids: Option<&[NodeId]>,
    ) -> GraphResult<Vec<(NodeId, Option<AttrValue>)>> {
        self.table.column_values(name, ids)
    }

    pub fn set_attr(
        &mut self,
        target: &Target<NodeId>,
        name: &str,
        input: &AttrInput,
    ) -> GraphResult<Vec<NodeId>> {
        self.table.set_attr(target, name, input)
    }

    pub fn rename_attr(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.table.rename_column(from, to)
    }

    pub fn drop_attr(&mut self, name: &str) -> GraphResult<()> {
        self.table.drop_column(name)
    }

    pub(crate) fn define_column(&mut self, name: &str) {
        self.table.define_column(name);
    }
}
