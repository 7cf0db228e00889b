//! Edge records and the edge store

use super::error::{GraphError, GraphResult};
use super::node::NodeId;
use super::table::{reserved_name, AttributeTable, Record, Target};
use super::value::{AttrInput, AttrValue, Attrs};
use serde::{Deserialize, Serialize};

/// Identifier of an edge within one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Largest edge ID a graph accepts or hands out
    pub const MAX: EdgeId = EdgeId(i64::MAX as u64);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// An edge row
///
/// `from` and `to` always name nodes present in the owning graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    /// Reserved `rel` column (relationship)
    pub rel: Option<String>,
    pub attrs: Attrs,
}

impl Edge {
    pub fn new(id: EdgeId, from: NodeId, to: NodeId) -> Self {
        Self {
            id,
            from,
            to,
            rel: None,
            attrs: Attrs::new(),
        }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// Whether this edge joins `a` and `b`, in either orientation
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl Record for Edge {
    type Key = EdgeId;
    const RESERVED: &'static [&'static str] = &["id", "from", "to", "rel"];
    const READ_ONLY: &'static [&'static str] = &["id", "from", "to"];

    fn key(&self) -> EdgeId {
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
            "from" => i64::try_from(self.from.get()).ok().map(AttrValue::Int),
            "to" => i64::try_from(self.to.get()).ok().map(AttrValue::Int),
            "rel" => self.rel.clone().map(AttrValue::String),
            _ => None,
        }
    }

    fn set_reserved(&mut self, name: &str, value: &AttrValue) {
        if name == "rel" {
            self.rel = Some(value.to_string());
        }
    }

    fn not_found(key: EdgeId) -> GraphError {
        GraphError::edge_id_not_found(key)
    }
}

/// Attributes for an edge about to be created
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeSpec {
    pub rel: Option<String>,
    pub attrs: Attrs,
}

impl EdgeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Extra attributes must not shadow `id`, `from`, `to` or `rel`
    pub(crate) fn check(&self) -> GraphResult<()> {
        match reserved_name::<Edge>(&self.attrs) {
            Some(name) => Err(GraphError::InvalidArgument(format!(
                "'{}' is a reserved edge column and cannot be an extra attribute",
                name
            ))),
            None => Ok(()),
        }
    }
}

/// Edge table plus the edge ID counter
#[derive(Debug, Clone)]
pub struct EdgeStore {
    table: AttributeTable<Edge>,
    next_id: u64,
}

impl Default for EdgeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeStore {
    pub fn new() -> Self {
        Self {
            table: AttributeTable::new(),
            next_id: 1,
        }
    }

    pub fn next_id(&self) -> EdgeId {
        EdgeId(self.next_id)
    }

    /// Fail unless `n` more edge IDs can be handed out
    pub(crate) fn reserve(&self, n: usize) -> GraphResult<()> {
        let remaining = EdgeId::MAX.get() + 1 - self.next_id;
        if u64::try_from(n).map_or(true, |n| n > remaining) {
            return Err(GraphError::InvalidGraph("edge ID space exhausted".to_string()));
        }
        Ok(())
    }

    /// Append an edge between two already validated nodes
    pub(crate) fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        spec: &EdgeSpec,
    ) -> GraphResult<EdgeId> {
        spec.check()?;
        self.reserve(1)?;
        let id = EdgeId(self.next_id);
        self.next_id += 1;
        self.table.insert(Edge {
            id,
            from,
            to,
            rel: spec.rel.clone(),
            attrs: spec.attrs.clone(),
        });
        Ok(id)
    }

    /// Insert a row carrying its own ID; the counter moves past it
    pub(crate) fn insert_row(&mut self, edge: Edge) -> GraphResult<()> {
        let id = edge.id;
        if id.get() == 0 || id > EdgeId::MAX {
            return Err(GraphError::InvalidGraph(format!(
                "edge ID {} is outside 1..={}",
                id,
                EdgeId::MAX
            )));
        }
        if let Some(name) = reserved_name::<Edge>(&edge.attrs) {
            return Err(GraphError::InvalidGraph(format!(
                "edge {} uses reserved column '{}' as an extra attribute",
                id, name
            )));
        }
        if !self.table.insert(edge) {
            return Err(GraphError::InvalidGraph(format!("duplicate edge ID {}", id)));
        }
        self.next_id = self.next_id.max(id.get() + 1);
        Ok(())
    }

    /// Earliest inserted edge joining the unordered pair `{a, b}`
    pub fn find_pair(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.table.iter().find(|e| e.connects(a, b)).map(|e| e.id)
    }

    pub fn delete_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        self.table
            .remove(id)
            .ok_or_else(|| GraphError::edge_id_not_found(id))
    }

    /// Remove every edge with `node` as an endpoint
    pub(crate) fn delete_touching(&mut self, node: NodeId) -> Vec<Edge> {
        self.table.remove_where(|e| e.touches(node))
    }

    pub(crate) fn delete_where<F>(&mut self, pred: F) -> Vec<Edge>
    where
        F: FnMut(&Edge) -> bool,
    {
        self.table.remove_where(pred)
    }

    pub fn get_edge_ids(&self) -> Vec<EdgeId> {
        self.table.keys()
    }

    pub fn edge_count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        self.table.contains(id)
    }

    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.table.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.table.iter()
    }

    pub fn columns(&self) -> &[String] {
        self.table.columns()
    }

    pub fn get_attr(&self, id: EdgeId, name: &str) -> GraphResult<Option<AttrValue>> {
        self.table.get_attr(id, name)
    }

    pub fn column_values(
        &self,
        name: &str,
        ids: Option<&[EdgeId]>,
    ) -> GraphResult<Vec<(EdgeId, Option<AttrValue>)>> {
        self.table.column_values(name, ids)
    }

    pub fn set_attr(
        &mut self,
        target: &Target<EdgeId>,
        name: &str,
        input: &AttrInput,
    ) -> GraphResult<Vec<EdgeId>> {
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
