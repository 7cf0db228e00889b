//! Graph: node and edge stores plus directedness, selection and history
//!
//! Every mutating operation validates its whole input before touching the
//! stores, so an `Err` leaves the graph exactly as it was. Successful
//! mutations append one entry to the action log; the `select_last_*`
//! operations read the IDs created by that last entry.

use super::address::{Addressing, NodeRef};
use super::edge::{Edge, EdgeId, EdgeSpec, EdgeStore};
use super::error::{GraphError, GraphResult};
use super::history::{ActionLog, GraphInfo, GraphMetadata, GraphOptions};
use super::node::{Node, NodeId, NodeSpec, NodeStore};
use super::selection::Selection;
use super::table::Target;
use super::value::{AttrInput, AttrValue};
use crate::frame::{EdgeFrame, EdgeRow, NodeFrame, NodeRow};
use crate::query::{self, EdgeFilter, EdgeFormat, EdgeListing, EdgeValues, NodeFilter};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A directed or undirected graph backed by node and edge tables
///
/// `Graph` owns all of its data; cloning it takes an independent snapshot
/// that later mutations of the original do not affect.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: NodeStore,
    edges: EdgeStore,
    directed: bool,
    selection: Selection,
    metadata: GraphMetadata,
    log: ActionLog,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a graph, optionally from node and edge tables
///
/// Fails with `InvalidGraph` when edges are given without nodes or any
/// edge references a node the node table does not contain.
pub fn create_graph(
    directed: bool,
    nodes: Option<NodeFrame>,
    edges: Option<EdgeFrame>,
) -> GraphResult<Graph> {
    Graph::from_frames(GraphOptions::new().directed(directed), nodes, edges)
}

impl Graph {
    /// Create an empty directed graph
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            nodes: NodeStore::new(),
            edges: EdgeStore::new(),
            directed: options.directed,
            selection: Selection::new(),
            metadata: GraphMetadata::new(options.name),
            log: ActionLog::new(),
        }
    }

    /// Create a graph from node and edge tables
    ///
    /// Node IDs are taken from the node table and the node counter continues
    /// after the largest. Edge rows without an ID are numbered after the
    /// largest explicit edge ID, in row order.
    pub fn from_frames(
        options: GraphOptions,
        nodes: Option<NodeFrame>,
        edges: Option<EdgeFrame>,
    ) -> GraphResult<Self> {
        if nodes.is_none() && edges.is_some() {
            return Err(GraphError::InvalidGraph(
                "an edge table requires a node table".to_string(),
            ));
        }

        let mut graph = Self::with_options(options);
        let mut nodes_created = Vec::new();
        let mut edges_created = Vec::new();

        if let Some(frame) = nodes {
            for name in &frame.columns {
                graph.nodes.define_column(name);
            }
            for row in frame.rows {
                nodes_created.push(row.id);
                graph.nodes.insert_row(Node {
                    id: row.id,
                    node_type: row.node_type,
                    label: row.label,
                    attrs: row.attrs,
                })?;
            }
        }

        if let Some(frame) = edges {
            for name in &frame.columns {
                graph.edges.define_column(name);
            }
            // saturates so an out-of-range ID is rejected by insert_row
            let mut next = frame
                .rows
                .iter()
                .filter_map(|r| r.id)
                .map(EdgeId::get)
                .max()
                .unwrap_or(0)
                .saturating_add(1);
            for row in frame.rows {
                for endpoint in [row.from, row.to] {
                    if !graph.nodes.contains(endpoint) {
                        return Err(GraphError::InvalidGraph(format!(
                            "edge {} -> {} references missing node {}",
                            row.from, row.to, endpoint
                        )));
                    }
                }
                let id = row.id.unwrap_or_else(|| {
                    let id = EdgeId::new(next);
                    next = next.saturating_add(1);
                    id
                });
                edges_created.push(id);
                graph.edges.insert_row(Edge {
                    id,
                    from: row.from,
                    to: row.to,
                    rel: row.rel,
                    attrs: row.attrs,
                })?;
            }
        }

        debug!(
            graph = %graph.metadata.id,
            directed = graph.directed,
            nodes = graph.nodes.node_count(),
            edges = graph.edges.edge_count(),
            "created graph"
        );
        graph.record("create_graph", nodes_created, edges_created);
        Ok(graph)
    }

    // --- inspection ---

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Graph has no nodes (and therefore no edges)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn metadata(&self) -> &GraphMetadata {
        &self.metadata
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            id: self.metadata.id,
            name: self.metadata.name.clone(),
            directed: self.directed,
            node_count: self.nodes.node_count(),
            edge_count: self.edges.edge_count(),
            created_at: self.metadata.created_at,
        }
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Node IDs in insertion order
    pub fn get_node_ids(&self) -> Vec<NodeId> {
        self.nodes.get_node_ids()
    }

    /// Edge IDs in insertion order
    pub fn get_edge_ids(&self) -> Vec<EdgeId> {
        self.edges.get_edge_ids()
    }

    /// Resolve a node reference to an existing node ID
    pub fn resolve(&self, node: &NodeRef) -> GraphResult<NodeId> {
        match node {
            NodeRef::Id(id) => {
                self.nodes.check(*id)?;
                Ok(*id)
            }
            NodeRef::Label(label) => {
                let id = self.nodes.find_by_label(label)?;
                trace!(label = %label, node = %id, "resolved label");
                Ok(id)
            }
        }
    }

    // --- nodes ---

    /// Add one node
    ///
    /// Each node listed in `spec.from` gets an edge into the new node and
    /// the new node gets an edge to each node listed in `spec.to`.
    pub fn add_node(&mut self, spec: NodeSpec) -> GraphResult<NodeId> {
        self.check_node_spec(&spec, 1)?;
        let (id, edges) = self.insert_node(&spec)?;
        debug!(node = %id, edges = edges.len(), "added node");
        self.record("add_node", vec![id], edges);
        Ok(id)
    }

    /// Add `n` nodes sharing the attributes (and `from`/`to` edges) of `spec`
    pub fn add_n_nodes(&mut self, n: usize, spec: NodeSpec) -> GraphResult<Vec<NodeId>> {
        if n == 0 {
            return Err(GraphError::InvalidArgument(
                "number of nodes to add must be positive".to_string(),
            ));
        }
        self.check_node_spec(&spec, n)?;
        let mut ids = Vec::with_capacity(n);
        let mut edges = Vec::new();
        for _ in 0..n {
            let (id, created) = self.insert_node(&spec)?;
            ids.push(id);
            edges.extend(created);
        }
        debug!(count = n, edges = edges.len(), "added nodes");
        self.record("add_n_nodes", ids.clone(), edges);
        Ok(ids)
    }

    /// Everything that could stop `n` nodes built from `spec` being added
    fn check_node_spec(&self, spec: &NodeSpec, n: usize) -> GraphResult<()> {
        spec.check()?;
        spec.from
            .iter()
            .chain(spec.to.iter())
            .try_for_each(|&id| self.nodes.check(id))?;
        self.nodes.reserve(n)?;
        self.edges
            .reserve(n.saturating_mul(spec.from.len() + spec.to.len()))
    }

    /// Only called after `check_node_spec`, so none of the inserts fail
    fn insert_node(&mut self, spec: &NodeSpec) -> GraphResult<(NodeId, Vec<EdgeId>)> {
        let id = self.nodes.add_node(spec)?;
        let plain = EdgeSpec::new();
        let mut edges = Vec::with_capacity(spec.from.len() + spec.to.len());
        for &from in &spec.from {
            edges.push(self.edges.add_edge(from, id, &plain)?);
        }
        for &to in &spec.to {
            edges.push(self.edges.add_edge(id, to, &plain)?);
        }
        Ok((id, edges))
    }

    /// Delete a node and every edge touching it
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<()> {
        self.nodes.delete_node(id)?;
        let cascaded = self.edges.delete_touching(id);
        debug!(node = %id, cascaded = cascaded.len(), "deleted node");
        self.prune_selection();
        self.record("delete_node", Vec::new(), Vec::new());
        Ok(())
    }

    /// Delete several nodes and every edge touching any of them
    pub fn delete_nodes(&mut self, ids: &[NodeId]) -> GraphResult<()> {
        ids.iter().try_for_each(|&id| self.nodes.check(id))?;
        let doomed: HashSet<NodeId> = ids.iter().copied().collect();
        let removed = self.nodes.delete_where(|n| doomed.contains(&n.id));
        let cascaded = self
            .edges
            .delete_where(|e| doomed.contains(&e.from) || doomed.contains(&e.to));
        debug!(nodes = removed.len(), cascaded = cascaded.len(), "deleted nodes");
        self.prune_selection();
        self.record("delete_nodes", Vec::new(), Vec::new());
        Ok(())
    }

    pub fn get_node_attr(&self, id: NodeId, name: &str) -> GraphResult<Option<AttrValue>> {
        self.nodes.get_attr(id, name)
    }

    /// Values of one node column, for `ids` or for every node
    pub fn get_node_attrs(
        &self,
        name: &str,
        ids: Option<&[NodeId]>,
    ) -> GraphResult<Vec<(NodeId, Option<AttrValue>)>> {
        self.nodes.column_values(name, ids)
    }

    pub fn set_node_attr(
        &mut self,
        target: Target<NodeId>,
        name: &str,
        values: impl Into<AttrInput>,
    ) -> GraphResult<()> {
        let written = self.nodes.set_attr(&target, name, &values.into())?;
        debug!(attr = name, rows = written.len(), "set node attribute");
        self.record("set_node_attr", Vec::new(), Vec::new());
        Ok(())
    }

    pub fn rename_node_attr(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.nodes.rename_attr(from, to)?;
        debug!(from, to, "renamed node attribute");
        self.record("rename_node_attr", Vec::new(), Vec::new());
        Ok(())
    }

    pub fn drop_node_attr(&mut self, name: &str) -> GraphResult<()> {
        self.nodes.drop_attr(name)?;
        debug!(attr = name, "dropped node attribute");
        self.record("drop_node_attr", Vec::new(), Vec::new());
        Ok(())
    }

    // --- edges ---

    /// Add an edge between two nodes addressed by ID or label
    ///
    /// Self-loops and parallel edges are allowed.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeRef>,
        to: impl Into<NodeRef>,
        spec: EdgeSpec,
    ) -> GraphResult<EdgeId> {
        let from = self.resolve(&from.into())?;
        let to = self.resolve(&to.into())?;
        let id = self.edges.add_edge(from, to, &spec)?;
        debug!(edge = %id, %from, %to, "added edge");
        self.record("add_edge", Vec::new(), vec![id]);
        Ok(id)
    }

    /// Add edges written as whitespace-separated pairs, e.g. `"1->2 2->3"`
    ///
    /// Directed graphs use `->`, undirected graphs `--`. Endpoints are read
    /// as IDs or labels according to `addressing`. All pairs are resolved
    /// before any edge is added.
    pub fn add_edges_from_string(
        &mut self,
        text: &str,
        addressing: Addressing,
        spec: EdgeSpec,
    ) -> GraphResult<Vec<EdgeId>> {
        let connector = if self.directed { "->" } else { "--" };
        let mut pairs = Vec::new();
        for token in text.split_whitespace() {
            let (from, to) = token.split_once(connector).ok_or_else(|| {
                GraphError::InvalidArgument(format!(
                    "'{}' is not a '{}' pair for this graph",
                    token, connector
                ))
            })?;
            let from = self.resolve(&NodeRef::parse(from, addressing)?)?;
            let to = self.resolve(&NodeRef::parse(to, addressing)?)?;
            pairs.push((from, to));
        }
        if pairs.is_empty() {
            return Err(GraphError::InvalidArgument(
                "no edges found in edge string".to_string(),
            ));
        }

        spec.check()?;
        self.edges.reserve(pairs.len())?;

        let ids = pairs
            .into_iter()
            .map(|(from, to)| self.edges.add_edge(from, to, &spec))
            .collect::<GraphResult<Vec<EdgeId>>>()?;
        debug!(edges = ids.len(), "added edges from string");
        self.record("add_edges_from_string", Vec::new(), ids.clone());
        Ok(ids)
    }

    /// Delete the earliest inserted edge between two nodes
    ///
    /// The pair is unordered: an edge `2->1` matches `delete_edge(1, 2)`,
    /// in directed graphs too. Use `delete_edge_by_id` to pick one edge
    /// exactly.
    pub fn delete_edge(
        &mut self,
        from: impl Into<NodeRef>,
        to: impl Into<NodeRef>,
    ) -> GraphResult<()> {
        let from = self.resolve(&from.into())?;
        let to = self.resolve(&to.into())?;
        let connector = if self.directed { "->" } else { "--" };
        let id = self
            .edges
            .find_pair(from, to)
            .ok_or_else(|| GraphError::EdgeNotFound(format!("{}{}{}", from, connector, to)))?;
        self.edges.delete_edge(id)?;
        debug!(edge = %id, %from, %to, "deleted edge");
        self.prune_selection();
        self.record("delete_edge", Vec::new(), Vec::new());
        Ok(())
    }

    pub fn delete_edge_by_id(&mut self, id: EdgeId) -> GraphResult<()> {
        self.edges.delete_edge(id)?;
        debug!(edge = %id, "deleted edge");
        self.prune_selection();
        self.record("delete_edge", Vec::new(), Vec::new());
        Ok(())
    }

    pub fn delete_edges_by_id(&mut self, ids: &[EdgeId]) -> GraphResult<()> {
        for &id in ids {
            if !self.edges.contains(id) {
                return Err(GraphError::edge_id_not_found(id));
            }
        }
        let doomed: HashSet<EdgeId> = ids.iter().copied().collect();
        let removed = self.edges.delete_where(|e| doomed.contains(&e.id));
        debug!(edges = removed.len(), "deleted edges");
        self.prune_selection();
        self.record("delete_edges", Vec::new(), Vec::new());
        Ok(())
    }

    /// List edges as pair strings or a two-column table, in insertion order
    pub fn get_edges(&self, format: EdgeFormat, values: EdgeValues) -> EdgeListing {
        query::list_edges(self, format, values)
    }

    pub fn get_edge_attr(&self, id: EdgeId, name: &str) -> GraphResult<Option<AttrValue>> {
        self.edges.get_attr(id, name)
    }

    pub fn get_edge_attrs(
        &self,
        name: &str,
        ids: Option<&[EdgeId]>,
    ) -> GraphResult<Vec<(EdgeId, Option<AttrValue>)>> {
        self.edges.column_values(name, ids)
    }

    pub fn set_edge_attr(
        &mut self,
        target: Target<EdgeId>,
        name: &str,
        values: impl Into<AttrInput>,
    ) -> GraphResult<()> {
        let written = self.edges.set_attr(&target, name, &values.into())?;
        debug!(attr = name, rows = written.len(), "set edge attribute");
        self.record("set_edge_attr", Vec::new(), Vec::new());
        Ok(())
    }

    pub fn rename_edge_attr(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.edges.rename_attr(from, to)?;
        debug!(from, to, "renamed edge attribute");
        self.record("rename_edge_attr", Vec::new(), Vec::new());
        Ok(())
    }

    pub fn drop_edge_attr(&mut self, name: &str) -> GraphResult<()> {
        self.edges.drop_attr(name)?;
        debug!(attr = name, "dropped edge attribute");
        self.record("drop_edge_attr", Vec::new(), Vec::new());
        Ok(())
    }

    /// Change directedness; affects pair rendering and `add_edges_from_string`
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
        debug!(directed, "set directedness");
        self.record("set_directed", Vec::new(), Vec::new());
    }

    // --- selection ---

    pub fn get_selection(&self) -> &Selection {
        &self.selection
    }

    /// Nodes created by the most recent mutation
    pub fn get_last_nodes_created(&self) -> Vec<NodeId> {
        self.log
            .last()
            .map(|a| a.nodes_created.clone())
            .unwrap_or_default()
    }

    /// Edges created by the most recent mutation
    pub fn get_last_edges_created(&self) -> Vec<EdgeId> {
        self.log
            .last()
            .map(|a| a.edges_created.clone())
            .unwrap_or_default()
    }

    /// Select the nodes created by the most recent mutation
    ///
    /// When that mutation created no nodes the selection becomes empty.
    pub fn select_last_nodes_created(&mut self) {
        self.selection = Selection::of_nodes(self.get_last_nodes_created());
    }

    /// Select the edges created by the most recent mutation
    pub fn select_last_edges_created(&mut self) {
        self.selection = Selection::of_edges(self.get_last_edges_created());
    }

    pub fn select_nodes(&mut self, filter: &NodeFilter) {
        self.selection = Selection::of_nodes(filter.execute(&self.nodes));
    }

    pub fn select_nodes_by_id(&mut self, ids: &[NodeId]) -> GraphResult<()> {
        ids.iter().try_for_each(|&id| self.nodes.check(id))?;
        self.selection = Selection::of_nodes(ids.iter().copied());
        Ok(())
    }

    pub fn select_edges(&mut self, filter: &EdgeFilter) {
        self.selection = Selection::of_edges(filter.execute(&self.edges));
    }

    pub fn select_edges_by_edge_id(&mut self, ids: &[EdgeId]) -> GraphResult<()> {
        for &id in ids {
            if !self.edges.contains(id) {
                return Err(GraphError::edge_id_not_found(id));
            }
        }
        self.selection = Selection::of_edges(ids.iter().copied());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::new();
    }

    /// Replace the selection with its complement in the same store
    ///
    /// An empty selection stays empty.
    pub fn invert_selection(&mut self) {
        let current = &self.selection;
        let inverted = if current.has_nodes() {
            Selection::of_nodes(
                self.nodes
                    .iter()
                    .map(|n| n.id)
                    .filter(|id| !current.nodes().contains(id))
                    .collect::<Vec<_>>(),
            )
        } else if current.has_edges() {
            Selection::of_edges(
                self.edges
                    .iter()
                    .map(|e| e.id)
                    .filter(|id| !current.edges().contains(id))
                    .collect::<Vec<_>>(),
            )
        } else {
            Selection::new()
        };
        self.selection = inverted;
    }

    // --- snapshots ---

    /// Node table snapshot: every node, insertion order, all columns
    pub fn get_node_df(&self) -> NodeFrame {
        NodeFrame {
            columns: self.nodes.columns().to_vec(),
            rows: self
                .nodes
                .iter()
                .map(|n| NodeRow {
                    id: n.id,
                    node_type: n.node_type.clone(),
                    label: n.label.clone(),
                    attrs: n.attrs.clone(),
                })
                .collect(),
        }
    }

    /// Edge table snapshot: every edge, insertion order, all columns
    pub fn get_edge_df(&self) -> EdgeFrame {
        EdgeFrame {
            columns: self.edges.columns().to_vec(),
            rows: self
                .edges
                .iter()
                .map(|e| EdgeRow {
                    id: Some(e.id),
                    from: e.from,
                    to: e.to,
                    rel: e.rel.clone(),
                    attrs: e.attrs.clone(),
                })
                .collect(),
        }
    }

    // --- bookkeeping ---

    fn prune_selection(&mut self) {
        let nodes = &self.nodes;
        let edges = &self.edges;
        self.selection
            .retain(|id| nodes.contains(id), |id| edges.contains(id));
    }

    fn record(&mut self, function: &str, nodes_created: Vec<NodeId>, edges_created: Vec<EdgeId>) {
        debug_assert!(
            self.edges.is_empty() || !self.nodes.is_empty(),
            "edges present without nodes"
        );
        self.log.record(
            function,
            nodes_created,
            edges_created,
            self.nodes.node_count(),
            self.edges.edge_count(),
        );
    }
}
