//! graphframe: table-backed graph construction
//!
//! A mutable in-memory graph whose nodes and edges live in tables with a
//! fixed identity column, a few reserved columns and any number of extra
//! attribute columns.
//!
//! # Core Concepts
//!
//! - **Nodes**: rows with an ID assigned by the graph, optional `type` and
//!   `label`, and extra attributes
//! - **Edges**: rows joining two existing nodes, with optional `rel` and
//!   extra attributes; deleting a node deletes its edges
//! - **Addressing**: edge endpoints can be given as node IDs or labels
//! - **Selections**: sets of node or edge IDs that later calls can be
//!   pointed at explicitly
//!
//! # Example
//!
//! ```
//! use graphframe::{EdgeFormat, EdgeValues, Graph, NodeSpec};
//!
//! let mut graph = Graph::new();
//! let ids = graph.add_n_nodes(3, NodeSpec::new()).unwrap();
//! graph.select_last_nodes_created();
//! let selected = graph.get_selection().node_ids();
//! graph.add_node(NodeSpec::new().to_nodes(selected)).unwrap();
//!
//! assert_eq!(ids.len(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! let listing = graph.get_edges(EdgeFormat::Pairs, EdgeValues::Ids);
//! assert_eq!(listing.pairs().unwrap()[0], "4->1");
//! ```

pub mod frame;
mod graph;
pub mod query;

pub use frame::{EdgeFrame, EdgeRow, NodeFrame, NodeRow};
pub use graph::{
    create_graph, ActionLog, Addressing, AttrInput, AttrValue, Attrs, AttributeTable, Edge,
    EdgeId, EdgeSpec, EdgeStore, ErrorKind, Graph, GraphAction, GraphError, GraphId, GraphInfo,
    GraphMetadata, GraphOptions, GraphResult, Node, NodeId, NodeRef, NodeSpec, NodeStore, Record,
    Selection, Target,
};
pub use query::{EdgeFilter, EdgeFormat, EdgeListing, EdgePair, EdgeValues, Endpoint, NodeFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
