//! Core graph data structures

mod address;
mod edge;
mod error;
mod history;
mod node;
mod object;
mod selection;
mod table;
mod value;

#[cfg(test)]
mod tests;

pub use address::{Addressing, NodeRef};
pub use edge::{Edge, EdgeId, EdgeSpec, EdgeStore};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use history::{ActionLog, GraphAction, GraphId, GraphInfo, GraphMetadata, GraphOptions};
pub use node::{Node, NodeId, NodeSpec, NodeStore};
pub use object::{create_graph, Graph};
pub use selection::Selection;
pub use table::{AttributeTable, Record, Target};
pub use value::{AttrInput, AttrValue, Attrs};
