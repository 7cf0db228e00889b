//! Tabular construction input and snapshot output

mod io;
mod rows;

pub use io::{read_edge_rows, read_node_rows, FrameError, FrameResult};
pub use rows::{EdgeFrame, EdgeRow, NodeFrame, NodeRow};
