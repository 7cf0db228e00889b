//! Read-side helpers over a graph
//!
//! Filters used by the selection operations and the formats edges can be
//! listed in.

mod find;
mod listing;
mod types;

pub use find::{EdgeFilter, NodeFilter};
pub(crate) use listing::list_edges;
pub use types::{EdgeFormat, EdgeListing, EdgePair, EdgeValues, Endpoint};
