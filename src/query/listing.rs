//! Rendering a graph's edges as pair strings or a two-column table

use super::types::{EdgeFormat, EdgeListing, EdgePair, EdgeValues, Endpoint};
use crate::graph::{Graph, NodeId};

fn endpoint(graph: &Graph, id: NodeId, values: EdgeValues) -> Endpoint {
    match values {
        EdgeValues::Ids => Endpoint::Id(id),
        EdgeValues::Labels => Endpoint::Label(graph.node(id).and_then(|n| n.label.clone())),
    }
}

pub(crate) fn list_edges(graph: &Graph, format: EdgeFormat, values: EdgeValues) -> EdgeListing {
    let rows = graph.edges().iter().map(|e| EdgePair {
        from: endpoint(graph, e.from, values),
        to: endpoint(graph, e.to, values),
    });
    match format {
        EdgeFormat::Table => EdgeListing::Table(rows.collect()),
        EdgeFormat::Pairs => {
            let connector = if graph.is_directed() { "->" } else { "--" };
            EdgeListing::Pairs(
                rows.map(|p| format!("{}{}{}", p.from, connector, p.to))
                    .collect(),
            )
        }
    }
}
