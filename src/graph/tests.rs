//! Graph-level tests: construction, mutation, selection and snapshots

use serde_json::{json, Value};

/// Fixture: node table as it would arrive from a file
fn node_table_fixture() -> Value {
    json!([
        {"id": 1, "type": "person", "label": "ann", "age": 41},
        {"id": 2, "type": "person", "label": "bo", "age": 29},
        {"id": 3, "type": "city", "label": "oslo", "population": 709037},
        {"id": 4, "label": "misc"}
    ])
}

/// Fixture: edge table referencing the node table above
fn edge_table_fixture() -> Value {
    json!([
        {"from": 1, "to": 2, "rel": "knows", "since": 2019},
        {"from": 2, "to": 3, "rel": "lives_in"},
        {"from": 1, "to": 3, "rel": "lives_in", "weight": 0.5}
    ])
}

#[cfg(test)]
mod construction_tests {
    use super::*;
    use crate::frame::{EdgeFrame, EdgeRow, NodeFrame, NodeRow};
    use crate::graph::{create_graph, AttrValue, EdgeId, ErrorKind, NodeId, NodeSpec};

    fn frames() -> (NodeFrame, EdgeFrame) {
        let nodes: Vec<NodeRow> = serde_json::from_value(node_table_fixture()).unwrap();
        let edges: Vec<EdgeRow> = serde_json::from_value(edge_table_fixture()).unwrap();
        (NodeFrame::new(nodes), EdgeFrame::new(edges))
    }

    #[test]
    fn empty_graph_defaults_to_directed() {
        let graph = create_graph(true, None, None).unwrap();
        assert!(graph.is_directed());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn frames_build_matching_counts() {
        let (nodes, edges) = frames();
        let graph = create_graph(true, Some(nodes), Some(edges)).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.get_edge_ids(),
            vec![EdgeId::new(1), EdgeId::new(2), EdgeId::new(3)]
        );
    }

    #[test]
    fn node_counter_continues_after_table_ids() {
        let (nodes, _) = frames();
        let mut graph = create_graph(true, Some(nodes), None).unwrap();
        let id = graph.add_node(NodeSpec::new()).unwrap();
        assert_eq!(id, NodeId::new(5));
    }

    #[test]
    fn edges_without_nodes_are_invalid() {
        let (_, edges) = frames();
        let err = create_graph(true, None, Some(edges)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
    }

    #[test]
    fn edge_to_missing_node_is_invalid() {
        let (nodes, _) = frames();
        let edges = EdgeFrame::new(vec![EdgeRow::new(1u64, 99u64)]);
        let err = create_graph(true, Some(nodes), Some(edges)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
    }

    #[test]
    fn duplicate_node_ids_are_invalid() {
        let nodes = NodeFrame::new(vec![NodeRow::new(1u64), NodeRow::new(1u64)]);
        let err = create_graph(true, Some(nodes), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
    }

    #[test]
    fn out_of_range_ids_are_invalid_not_a_panic() {
        let nodes = NodeFrame::new(vec![NodeRow::new(u64::MAX)]);
        let err = create_graph(true, Some(nodes), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);

        let nodes = NodeFrame::new(vec![NodeRow::new(1u64)]);
        let edges = EdgeFrame::new(vec![EdgeRow::new(1u64, 1u64).with_id(u64::MAX)]);
        let err = create_graph(true, Some(nodes.clone()), Some(edges)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);

        // the largest explicit ID leaves no room for an unnumbered row
        let edges = EdgeFrame::new(vec![
            EdgeRow::new(1u64, 1u64).with_id(EdgeId::MAX),
            EdgeRow::new(1u64, 1u64),
        ]);
        let err = create_graph(true, Some(nodes), Some(edges)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
    }

    #[test]
    fn exhausted_id_space_fails_cleanly() {
        let nodes = NodeFrame::new(vec![NodeRow::new(NodeId::MAX)]);
        let edges = EdgeFrame::new(vec![
            EdgeRow::new(NodeId::MAX, NodeId::MAX).with_id(EdgeId::MAX)
        ]);
        let mut graph = create_graph(true, Some(nodes), Some(edges)).unwrap();
        assert_eq!(
            graph.get_node_attr(NodeId::MAX, "id").unwrap(),
            Some(AttrValue::Int(i64::MAX))
        );

        let err = graph.add_node(NodeSpec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
        let err = graph
            .add_edge(NodeId::MAX, NodeId::MAX, crate::graph::EdgeSpec::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
        assert_eq!((graph.node_count(), graph.edge_count()), (1, 1));
        assert_eq!(graph.log().len(), 1);
    }

    #[test]
    fn reserved_column_in_row_extras_is_invalid() {
        let nodes = NodeFrame::new(vec![NodeRow::new(1u64).attr("label", "a")]);
        let err = create_graph(true, Some(nodes), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);

        let nodes = NodeFrame::new(vec![NodeRow::new(1u64)]);
        let edges = EdgeFrame::new(vec![EdgeRow::new(1u64, 1u64).attr("to", 9i64)]);
        let err = create_graph(true, Some(nodes), Some(edges)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGraph);
    }

    #[test]
    fn explicit_edge_ids_are_kept() {
        let nodes = NodeFrame::new(vec![NodeRow::new(1u64), NodeRow::new(2u64)]);
        let edges = EdgeFrame::new(vec![
            EdgeRow::new(1u64, 2u64),
            EdgeRow::new(2u64, 1u64).with_id(7u64),
        ]);
        let mut graph = create_graph(true, Some(nodes), Some(edges)).unwrap();
        assert_eq!(graph.get_edge_ids(), vec![EdgeId::new(8), EdgeId::new(7)]);

        let next = graph
            .add_edge(1u64, 1u64, crate::graph::EdgeSpec::new())
            .unwrap();
        assert_eq!(next, EdgeId::new(9));
    }

    #[test]
    fn snapshots_reproduce_the_input_tables() {
        let (nodes, edges) = frames();
        let graph = create_graph(true, Some(nodes.clone()), Some(edges.clone())).unwrap();

        assert_eq!(graph.get_node_df(), nodes);

        let out = graph.get_edge_df();
        assert_eq!(out.columns, edges.columns);
        for (given, got) in edges.rows.iter().zip(out.rows.iter()) {
            assert_eq!((given.from, given.to), (got.from, got.to));
            assert_eq!(given.rel, got.rel);
            assert_eq!(given.attrs, got.attrs);
        }
    }

    #[test]
    fn declared_empty_column_is_known_but_unset() {
        let nodes = NodeFrame::new(vec![NodeRow::new(1u64)]).with_column("color");
        let graph = create_graph(true, Some(nodes), None).unwrap();
        assert_eq!(graph.get_node_attr(NodeId::new(1), "color").unwrap(), None);
        assert_eq!(
            graph.get_node_attr(NodeId::new(1), "shape").unwrap_err().kind(),
            ErrorKind::UnknownAttribute
        );
    }

    #[test]
    fn create_graph_is_logged_with_created_ids() {
        let (nodes, edges) = frames();
        let mut graph = create_graph(false, Some(nodes), Some(edges)).unwrap();
        assert_eq!(graph.log().len(), 1);
        graph.select_last_edges_created();
        assert_eq!(graph.get_selection().edge_ids().len(), 3);
        assert_eq!(
            graph.get_node_attr(NodeId::new(3), "population").unwrap(),
            Some(AttrValue::Int(709037))
        );
    }
}

#[cfg(test)]
mod mutation_tests {
    use crate::graph::{
        Addressing, AttrInput, AttrValue, EdgeId, EdgeSpec, ErrorKind, Graph, GraphOptions,
        NodeId, NodeSpec, Target,
    };
    use crate::query::{EdgeFormat, EdgeValues};

    fn n(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    fn pairs(graph: &Graph) -> Vec<String> {
        graph
            .get_edges(EdgeFormat::Pairs, EdgeValues::Ids)
            .pairs()
            .unwrap()
            .to_vec()
    }

    #[test]
    fn two_nodes_one_edge() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new()).unwrap();
        graph.add_node(NodeSpec::new()).unwrap();
        graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(pairs(&graph), vec!["1->2"]);
    }

    #[test]
    fn add_node_from_and_to_create_edges_both_ways() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let id = graph
            .add_node(NodeSpec::new().from_nodes([n(1)]).to_nodes([n(2)]))
            .unwrap();
        assert_eq!(id, n(3));
        assert_eq!(pairs(&graph), vec!["1->3", "3->2"]);
    }

    #[test]
    fn add_node_with_unknown_endpoint_creates_nothing() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new()).unwrap();
        let err = graph
            .add_node(NodeSpec::new().to_nodes([n(1), n(8)]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes().next_id(), n(2));
    }

    #[test]
    fn add_n_nodes_rejects_zero() {
        let mut graph = Graph::new();
        let err = graph.add_n_nodes(0, NodeSpec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(graph.log().is_empty());
    }

    #[test]
    fn add_n_nodes_with_targets_connects_each_new_node() {
        let mut graph = Graph::new();
        let hub = graph.add_node(NodeSpec::new()).unwrap();
        let ids = graph
            .add_n_nodes(3, NodeSpec::new().from_nodes([hub]))
            .unwrap();
        assert_eq!(ids, vec![n(2), n(3), n(4)]);
        assert_eq!(pairs(&graph), vec!["1->2", "1->3", "1->4"]);
        assert_eq!(graph.get_last_edges_created().len(), 3);
    }

    #[test]
    fn delete_node_restores_count_and_never_reuses_id() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let before = graph.node_count();

        let id = graph.add_node(NodeSpec::new()).unwrap();
        graph.delete_node(id).unwrap();
        assert_eq!(graph.node_count(), before);

        let next = graph.add_node(NodeSpec::new()).unwrap();
        assert!(next > id);
    }

    #[test]
    fn delete_node_cascades_to_incident_edges_only() {
        let mut graph = Graph::new();
        graph.add_n_nodes(3, NodeSpec::new()).unwrap();
        graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        let keep = graph
            .add_edge(2u64, 3u64, EdgeSpec::new().rel("stays").attr("w", 1.5))
            .unwrap();
        graph.add_edge(3u64, 1u64, EdgeSpec::new()).unwrap();
        let kept_before = graph.edge(keep).cloned().unwrap();

        graph.delete_node(n(1)).unwrap();

        assert_eq!(graph.get_edge_ids(), vec![keep]);
        assert_eq!(graph.edge(keep), Some(&kept_before));
    }

    #[test]
    fn delete_missing_node_is_not_found() {
        let mut graph = Graph::new();
        assert_eq!(graph.delete_node(n(1)).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn delete_nodes_is_atomic() {
        let mut graph = Graph::new();
        graph.add_n_nodes(3, NodeSpec::new()).unwrap();
        let err = graph.delete_nodes(&[n(1), n(9)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(graph.node_count(), 3);

        graph.delete_nodes(&[n(1), n(3)]).unwrap();
        assert_eq!(graph.get_node_ids(), vec![n(2)]);
    }

    #[test]
    fn add_edge_by_label() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new().label("a")).unwrap();
        graph.add_node(NodeSpec::new().label("b")).unwrap();
        let id = graph.add_edge("b", "a", EdgeSpec::new().rel("points")).unwrap();

        let edge = graph.edge(id).unwrap();
        assert_eq!((edge.from, edge.to), (n(2), n(1)));
        let listing = graph.get_edges(EdgeFormat::Pairs, EdgeValues::Labels);
        assert_eq!(listing.pairs().unwrap(), ["b->a".to_string()]);
    }

    #[test]
    fn add_edge_with_unknown_endpoint_changes_nothing() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new().label("a")).unwrap();

        let by_id = graph.add_edge(1u64, 5u64, EdgeSpec::new()).unwrap_err();
        let by_label = graph.add_edge("a", "nope", EdgeSpec::new()).unwrap_err();
        assert_eq!(by_id.kind(), ErrorKind::NotFound);
        assert_eq!(by_label.kind(), ErrorKind::NotFound);
        assert_eq!((graph.node_count(), graph.edge_count()), (1, 0));
        assert_eq!(graph.edges().next_id(), EdgeId::new(1));
    }

    #[test]
    fn self_loops_and_parallel_edges_are_allowed() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        graph.add_edge(1u64, 1u64, EdgeSpec::new()).unwrap();
        graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        assert_eq!(pairs(&graph), vec!["1->1", "1->2", "1->2"]);
    }

    #[test]
    fn delete_edge_removes_earliest_parallel_edge() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let first = graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        let second = graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();

        graph.delete_edge(1u64, 2u64).unwrap();
        assert_eq!(graph.get_edge_ids(), vec![second]);
        assert!(graph.edge(first).is_none());
    }

    #[test]
    fn delete_edge_matches_reversed_pair_in_directed_graph() {
        let mut graph = Graph::new();
        graph.add_n_nodes(3, NodeSpec::new()).unwrap();
        let forward = graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        let other = graph.add_edge(2u64, 3u64, EdgeSpec::new()).unwrap();

        graph.delete_edge(2u64, 1u64).unwrap();
        assert!(graph.edge(forward).is_none());
        assert_eq!(graph.get_edge_ids(), vec![other]);
        assert_eq!(
            graph.delete_edge(1u64, 3u64).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn delete_edge_takes_earliest_of_either_orientation() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let back = graph.add_edge(2u64, 1u64, EdgeSpec::new()).unwrap();
        let forward = graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();

        graph.delete_edge(1u64, 2u64).unwrap();
        assert_eq!(graph.get_edge_ids(), vec![forward]);
        assert!(graph.edge(back).is_none());

        let mut undirected = Graph::with_options(GraphOptions::undirected());
        undirected.add_n_nodes(2, NodeSpec::new()).unwrap();
        undirected.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        undirected.delete_edge(2u64, 1u64).unwrap();
        assert_eq!(undirected.edge_count(), 0);
    }

    #[test]
    fn reserved_names_rejected_as_extra_attributes() {
        let mut graph = Graph::new();
        let err = graph
            .add_node(NodeSpec::new().attr("label", "a"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(graph.is_empty());
        assert!(graph.log().is_empty());

        let err = graph
            .add_n_nodes(2, NodeSpec::new().attr("id", 5i64))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let err = graph
            .add_edge(1u64, 1u64, EdgeSpec::new().attr("to", 99i64))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = graph
            .add_edges_from_string("1->2", Addressing::Id, EdgeSpec::new().attr("from", 2i64))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().next_id(), EdgeId::new(1));
    }

    #[test]
    fn delete_edge_by_label() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new().label("x")).unwrap();
        graph.add_node(NodeSpec::new().label("y")).unwrap();
        graph.add_edge("x", "y", EdgeSpec::new()).unwrap();
        graph.delete_edge("x", "y").unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn delete_edges_by_id_is_atomic() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let a = graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        let err = graph.delete_edges_by_id(&[a, EdgeId::new(40)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(graph.edge_count(), 1);
        graph.delete_edge_by_id(a).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edges_from_string_respect_connector() {
        let mut graph = Graph::new();
        graph.add_n_nodes(3, NodeSpec::new()).unwrap();
        let ids = graph
            .add_edges_from_string("1->2 2->3", Addressing::Id, EdgeSpec::new().rel("r"))
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(pairs(&graph), vec!["1->2", "2->3"]);

        let err = graph
            .add_edges_from_string("3--1", Addressing::Id, EdgeSpec::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = graph
            .add_edges_from_string("3->1 3->9", Addressing::Id, EdgeSpec::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edges_from_string_by_label_in_undirected_graph() {
        let mut graph = Graph::with_options(GraphOptions::undirected());
        graph.add_node(NodeSpec::new().label("a")).unwrap();
        graph.add_node(NodeSpec::new().label("b")).unwrap();
        graph
            .add_edges_from_string("a--b", Addressing::Label, EdgeSpec::new())
            .unwrap();
        assert_eq!(pairs(&graph), vec!["1--2"]);
    }

    #[test]
    fn set_label_on_all_nodes_checks_length() {
        let mut graph = Graph::new();
        graph.add_n_nodes(6, NodeSpec::new()).unwrap();

        let labels = vec!["a", "b", "c", "d", "e", "f"];
        graph
            .set_node_attr(Target::All, "label", labels.clone())
            .unwrap();
        assert_eq!(
            graph.get_node_attr(n(6), "label").unwrap(),
            Some(AttrValue::from("f"))
        );

        let err = graph
            .set_node_attr(Target::All, "label", labels[..5].to_vec())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
        assert_eq!(
            graph.get_node_attr(n(1), "label").unwrap(),
            Some(AttrValue::from("a"))
        );
    }

    #[test]
    fn scalar_broadcasts_to_every_target() {
        let mut graph = Graph::new();
        graph.add_n_nodes(3, NodeSpec::new()).unwrap();
        graph
            .set_node_attr(Target::Ids(vec![n(1), n(3)]), "color", "red")
            .unwrap();
        let colors = graph.get_node_attrs("color", None).unwrap();
        assert_eq!(
            colors,
            vec![
                (n(1), Some(AttrValue::from("red"))),
                (n(2), None),
                (n(3), Some(AttrValue::from("red"))),
            ]
        );
    }

    #[test]
    fn unknown_attribute_vs_unknown_node() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new()).unwrap();
        assert_eq!(
            graph.get_node_attr(n(1), "size").unwrap_err().kind(),
            ErrorKind::UnknownAttribute
        );
        assert_eq!(
            graph.get_node_attr(n(2), "label").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn edge_attributes_mirror_node_attributes() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let e = graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();

        graph
            .set_edge_attr(Target::One(e), "weight", AttrInput::from(0.25))
            .unwrap();
        graph.set_edge_attr(Target::All, "rel", "linked").unwrap();
        assert_eq!(
            graph.get_edge_attr(e, "weight").unwrap(),
            Some(AttrValue::Float(0.25))
        );
        assert_eq!(
            graph.get_edge_attr(e, "rel").unwrap(),
            Some(AttrValue::from("linked"))
        );
        assert_eq!(
            graph.set_edge_attr(Target::All, "from", 2i64).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn rename_and_drop_node_columns() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new().attr("w", 1i64)).unwrap();
        graph.rename_node_attr("w", "weight").unwrap();
        assert_eq!(
            graph.get_node_attr(n(1), "weight").unwrap(),
            Some(AttrValue::Int(1))
        );
        assert_eq!(
            graph.rename_node_attr("label", "name").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        graph.drop_node_attr("weight").unwrap();
        assert_eq!(
            graph.get_node_attr(n(1), "weight").unwrap_err().kind(),
            ErrorKind::UnknownAttribute
        );
    }

    #[test]
    fn rename_and_drop_edge_columns() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let e = graph
            .add_edge(1u64, 2u64, EdgeSpec::new().attr("cost", 3i64))
            .unwrap();
        graph.rename_edge_attr("cost", "price").unwrap();
        assert_eq!(graph.get_edge_attr(e, "price").unwrap(), Some(AttrValue::Int(3)));
        graph.drop_edge_attr("price").unwrap();
        assert_eq!(graph.edges().columns().len(), 0);
    }

    #[test]
    fn set_directed_changes_rendering() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        graph.set_directed(false);
        assert_eq!(pairs(&graph), vec!["1--2"]);
        assert!(!graph.info().directed);
    }

    #[test]
    fn clones_are_independent_snapshots() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new()).unwrap();
        let snapshot = graph.clone();
        graph.add_node(NodeSpec::new()).unwrap();
        assert_eq!(snapshot.node_count(), 1);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn failed_mutations_are_not_logged() {
        let mut graph = Graph::new();
        graph.add_node(NodeSpec::new()).unwrap();
        let _ = graph.add_edge(1u64, 3u64, EdgeSpec::new());
        let _ = graph.set_node_attr(Target::All, "x", vec![1i64, 2]);
        assert_eq!(graph.log().len(), 1);
        assert_eq!(graph.log().last().unwrap().function, "add_node");
    }
}

#[cfg(test)]
mod selection_tests {
    use crate::graph::{EdgeId, EdgeSpec, ErrorKind, Graph, NodeId, NodeSpec, Target};
    use crate::query::{EdgeFilter, EdgeFormat, EdgeValues, NodeFilter};

    fn n(raw: u64) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn select_last_nodes_then_connect_new_node() {
        let mut graph = Graph::new();
        graph.add_n_nodes(5, NodeSpec::new()).unwrap();
        graph.select_last_nodes_created();
        let selected = graph.get_selection().node_ids();
        graph.add_node(NodeSpec::new().to_nodes(selected)).unwrap();

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 5);
        let listing = graph.get_edges(EdgeFormat::Pairs, EdgeValues::Ids);
        assert_eq!(
            listing.pairs().unwrap(),
            ["6->1", "6->2", "6->3", "6->4", "6->5"].map(String::from)
        );
    }

    #[test]
    fn select_last_edges_created_follows_add_node() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        graph
            .add_node(NodeSpec::new().from_nodes([n(1), n(2)]))
            .unwrap();
        graph.select_last_edges_created();
        assert_eq!(
            graph.get_selection().edge_ids(),
            vec![EdgeId::new(1), EdgeId::new(2)]
        );
    }

    #[test]
    fn select_last_created_on_fresh_graph_is_empty() {
        let mut graph = Graph::new();
        graph.select_last_nodes_created();
        assert!(graph.get_selection().is_empty());
    }

    #[test]
    fn select_last_nodes_after_non_creating_call_is_empty() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        graph.add_edge(1u64, 2u64, EdgeSpec::new()).unwrap();
        graph.select_last_nodes_created();
        assert!(graph.get_selection().is_empty());
    }

    #[test]
    fn selection_feeds_explicit_targets() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        graph.add_n_nodes(3, NodeSpec::new().node_type("leaf")).unwrap();
        graph.select_nodes(&NodeFilter::new().with_type("leaf"));
        let targets = graph.get_selection().node_ids();
        graph
            .set_node_attr(Target::Ids(targets), "depth", 2i64)
            .unwrap();
        let depths = graph.get_node_attrs("depth", Some(&[n(1), n(3)][..])).unwrap();
        assert_eq!(depths[0].1, None);
        assert!(depths[1].1.is_some());
    }

    #[test]
    fn select_by_unknown_id_fails_and_keeps_selection() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        graph.select_nodes_by_id(&[n(1)]).unwrap();
        let err = graph.select_nodes_by_id(&[n(3)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(graph.get_selection().node_ids(), vec![n(1)]);
    }

    #[test]
    fn node_and_edge_selections_replace_each_other() {
        let mut graph = Graph::new();
        graph.add_n_nodes(2, NodeSpec::new()).unwrap();
        let e = graph.add_edge(1u64, 2u64, EdgeSpec::new().rel("r")).unwrap();
        graph.select_nodes_by_id(&[n(1)]).unwrap();
        graph.select_edges(&EdgeFilter::new().with_rel("r"));
        assert!(!graph.get_selection().has_nodes());
        assert_eq!(graph.get_selection().edge_ids(), vec![e]);

        graph.select_edges_by_edge_id(&[e]).unwrap();
        assert!(graph.select_edges_by_edge_id(&[EdgeId::new(9)]).is_err());
    }

    #[test]
    fn invert_selection_within_store() {
        let mut graph = Graph::new();
        graph.add_n_nodes(4, NodeSpec::new()).unwrap();
        graph.select_nodes_by_id(&[n(2), n(4)]).unwrap();
        graph.invert_selection();
        assert_eq!(graph.get_selection().node_ids(), vec![n(1), n(3)]);

        graph.clear_selection();
        graph.invert_selection();
        assert!(graph.get_selection().is_empty());
    }

    #[test]
    fn deletions_prune_the_selection() {
        let mut graph = Graph::new();
        graph.add_n_nodes(3, NodeSpec::new()).unwrap();
        graph.select_last_nodes_created();
        graph.delete_node(n(2)).unwrap();
        assert_eq!(graph.get_selection().node_ids(), vec![n(1), n(3)]);
    }

    #[test]
    fn selecting_does_not_touch_the_log() {
        let mut graph = Graph::new();
        graph.add_n_nodes(3, NodeSpec::new()).unwrap();
        graph.select_nodes(&NodeFilter::new());
        graph.clear_selection();
        assert_eq!(graph.log().len(), 1);
        assert_eq!(graph.get_last_nodes_created().len(), 3);
    }
}
