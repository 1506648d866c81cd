//! Property-based tests for the graph store
//!
//! Random mutation sequences are replayed against a plain set-based model;
//! after every step the store must agree with the model and keep its
//! structural invariants.

use campath_core::{Edge, Graph, Node};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

type TestGraph = Graph<u8, u8>;

#[derive(Debug, Clone)]
enum Op {
    AddNode(u8),
    AddEdge(u8, u8, u8),
    RemoveNode(u8),
    RemoveEdge(u8, u8, u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8).prop_map(Op::AddNode),
        (0u8..8, 0u8..8, 0u8..3).prop_map(|(p, c, l)| Op::AddEdge(p, c, l)),
        (0u8..8).prop_map(Op::RemoveNode),
        (0u8..8, 0u8..8, 0u8..3).prop_map(|(p, c, l)| Op::RemoveEdge(p, c, l)),
    ]
}

fn edge(p: u8, c: u8, l: u8) -> Edge<u8, u8> {
    Edge::new(Node::new(p), Node::new(c), l)
}

fn hash_of(graph: &TestGraph) -> u64 {
    let mut hasher = DefaultHasher::new();
    graph.hash(&mut hasher);
    hasher.finish()
}

fn assert_invariants(graph: &TestGraph) {
    let mut seen = HashSet::new();
    for e in graph.edges() {
        assert!(graph.contains_node(e.parent()), "parent missing for {:?}", e);
        assert!(graph.contains_node(e.child()), "child missing for {:?}", e);
        assert!(seen.insert(e.clone()), "duplicate edge {:?}", e);
    }
    assert_eq!(seen.len(), graph.edge_count());

    for n in graph.nodes() {
        for e in graph.out_edges(n) {
            assert_eq!(e.parent(), n);
        }
        for e in graph.in_edges(n) {
            assert_eq!(e.child(), n);
        }
    }
}

proptest! {
    #[test]
    fn prop_mutations_match_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut graph = TestGraph::new();
        let mut nodes: HashSet<u8> = HashSet::new();
        let mut edges: HashSet<(u8, u8, u8)> = HashSet::new();

        for op in ops {
            match op {
                Op::AddNode(n) => {
                    let added = graph.add_node(Node::new(n));
                    prop_assert_eq!(added, nodes.insert(n));
                }
                Op::AddEdge(p, c, l) => {
                    let before = (graph.node_count(), graph.edge_count());
                    let result = graph.add_edge(edge(p, c, l));
                    if nodes.contains(&p) && nodes.contains(&c) {
                        prop_assert_eq!(result.unwrap(), edges.insert((p, c, l)));
                    } else {
                        prop_assert!(result.is_err());
                        prop_assert_eq!((graph.node_count(), graph.edge_count()), before);
                    }
                }
                Op::RemoveNode(n) => {
                    let removed = graph.remove_node(&Node::new(n));
                    prop_assert_eq!(removed, nodes.remove(&n));
                    edges.retain(|&(p, c, _)| p != n && c != n);
                    prop_assert!(!graph.contains_node(&Node::new(n)));
                }
                Op::RemoveEdge(p, c, l) => {
                    let removed = graph.remove_edge(&edge(p, c, l));
                    prop_assert_eq!(removed, edges.remove(&(p, c, l)));
                }
            }

            assert_invariants(&graph);
            prop_assert_eq!(graph.node_count(), nodes.len());
            prop_assert_eq!(graph.edge_count(), edges.len());
        }
    }

    #[test]
    fn prop_equality_ignores_order(
        raw_edges in prop::collection::vec((0u8..6, 0u8..6, 0u8..3), 0..20)
    ) {
        let mut forward = TestGraph::new();
        let mut backward = TestGraph::new();
        forward.add_nodes((0u8..6).map(Node::new));
        backward.add_nodes((0u8..6).rev().map(Node::new));

        for &(p, c, l) in &raw_edges {
            forward.add_edge(edge(p, c, l)).unwrap();
        }
        for &(p, c, l) in raw_edges.iter().rev() {
            backward.add_edge(edge(p, c, l)).unwrap();
        }

        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_remove_node_drops_incident_edges(
        raw_edges in prop::collection::vec((0u8..6, 0u8..6, 0u8..3), 0..20),
        victim in 0u8..6,
    ) {
        let mut graph = TestGraph::new();
        graph.add_nodes((0u8..6).map(Node::new));
        for (p, c, l) in raw_edges {
            graph.add_edge(edge(p, c, l)).unwrap();
        }

        let victim = Node::new(victim);
        graph.remove_node(&victim);

        prop_assert!(!graph.contains_node(&victim));
        prop_assert!(graph.edges().all(|e| e.parent() != &victim && e.child() != &victim));
        assert_invariants(&graph);
    }
}
