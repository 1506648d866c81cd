//! Path search over the multigraph

use crate::edge::Edge;
use crate::graph::Graph;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// Edge labels usable as a cost by [`TraversalEngine::dijkstra`]
///
/// Costs must be strictly positive; zero or negative costs break the
/// first-extraction guarantee of the search.
pub trait Weight {
    fn cost(&self) -> f64;
}

macro_rules! impl_weight_for_unsigned {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn cost(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_weight_for_unsigned!(u8, u16, u32, u64, usize);

/// A single path through the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPath<L, W> {
    /// Node the path starts at
    pub start: Node<L>,

    /// Edges in traversal order
    pub edges: Vec<Edge<L, W>>,

    /// Total path weight (sum of edge costs, or hop count for unweighted search)
    pub total_weight: f64,
}

impl<L, W> GraphPath<L, W> {
    /// Number of edges
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Nodes visited, start included
    pub fn nodes(&self) -> Vec<&Node<L>> {
        std::iter::once(&self.start)
            .chain(self.edges.iter().map(Edge::child))
            .collect()
    }
}

/// Traversal statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
    pub path_found: bool,
}

/// Result of a path search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalResult<L, W> {
    /// The path found, or `None` when the destination is unreachable
    pub path: Option<GraphPath<L, W>>,

    /// Statistics
    pub stats: TraversalStats,
}

impl<L, W> TraversalResult<L, W> {
    fn found(path: GraphPath<L, W>, mut stats: TraversalStats) -> Self {
        stats.path_found = true;
        Self {
            path: Some(path),
            stats,
        }
    }

    fn not_found(stats: TraversalStats) -> Self {
        Self { path: None, stats }
    }

    pub fn into_path(self) -> Option<GraphPath<L, W>> {
        self.path
    }
}

/// State for Dijkstra priority queue
struct DijkstraState<L, W> {
    cost: f64,
    node: Node<L>,
    /// Edge that reached `node`; `None` only for the start
    via: Option<Edge<L, W>>,
}

impl<L, W> PartialEq for DijkstraState<L, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<L, W> Eq for DijkstraState<L, W> {}

impl<L, W> Ord for DijkstraState<L, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other.cost.total_cmp(&self.cost)
    }
}

impl<L, W> PartialOrd for DijkstraState<L, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Graph traversal engine
pub struct TraversalEngine;

impl TraversalEngine {
    /// Minimum-cost path from `start` to `dest` (Dijkstra)
    ///
    /// Every edge label must have a strictly positive [`Weight::cost`]. The
    /// first time the destination leaves the queue its path is minimal, and
    /// the search stops there.
    ///
    /// When several paths share the minimum cost, which one comes back
    /// depends on heap order among equal-cost entries and on the store's
    /// hash iteration order, so it can differ between runs. Only the cost
    /// is guaranteed.
    ///
    /// Returns no path if either endpoint is not in the graph. A search from
    /// a node to itself returns the empty path at cost zero.
    pub fn dijkstra<L, W>(
        graph: &Graph<L, W>,
        start: &Node<L>,
        dest: &Node<L>,
    ) -> TraversalResult<L, W>
    where
        L: Clone + Eq + Hash + Debug,
        W: Clone + Eq + Hash + Debug + Weight,
    {
        let mut stats = TraversalStats::default();

        if !graph.contains_node(start) || !graph.contains_node(dest) {
            tracing::debug!("Dijkstra endpoint not in graph: {:?} -> {:?}", start, dest);
            return TraversalResult::not_found(stats);
        }

        if start == dest {
            return TraversalResult::found(Self::build_path(start, Vec::new(), 0.0), stats);
        }

        let mut finalized: HashMap<Node<L>, Option<Edge<L, W>>> = HashMap::new();
        let mut best: HashMap<Node<L>, f64> = HashMap::new();
        let mut heap = BinaryHeap::new();

        best.insert(start.clone(), 0.0);
        heap.push(DijkstraState {
            cost: 0.0,
            node: start.clone(),
            via: None,
        });

        while let Some(DijkstraState { cost, node, via }) = heap.pop() {
            if finalized.contains_key(&node) {
                continue;
            }
            stats.nodes_visited += 1;
            finalized.insert(node.clone(), via);

            if &node == dest {
                tracing::debug!(
                    "Dijkstra found path with cost {} (visited {} nodes, traversed {} edges)",
                    cost,
                    stats.nodes_visited,
                    stats.edges_traversed
                );
                let edges = Self::reconstruct_edges(start, dest, &finalized);
                let total = edges.iter().fold(0.0, |sum, e| sum + e.label().cost());
                return TraversalResult::found(Self::build_path(start, edges, total), stats);
            }

            for edge in graph.outgoing(&node) {
                stats.edges_traversed += 1;

                let next = edge.child();
                if finalized.contains_key(next) {
                    continue;
                }

                let next_cost = cost + edge.label().cost();
                if next_cost < best.get(next).copied().unwrap_or(f64::INFINITY) {
                    best.insert(next.clone(), next_cost);
                    heap.push(DijkstraState {
                        cost: next_cost,
                        node: next.clone(),
                        via: Some(edge.clone()),
                    });
                }
            }
        }

        tracing::debug!(
            "Dijkstra found no path (visited {} nodes, traversed {} edges)",
            stats.nodes_visited,
            stats.edges_traversed
        );
        TraversalResult::not_found(stats)
    }

    /// Fewest-edge path from `start` to `dest`, lexicographically least
    /// among ties (BFS)
    ///
    /// Edge labels are not costs here; every edge counts as one hop. Each
    /// node's outgoing edges are expanded in ascending (child label, edge
    /// label) order and a node keeps the first path that reaches it, so the
    /// result is the least such path when paths are compared edge by edge
    /// on (child label, edge label).
    ///
    /// Returns no path if either endpoint is not in the graph.
    pub fn lexicographic_bfs<L, W>(
        graph: &Graph<L, W>,
        start: &Node<L>,
        dest: &Node<L>,
    ) -> TraversalResult<L, W>
    where
        L: Clone + Eq + Hash + Ord + Debug,
        W: Clone + Eq + Hash + Ord + Debug,
    {
        let mut stats = TraversalStats::default();

        if !graph.contains_node(start) || !graph.contains_node(dest) {
            tracing::debug!("BFS endpoint not in graph: {:?} -> {:?}", start, dest);
            return TraversalResult::not_found(stats);
        }

        let mut reached: HashMap<Node<L>, Option<Edge<L, W>>> = HashMap::new();
        let mut queue: VecDeque<Node<L>> = VecDeque::new();

        reached.insert(start.clone(), None);
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            stats.nodes_visited += 1;

            if &current == dest {
                let edges = Self::reconstruct_edges(start, dest, &reached);
                tracing::debug!("BFS found path of {} hops", edges.len());
                let hops = edges.len() as f64;
                return TraversalResult::found(Self::build_path(start, edges, hops), stats);
            }

            let mut out: Vec<&Edge<L, W>> = graph.outgoing(&current).collect();
            out.sort_by(|a, b| {
                a.child()
                    .cmp(b.child())
                    .then_with(|| a.label().cmp(b.label()))
            });

            for edge in out {
                stats.edges_traversed += 1;

                let next = edge.child();
                if !reached.contains_key(next) {
                    reached.insert(next.clone(), Some(edge.clone()));
                    queue.push_back(next.clone());
                }
            }
        }

        tracing::debug!(
            "BFS found no path (visited {} nodes, traversed {} edges)",
            stats.nodes_visited,
            stats.edges_traversed
        );
        TraversalResult::not_found(stats)
    }

    /// Walk the recorded arrival edges back from `dest` to `start`
    fn reconstruct_edges<L, W>(
        start: &Node<L>,
        dest: &Node<L>,
        arrivals: &HashMap<Node<L>, Option<Edge<L, W>>>,
    ) -> Vec<Edge<L, W>>
    where
        L: Clone + Eq + Hash,
        W: Clone,
    {
        let mut edges = Vec::new();
        let mut current = dest;

        while current != start {
            match arrivals.get(current) {
                Some(Some(edge)) => {
                    edges.push(edge.clone());
                    current = edge.parent();
                }
                _ => break,
            }
        }

        edges.reverse();
        edges
    }

    fn build_path<L: Clone, W>(
        start: &Node<L>,
        edges: Vec<Edge<L, W>>,
        total_weight: f64,
    ) -> GraphPath<L, W> {
        GraphPath {
            start: start.clone(),
            edges,
            total_weight,
        }
    }
}
