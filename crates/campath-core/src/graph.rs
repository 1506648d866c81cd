//! Directed labeled multigraph store

use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::node::Node;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Directed labeled multigraph keyed by node
///
/// Each node maps to the set of edges leaving it. The store keeps these
/// invariants after every operation:
///
/// - every edge's child is itself a node of the graph
/// - an edge appears only in the set of its own parent
/// - no two edges share the same (parent, child, label) triple
///
/// The graph is not internally synchronized. Load it once, then share it
/// read-only (or behind a lock if mutation must continue).
#[derive(Debug, Clone)]
pub struct Graph<L, W> {
    adjacency: HashMap<Node<L>, HashSet<Edge<L, W>>>,
}

impl<L, W> Graph<L, W>
where
    L: Clone + Eq + Hash + fmt::Debug,
    W: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Add a node, returning false if it was already present
    pub fn add_node(&mut self, node: Node<L>) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashSet::new());
        true
    }

    /// Add every node, returning true iff all of them were new
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node<L>>) -> bool {
        nodes
            .into_iter()
            .fold(true, |all_new, node| self.add_node(node) & all_new)
    }

    /// Add an edge between two existing nodes
    ///
    /// Returns `Ok(false)` if an identical edge is already stored, and
    /// [`Error::MissingEndpoint`] (leaving the graph untouched) if either
    /// endpoint is not a node of this graph.
    pub fn add_edge(&mut self, edge: Edge<L, W>) -> Result<bool> {
        if !self.adjacency.contains_key(edge.child()) {
            return Err(Error::MissingEndpoint(format!("{:?}", edge)));
        }
        match self.adjacency.get_mut(edge.parent()) {
            Some(out) => Ok(out.insert(edge)),
            None => Err(Error::MissingEndpoint(format!("{:?}", edge))),
        }
    }

    /// Add every edge, returning true iff all of them were new
    ///
    /// Stops at the first edge with a missing endpoint; edges before it stay
    /// inserted.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge<L, W>>) -> Result<bool> {
        let mut all_new = true;
        for edge in edges {
            all_new &= self.add_edge(edge)?;
        }
        Ok(all_new)
    }

    pub fn contains_node(&self, node: &Node<L>) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn contains_edge(&self, edge: &Edge<L, W>) -> bool {
        self.adjacency
            .get(edge.parent())
            .is_some_and(|out| out.contains(edge))
    }

    /// Remove a node along with every edge entering or leaving it
    pub fn remove_node(&mut self, node: &Node<L>) -> bool {
        if self.adjacency.remove(node).is_none() {
            return false;
        }
        for out in self.adjacency.values_mut() {
            out.retain(|edge| edge.child() != node);
        }
        true
    }

    pub fn remove_edge(&mut self, edge: &Edge<L, W>) -> bool {
        self.adjacency
            .get_mut(edge.parent())
            .is_some_and(|out| out.remove(edge))
    }

    /// Nodes reachable from `node` over one outgoing edge
    pub fn children(&self, node: &Node<L>) -> HashSet<Node<L>> {
        self.outgoing(node).map(|edge| edge.child().clone()).collect()
    }

    /// Nodes with an edge leading into `node`
    pub fn parents(&self, node: &Node<L>) -> HashSet<Node<L>> {
        self.incoming(node).map(|edge| edge.parent().clone()).collect()
    }

    /// Copy of the edges leaving `node` (empty if the node is absent)
    pub fn out_edges(&self, node: &Node<L>) -> HashSet<Edge<L, W>> {
        self.outgoing(node).cloned().collect()
    }

    /// Copy of the edges entering `node` (empty if the node is absent)
    pub fn in_edges(&self, node: &Node<L>) -> HashSet<Edge<L, W>> {
        self.incoming(node).cloned().collect()
    }

    /// Borrowing view of the edges leaving `node`
    pub fn outgoing<'a>(&'a self, node: &Node<L>) -> impl Iterator<Item = &'a Edge<L, W>> + 'a {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Borrowing view of the edges entering `node`
    ///
    /// Scans every edge; the store only indexes edges by parent.
    pub fn incoming<'a>(&'a self, node: &'a Node<L>) -> impl Iterator<Item = &'a Edge<L, W>> + 'a {
        self.edges().filter(move |edge| edge.child() == node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<L>> {
        self.adjacency.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<L, W>> {
        self.adjacency.values().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<L, W> Default for Graph<L, W>
where
    L: Clone + Eq + Hash + fmt::Debug,
    W: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Graphs are equal when they hold the same nodes and the same edges,
/// whatever order they were inserted in.
impl<L, W> PartialEq for Graph<L, W>
where
    L: Eq + Hash,
    W: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<L: Eq + Hash, W: Eq + Hash> Eq for Graph<L, W> {}

/// Order-independent, consistent with `PartialEq`
impl<L, W> Hash for Graph<L, W>
where
    L: Eq + Hash,
    W: Eq + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        fn digest<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let mut nodes = 0u64;
        let mut edges = 0u64;
        for (node, out) in &self.adjacency {
            nodes = nodes.wrapping_add(digest(node));
            for edge in out {
                edges = edges.wrapping_add(digest(edge));
            }
        }
        state.write_usize(self.adjacency.len());
        state.write_u64(nodes);
        state.write_u64(edges);
    }
}

/// Renders `[(n1)(n2)]` on the first line and `[(n1, n2, e1)]` on the
/// second; iteration order is unspecified.
impl<L, W> fmt::Display for Graph<L, W>
where
    L: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for node in self.adjacency.keys() {
            write!(f, "({})", node)?;
        }
        write!(f, "]\n[")?;
        for edge in self.adjacency.values().flatten() {
            write!(f, "{}", edge)?;
        }
        write!(f, "]")
    }
}
