//! Edge types

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed, labeled edge from a parent node to a child node
///
/// Equality covers the whole (parent, child, label) triple, so two edges
/// between the same pair of nodes are distinct as long as their labels
/// differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<L, W> {
    parent: Node<L>,
    child: Node<L>,
    label: W,
}

impl<L, W> Edge<L, W> {
    pub fn new(parent: Node<L>, child: Node<L>, label: W) -> Self {
        Self {
            parent,
            child,
            label,
        }
    }

    pub fn parent(&self) -> &Node<L> {
        &self.parent
    }

    pub fn child(&self) -> &Node<L> {
        &self.child
    }

    pub fn label(&self) -> &W {
        &self.label
    }
}

impl<L: fmt::Display, W: fmt::Display> fmt::Display for Edge<L, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.parent, self.child, self.label)
    }
}
