//! Node types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the graph, identified solely by its label
///
/// Two nodes with equal labels are the same node. Ordering follows the
/// label ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node<L>(L);

impl<L> Node<L> {
    pub fn new(label: L) -> Self {
        Self(label)
    }

    pub fn label(&self) -> &L {
        &self.0
    }
}

impl<L> From<L> for Node<L> {
    fn from(label: L) -> Self {
        Self(label)
    }
}

impl<L: fmt::Display> fmt::Display for Node<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
