//! Campath Core - Graph engine for campus route finding
//!
//! This crate provides a generic directed labeled multigraph, the path
//! searches that run over it, and the campus map model that specializes
//! the graph to coordinates and named locations.

pub mod coordinates;
pub mod edge;
pub mod error;
pub mod graph;
pub mod location;
pub mod map;
pub mod node;
pub mod traversal;

pub use coordinates::Coordinates;
pub use edge::Edge;
pub use error::{Error, Result};
pub use graph::Graph;
pub use location::{Length, Location, Route, Segment};
pub use map::CampusMap;
pub use node::Node;
pub use traversal::{GraphPath, TraversalEngine, TraversalResult, TraversalStats, Weight};
