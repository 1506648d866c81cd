//! Campus map: named locations over a coordinate graph

use crate::coordinates::Coordinates;
use crate::edge::Edge;
use crate::error::Result;
use crate::graph::Graph;
use crate::location::{Length, Location, Route, Segment};
use crate::node::Node;
use crate::traversal::{GraphPath, TraversalEngine};
use std::collections::HashMap;

/// A campus map of named locations joined by walkable segments
///
/// Graph nodes are coordinates, so two locations registered at the same
/// coordinates share a node and cannot be told apart by path queries.
///
/// Populate the map first, then query it. Queries take `&self` and can run
/// concurrently once loading is done; the map does no locking of its own.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    graph: Graph<Coordinates, Length>,
    locations: HashMap<String, Location>,
}

impl CampusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from location and segment records in one pass
    pub fn from_records(
        locations: impl IntoIterator<Item = Location>,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<Self> {
        let mut map = Self::new();
        for location in locations {
            map.add_location(location);
        }
        for segment in segments {
            map.add_segment(&segment)?;
        }
        tracing::info!(
            "Loaded campus map: {} locations, {} nodes, {} edges",
            map.location_count(),
            map.graph.node_count(),
            map.graph.edge_count()
        );
        Ok(map)
    }

    /// Register a location under its id and add its coordinates as a node
    ///
    /// Ids are not deduplicated: a repeated id replaces the earlier record,
    /// which is returned.
    pub fn add_location(&mut self, location: Location) -> Option<Location> {
        self.graph.add_node(Node::new(location.coordinates));
        let previous = self.locations.insert(location.id.clone(), location);
        if let Some(prev) = &previous {
            tracing::warn!("Location id '{}' registered twice; keeping the later record", prev.id);
        }
        previous
    }

    /// Add a segment as two opposing directed edges of the same length
    ///
    /// Endpoints that are not yet nodes are added. Returns whether either
    /// edge was new.
    pub fn add_segment(&mut self, segment: &Segment) -> Result<bool> {
        let origin = Node::new(segment.origin);
        let destination = Node::new(segment.destination);

        self.graph.add_node(origin.clone());
        self.graph.add_node(destination.clone());

        let forward = self
            .graph
            .add_edge(Edge::new(origin.clone(), destination.clone(), segment.length))?;
        let backward = self
            .graph
            .add_edge(Edge::new(destination, origin, segment.length))?;

        tracing::trace!("Added segment {}", segment);
        Ok(forward || backward)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// All registered locations, in no particular order
    pub fn list_locations(&self) -> Vec<Location> {
        self.locations.values().cloned().collect()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// The underlying coordinate graph
    pub fn graph(&self) -> &Graph<Coordinates, Length> {
        &self.graph
    }

    /// Shortest walking route between two location ids
    ///
    /// Returns `None` if either id is unknown or the locations are not
    /// connected. Among equally short routes, which one is returned is
    /// unspecified.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<Route> {
        let (start, dest) = self.endpoints(from, to)?;
        let path = TraversalEngine::dijkstra(&self.graph, &start, &dest).into_path()?;
        Some(Self::to_route(path))
    }

    /// Route with the fewest segments between two location ids
    ///
    /// Ties are broken by the least sequence of (coordinates, length) steps.
    pub fn fewest_hops(&self, from: &str, to: &str) -> Option<Route> {
        let (start, dest) = self.endpoints(from, to)?;
        let path = TraversalEngine::lexicographic_bfs(&self.graph, &start, &dest).into_path()?;
        Some(Self::to_route(path))
    }

    fn endpoints(&self, from: &str, to: &str) -> Option<(Node<Coordinates>, Node<Coordinates>)> {
        let (Some(start), Some(dest)) = (self.locations.get(from), self.locations.get(to)) else {
            tracing::debug!("Unknown location in route query: {} -> {}", from, to);
            return None;
        };
        Some((Node::new(start.coordinates), Node::new(dest.coordinates)))
    }

    fn to_route(path: GraphPath<Coordinates, Length>) -> Route {
        let segments = path
            .edges
            .into_iter()
            .map(|edge| {
                Segment::new(
                    *edge.parent().label(),
                    *edge.child().label(),
                    *edge.label(),
                )
            })
            .collect();
        Route::new(segments)
    }
}
