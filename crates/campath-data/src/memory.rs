//! In-memory record source for testing

use crate::error::DataResult;
use crate::traits::RecordSource;
use async_trait::async_trait;
use campath_core::{Location, Segment};

/// In-memory record source
///
/// Useful for testing and for callers that already hold parsed records.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    locations: Vec<Location>,
    segments: Vec<Segment>,
}

impl MemorySource {
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn load_locations(&self) -> DataResult<Vec<Location>> {
        Ok(self.locations.clone())
    }

    async fn load_segments(&self) -> DataResult<Vec<Segment>> {
        Ok(self.segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campath_core::{Coordinates, Length};

    #[tokio::test]
    async fn test_memory_source() {
        let a = Coordinates::new(0.0, 0.0).unwrap();
        let b = Coordinates::new(3.0, 4.0).unwrap();

        let source = MemorySource::default()
            .with_location(Location::new("A", "Alpha", a))
            .with_location(Location::new("B", "Beta", b))
            .with_segment(Segment::new(a, b, Length::new(5.0).unwrap()));

        let map = source.load_map().await.unwrap();
        assert_eq!(map.location_count(), 2);

        let route = map.shortest_path("B", "A").unwrap();
        assert_eq!(route.segments[0].origin, b);
        assert_eq!(route.total_length, 5.0);
    }

    #[tokio::test]
    async fn test_empty_source() {
        let map = MemorySource::default().load_map().await.unwrap();
        assert_eq!(map.location_count(), 0);
        assert!(map.shortest_path("A", "B").is_none());
    }
}
