//! Record source trait definitions

use crate::error::DataResult;
use async_trait::async_trait;
use campath_core::{CampusMap, Location, Segment};

/// Trait for anything that can supply campus map records
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every location record
    async fn load_locations(&self) -> DataResult<Vec<Location>>;

    /// Load every segment record
    async fn load_segments(&self) -> DataResult<Vec<Segment>>;

    /// Load both record sets and build a map from them
    ///
    /// Nothing is built unless both sets load cleanly.
    async fn load_map(&self) -> DataResult<CampusMap> {
        let locations = self.load_locations().await?;
        let segments = self.load_segments().await?;
        tracing::debug!(
            "Building map from {} locations and {} segments",
            locations.len(),
            segments.len()
        );
        Ok(CampusMap::from_records(locations, segments)?)
    }
}
