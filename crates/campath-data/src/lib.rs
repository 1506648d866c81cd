//! Campath Data - Record sources for the campus map
//!
//! This crate loads location and segment records and turns them into a
//! [`campath_core::CampusMap`]. Malformed input is reported here, before
//! any graph construction begins.

pub mod error;
pub mod memory;
pub mod traits;
pub mod tsv;

pub use error::{DataError, DataResult};
pub use memory::MemorySource;
pub use traits::RecordSource;
pub use tsv::{parse_locations, parse_segments, TsvSource};
