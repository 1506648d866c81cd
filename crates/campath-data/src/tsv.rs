//! Tab-separated record files
//!
//! Both files start with a header line, which is skipped. Lines starting
//! with `#` are comments and blank lines are ignored.
//!
//! Locations: `id<TAB>name<TAB>x<TAB>y`
//!
//! Segments: `x,y<TAB>x,y<TAB>length`, origin first, length `> 0`

use crate::error::{DataError, DataResult};
use crate::traits::RecordSource;
use async_trait::async_trait;
use campath_core::{Coordinates, Length, Location, Segment};
use csv::{ReaderBuilder, StringRecord};
use std::path::PathBuf;

/// Parse the contents of a location file
pub fn parse_locations(content: &str) -> DataResult<Vec<Location>> {
    let mut locations = Vec::new();

    for (line_no, record) in records(content)? {
        expect_fields(&record, 4, line_no)?;

        let x = parse_number(&record[2], line_no)?;
        let y = parse_number(&record[3], line_no)?;
        let coordinates =
            Coordinates::new(x, y).map_err(|e| DataError::malformed(line_no, e.to_string()))?;

        let location = Location::new(record[0].trim(), record[1].trim(), coordinates);
        location
            .validate()
            .map_err(|e| DataError::malformed(line_no, e.to_string()))?;

        tracing::trace!("Parsed location {} at {}", location.id, location.coordinates);
        locations.push(location);
    }

    Ok(locations)
}

/// Parse the contents of a segment file
pub fn parse_segments(content: &str) -> DataResult<Vec<Segment>> {
    let mut segments = Vec::new();

    for (line_no, record) in records(content)? {
        expect_fields(&record, 3, line_no)?;

        let origin = parse_coordinates(&record[0], line_no)?;
        let destination = parse_coordinates(&record[1], line_no)?;
        let length = Length::new(parse_number(&record[2], line_no)?)
            .map_err(|e| DataError::malformed(line_no, e.to_string()))?;

        segments.push(Segment::new(origin, destination, length));
    }

    Ok(segments)
}

/// Data records with their 1-based line numbers
///
/// The header and `#` comments are consumed by the reader; whitespace-only
/// lines are dropped here.
fn records(content: &str) -> DataResult<Vec<(usize, StringRecord)>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut out = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line_no = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or_default();
        out.push((line_no, record));
    }
    Ok(out)
}

fn expect_fields(record: &StringRecord, expected: usize, line_no: usize) -> DataResult<()> {
    if record.len() != expected {
        return Err(DataError::malformed(
            line_no,
            format!(
                "expected {} tab-separated fields, found {}",
                expected,
                record.len()
            ),
        ));
    }
    Ok(())
}

/// Parse an `x,y` pair
fn parse_coordinates(field: &str, line_no: usize) -> DataResult<Coordinates> {
    let Some((x, y)) = field.split_once(',') else {
        return Err(DataError::malformed(
            line_no,
            format!("coordinates not in x,y form: {:?}", field),
        ));
    };
    let x = parse_number(x, line_no)?;
    let y = parse_number(y, line_no)?;
    Coordinates::new(x, y).map_err(|e| DataError::malformed(line_no, e.to_string()))
}

fn parse_number(field: &str, line_no: usize) -> DataResult<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| DataError::malformed(line_no, format!("not a number: {:?}", field)))
}

/// Record source backed by two TSV files on disk
#[derive(Debug, Clone)]
pub struct TsvSource {
    locations_path: PathBuf,
    segments_path: PathBuf,
}

impl TsvSource {
    pub fn new(locations_path: impl Into<PathBuf>, segments_path: impl Into<PathBuf>) -> Self {
        Self {
            locations_path: locations_path.into(),
            segments_path: segments_path.into(),
        }
    }
}

#[async_trait]
impl RecordSource for TsvSource {
    async fn load_locations(&self) -> DataResult<Vec<Location>> {
        tracing::debug!("Reading locations from {:?}", self.locations_path);
        let content = tokio::fs::read_to_string(&self.locations_path).await?;
        parse_locations(&content)
    }

    async fn load_segments(&self) -> DataResult<Vec<Segment>> {
        tracing::debug!("Reading segments from {:?}", self.segments_path);
        let content = tokio::fs::read_to_string(&self.segments_path).await?;
        parse_segments(&content)
    }
}
