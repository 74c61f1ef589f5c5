//! Detection dataset types and CSV ingestion.
//!
//! A dataset is an ordered collection of timestamped (x, y) detections from
//! one sensor. The input contract is a CSV file with headers, requiring the
//! columns `time` (date-time, optional fractional seconds), `x` and `y`
//! (real numbers). Datasets are immutable after load; the step index derived
//! from the unified timeline lives in [`crate::timeline::IndexedDataset`].

mod error;

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

pub use error::DatasetError;

/// Accepted `time` column formats. `%.f` matches optional fractional
/// seconds, so `2025-01-02 15:53:39` and `2025-01-02 15:53:39.250` both
/// parse with the first entry.
const TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Which sensor a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Image,
    Radar,
}

impl Source {
    /// Human-readable label used in view titles and log output.
    pub fn label(&self) -> &'static str {
        match self {
            Source::Image => "image",
            Source::Radar => "radar",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single timestamped detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    /// Absolute instant of the detection (sub-second precision)
    pub time: NaiveDateTime,
    pub x: f64,
    pub y: f64,
}

/// CSV row as it appears on disk; `time` is parsed separately so errors can
/// name the offending row and value.
#[derive(Debug, Deserialize)]
struct RawRecord {
    time: String,
    x: f64,
    y: f64,
}

/// An ordered, immutable collection of detections from one sensor.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: Source,
    records: Vec<PointRecord>,
}

impl Dataset {
    /// Create a dataset from already-parsed records.
    pub fn new(source: Source, records: Vec<PointRecord>) -> Self {
        Self { source, records }
    }

    /// Load a dataset from a CSV file at `path`.
    ///
    /// # Errors
    /// Returns a [`DatasetError`] naming the file, and where applicable the
    /// row, for IO failures, missing columns, malformed numbers, and
    /// unparseable timestamps.
    pub fn from_path(source: Source, path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(source, file, &path.display().to_string())
    }

    /// Load a dataset from any reader producing CSV text.
    ///
    /// `origin` names the input in error messages (a path for files).
    pub fn from_reader<R: Read>(
        source: Source,
        reader: R,
        origin: &str,
    ) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| DatasetError::Headers {
                origin: origin.to_string(),
                source: e,
            })?
            .clone();
        for column in ["time", "x", "y"] {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn {
                    origin: origin.to_string(),
                    column,
                });
            }
        }

        let mut records = Vec::new();
        for (i, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            // Row numbers are 1-based and include the header line.
            let row_number = i + 2;
            let raw = row.map_err(|e| DatasetError::Row {
                origin: origin.to_string(),
                row: row_number,
                source: e,
            })?;
            let time =
                parse_timestamp(&raw.time).ok_or_else(|| DatasetError::InvalidTimestamp {
                    origin: origin.to_string(),
                    row: row_number,
                    value: raw.time.clone(),
                })?;
            records.push(PointRecord {
                time,
                x: raw.x,
                y: raw.y,
            });
        }

        debug!(source = %source, records = records.len(), origin, "loaded dataset");
        Ok(Self { source, records })
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn records(&self) -> &[PointRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a `time` column value against the accepted formats.
///
/// # Returns
/// `None` if the value matches none of [`TIME_FORMATS`].
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
