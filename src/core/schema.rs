//! Result-feed schema - serde types for Google Benchmark JSON output.

use std::path::Path;

use serde::Deserialize;

use crate::{DeltaError, DeltaResult};

/// One named, timed measurement from a result feed.
///
/// Feeds carry more per-entry fields (`real_time`, `iterations`,
/// `time_unit`, ...); only the identifier and the cpu time participate in
/// delta computation, so everything else is ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    pub cpu_time: f64,
}

impl BenchmarkEntry {
    /// Cpu time truncated to whole units, as provided by the feed.
    ///
    /// Google Benchmark emits fractional values; the delta metric works on
    /// the integer part.
    pub fn cpu_time_units(&self) -> u64 {
        self.cpu_time as u64
    }
}

/// A whole result feed: the `benchmarks` array of a Google Benchmark JSON
/// report. The `context` object and any other top-level fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultFeed {
    pub benchmarks: Vec<BenchmarkEntry>,
}

impl ResultFeed {
    /// Load a feed from a JSON file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not decode as a
    /// result feed; the diagnostic names the offending path.
    pub fn from_path(path: impl AsRef<Path>) -> DeltaResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DeltaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let feed: ResultFeed =
            serde_json::from_slice(&bytes).map_err(|e| DeltaError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::debug!(
            path = %path.display(),
            entries = feed.benchmarks.len(),
            "decoded result feed"
        );
        Ok(feed)
    }
}

/// Grouping key joining comparable measurements across competitors.
///
/// Equality is exact string match on all three fields; no case or
/// whitespace normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementKey {
    pub function: String,
    pub variant_type: String,
    pub size: String,
}

impl std::fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.function, self.variant_type, self.size)
    }
}
