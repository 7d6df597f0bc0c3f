use std::collections::HashMap;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::downsample::{downsample_table, DownsampledSeries, DEFAULT_THRESHOLD};
use crate::stream::{LineStreamer, DEFAULT_CHUNK_SIZE};
use crate::table::{parse_streamer, ParseError, ParseStats};

use super::{FileSource, IngestError};

/// Settings for turning file sources into downsampled versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Point budget per series
    pub threshold: usize,
    /// Bytes requested per read
    pub chunk_size: usize,
    /// Ingest several files at once (requires the `parallel` feature)
    pub parallel: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel: true,
        }
    }
}

impl IngestConfig {
    /// Set the point budget per series
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the read chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable or disable parallel ingestion
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One parsed and downsampled version of a file key
#[derive(Debug, Clone, PartialEq)]
pub struct FileVersion {
    /// Version identity, see [`FileSource::source_id`]
    pub source_id: String,
    /// File key the version belongs to
    pub key: String,
    /// Value-column names in file order
    pub headers: Vec<String>,
    /// Unit of the `Time` column
    pub time_unit: String,
    /// Unit per value column
    pub units: HashMap<String, String>,
    /// Downsampled series per column with at least one sample
    pub series: HashMap<String, DownsampledSeries>,
    /// Row-level statistics of the parse
    pub stats: ParseStats,
}

impl FileVersion {
    /// Downsampled series of a column
    pub fn series(&self, name: &str) -> Option<&DownsampledSeries> {
        self.series.get(name)
    }
}

/// Parse and downsample one file version
pub fn ingest_file(source: &FileSource, config: &IngestConfig) -> Result<FileVersion, IngestError> {
    let source_id = source.source_id();
    let rejected = |e: ParseError| IngestError::ParseError {
        source_id: source_id.clone(),
        source: e,
    };

    let streamer = LineStreamer::open_with_buffer_size(&source.path, config.chunk_size)
        .map_err(|e| rejected(e.into()))?;
    let (table, stats) = parse_streamer(streamer, source_id.clone()).map_err(rejected)?;

    if stats.malformed_rows > 0 {
        warn!(
            "{}: skipped {} malformed rows",
            source_id, stats.malformed_rows
        );
    }

    let series = downsample_table(&table, config.threshold);
    info!(
        "Ingested {}: {} rows, {} columns",
        source_id,
        table.row_count(),
        table.headers.len()
    );

    Ok(FileVersion {
        source_id,
        key: source.key.clone(),
        headers: table.headers,
        time_unit: table.time_unit,
        units: table.units,
        series,
        stats,
    })
}

/// Ingest several file versions, one result per source in input order
///
/// A failing file never affects the others.
pub fn ingest_all(
    sources: &[FileSource],
    config: &IngestConfig,
) -> Vec<Result<FileVersion, IngestError>> {
    let results: Vec<_> = {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if config.parallel {
                sources.par_iter().map(|s| ingest_file(s, config)).collect()
            } else {
                sources.iter().map(|s| ingest_file(s, config)).collect()
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            sources.iter().map(|s| ingest_file(s, config)).collect()
        }
    };

    for error in results.iter().filter_map(|r| r.as_ref().err()) {
        warn!("{}", error);
    }
    results
}
