//! # outplot - Streaming Time-Series Ingestion for `.out` Files
//!
//! `outplot` reads large whitespace-delimited simulation output files (the
//! `.out` layout written by aero-elastic and similar solvers), reduces every
//! channel to a fixed point budget, and assembles the result into chart-ready
//! stacks.
//!
//! ## Key Features
//!
//! - **Bounded Memory Reading**: Lines are decoded from fixed-size chunks, so
//!   multi-gigabyte files never have to be held in memory as text.
//!
//! - **Forgiving Parser**: Preamble lines, malformed rows and unparsable
//!   samples are skipped or recorded as nulls instead of failing the file.
//!
//! - **Shape-Preserving Downsampling**: Largest-Triangle-Three-Buckets keeps
//!   peaks and edges while capping each series at a configurable budget.
//!
//! - **Multi-Version Plotting**: Files sharing a name are compared as
//!   versions, each with a stable color.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use outplot::downsample::{downsample_table, DEFAULT_THRESHOLD};
//! use outplot::table::parse_file;
//!
//! let (table, stats) = parse_file("turbine.out", "turbine.out_0")?;
//! println!("{} rows, {} malformed", stats.rows_accepted, stats.malformed_rows);
//!
//! for (name, series) in downsample_table(&table, DEFAULT_THRESHOLD) {
//!     println!("{} [{}]: {} points", name, table.unit(&name), series.len());
//! }
//! # Ok::<(), outplot::table::ParseError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bytes -> stream -> table -> downsample -> series
//! ```
//!
//! - [`stream`]: Chunked byte source to text lines
//! - [`table`]: Line-fed `.out` parser producing aligned columns
//! - [`downsample`]: LTTB reduction per column
//! - [`series`]: File discovery, batch ingestion, stacks and sessions
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `parallel` | Yes | Ingest files and downsample columns with rayon |
//! | `colorized_output` | Yes | Colored terminal reports via console |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod downsample;
pub mod series;
pub mod stream;
pub mod table;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::downsample::{
        downsample_column, downsample_table, lttb, DownsampledSeries, DEFAULT_THRESHOLD,
    };
    pub use crate::series::{
        assemble_stacks, discover, ingest_all, ingest_file, ColorAssigner, FileSource,
        FileVersion, IngestConfig, IngestError, Session, Stack, Trace, TracePoint,
    };
    pub use crate::stream::{LineStreamer, StreamError, DEFAULT_CHUNK_SIZE};
    pub use crate::table::{
        parse_file, parse_lines, parse_reader, ParseError, ParseReport, ParseStats, ParsedTable,
        TableParser,
    };
}
