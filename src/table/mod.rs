//! # Tabular `.out` File Parser
//!
//! This module parses whitespace-delimited columnar time-series files into a
//! [`ParsedTable`]: one numeric column per header plus a unit map.
//!
//! ## File Layout
//!
//! ```text
//! <optional blank/preamble lines>
//! Time  Param1  Param2  ...      <- header: first line containing the word `Time`
//! s     unit1   unit2   ...      <- units: the line right after the header
//! <t0>  <v0_1>  <v0_2>  ...      <- data rows
//! <t1>  <v1_1>  <v1_2>  ...
//! ```
//!
//! ## Parser States
//!
//! The parser is a line-fed state machine visiting
//! [`SeekingHeader`](ParserState::SeekingHeader) →
//! [`SeekingUnits`](ParserState::SeekingUnits) →
//! [`ReadingData`](ParserState::ReadingData) in strict order. Row-level
//! problems never abort a parse:
//!
//! | Condition | Effect |
//! |-----------|--------|
//! | Row token count != header count | Row skipped, counted as malformed |
//! | Time token not numeric | Row skipped |
//! | Other token not numeric | Null sample at that position |
//! | No header row at all | [`ParseError::NoHeaderFound`] |
//! | Header but no accepted rows | [`ParseError::NoDataRows`] |
//!
//! ## Example
//!
//! ```rust
//! use outplot::table::parse_lines;
//!
//! let text = ["Time A B", "s m/s N", "0 1 2", "1 2", "2 3 4"];
//! let (table, stats) = parse_lines(text, "run.out_0")?;
//!
//! assert_eq!(table.headers, ["A", "B"]);
//! assert_eq!(table.time, [0.0, 2.0]);
//! assert_eq!(table.unit("A"), "m/s");
//! assert_eq!(stats.malformed_rows, 1);
//! # Ok::<(), outplot::table::ParseError>(())
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::stream::LineStreamer;

pub use error::ParseError;
pub use parser::{ParserState, TableParser};
pub use report::{ColumnSummary, ParseReport};
pub use sample::parse_sample;

mod error;
mod parser;
mod report;
mod sample;


/// Name of the structural reference column
pub const TIME_HEADER: &str = "Time";

/// Nullable samples of one channel, one entry per accepted data row
pub type RawColumn = Vec<Option<f64>>;

/// Parse result for one file version
///
/// Invariant: every column in `columns` has exactly `time.len()` entries and
/// index `i` of any column belongs to `time[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    /// Identity of the parsed file version (`{path-or-name}_{mtime}`)
    pub source_id: String,
    /// Distinct value-column names in file order, `Time` excluded
    pub headers: Vec<String>,
    /// Unit of the `Time` column (empty when absent)
    pub time_unit: String,
    /// Unit per value column (empty when absent)
    pub units: HashMap<String, String>,
    /// Reference axis, never null
    pub time: Vec<f64>,
    /// Samples per value column, aligned to `time`
    pub columns: HashMap<String, RawColumn>,
}

impl ParsedTable {
    /// Number of accepted data rows
    pub fn row_count(&self) -> usize {
        self.time.len()
    }

    /// Samples of a value column
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Unit of a column, including `Time`; empty for unknown columns
    pub fn unit(&self, name: &str) -> &str {
        if name == TIME_HEADER {
            return &self.time_unit;
        }
        self.units.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Row-level statistics collected while parsing one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines fed to the parser
    pub lines_read: usize,
    /// 1-based line number of the header row
    pub header_line: Option<usize>,
    /// Non-blank lines skipped before the header
    pub preamble_lines: usize,
    /// Blank lines skipped outside the units row
    pub blank_lines: usize,
    /// Data rows accepted into the table
    pub rows_accepted: usize,
    /// Data rows skipped because their token count did not match the header
    pub malformed_rows: usize,
    /// Data rows skipped because their Time token was not numeric
    pub unparsable_time_rows: usize,
    /// Individual samples recorded as null
    pub null_samples: usize,
}

/// Parse a table from an iterator of already split lines
pub fn parse_lines<I, S>(
    lines: I,
    source_id: impl Into<String>,
) -> Result<(ParsedTable, ParseStats), ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = TableParser::new();
    for line in lines {
        parser.feed_line(line.as_ref());
    }
    parser.finish(source_id)
}

/// Parse a table from any byte source using the streaming line reader
pub fn parse_reader<R: Read>(
    reader: R,
    source_id: impl Into<String>,
) -> Result<(ParsedTable, ParseStats), ParseError> {
    parse_streamer(LineStreamer::new(reader), source_id)
}

/// Parse a table from a [`LineStreamer`] configured by the caller
pub fn parse_streamer<R: Read>(
    mut streamer: LineStreamer<R>,
    source_id: impl Into<String>,
) -> Result<(ParsedTable, ParseStats), ParseError> {
    let mut parser = TableParser::new();
    while let Some(line) = streamer.next_line()? {
        parser.feed_line(&line);
    }
    parser.finish(source_id)
}

/// Open and parse a file from disk
pub fn parse_file<P: AsRef<Path>>(
    path: P,
    source_id: impl Into<String>,
) -> Result<(ParsedTable, ParseStats), ParseError> {
    let streamer: LineStreamer<File> = LineStreamer::open(path)?;
    parse_streamer(streamer, source_id)
}
