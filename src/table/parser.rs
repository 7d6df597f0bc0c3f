use std::collections::HashMap;

use log::debug;

use super::sample::{contains_word, parse_sample};
use super::{ParseError, ParseStats, ParsedTable, RawColumn, TIME_HEADER};

/// Position of the parser in the file layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Skipping blank and preamble lines until the header row
    SeekingHeader,
    /// The next line, blank or not, is the units row
    SeekingUnits,
    /// Every further non-blank line is a candidate data row
    ReadingData,
}

/// Line-fed parser for one file
///
/// Feed lines in stream order with [`feed_line`](Self::feed_line), then call
/// [`finish`](Self::finish). Nothing outside the parser is touched until
/// `finish` returns a table, so a parse can be abandoned at any line
/// boundary by dropping the parser.
#[derive(Debug)]
pub struct TableParser {
    state: ParserState,
    /// Full header row, used to align the units row
    header_tokens: Vec<String>,
    headers: Vec<String>,
    /// Column slot for each value token of a data row; `None` drops the
    /// samples of a repeated header name
    slots: Vec<Option<usize>>,
    time_unit: String,
    units: HashMap<String, String>,
    time: Vec<f64>,
    columns: Vec<RawColumn>,
    stats: ParseStats,
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParser {
    /// Create a parser waiting for the header row
    pub fn new() -> Self {
        Self {
            state: ParserState::SeekingHeader,
            header_tokens: Vec::new(),
            headers: Vec::new(),
            slots: Vec::new(),
            time_unit: String::new(),
            units: HashMap::new(),
            time: Vec::new(),
            columns: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    /// Current state
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Statistics collected so far
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Value-column names known so far (empty before the header)
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Consume one line, terminator already stripped
    pub fn feed_line(&mut self, line: &str) {
        self.stats.lines_read += 1;
        let trimmed = line.trim();

        match self.state {
            ParserState::SeekingHeader => {
                if trimmed.is_empty() {
                    self.stats.blank_lines += 1;
                } else if contains_word(trimmed, TIME_HEADER) {
                    self.read_header(trimmed);
                    self.stats.header_line = Some(self.stats.lines_read);
                    self.state = ParserState::SeekingUnits;
                    debug!(
                        "Header found on line {} with {} value columns",
                        self.stats.lines_read,
                        self.slots.len()
                    );
                } else {
                    self.stats.preamble_lines += 1;
                }
            }
            ParserState::SeekingUnits => {
                self.read_units(trimmed);
                self.state = ParserState::ReadingData;
            }
            ParserState::ReadingData => {
                if trimmed.is_empty() {
                    self.stats.blank_lines += 1;
                } else {
                    self.read_row(trimmed);
                }
            }
        }
    }

    /// Finish the parse and hand over the collected columns
    pub fn finish(
        self,
        source_id: impl Into<String>,
    ) -> Result<(ParsedTable, ParseStats), ParseError> {
        let source_id = source_id.into();
        let stats = self.stats;

        if self.state == ParserState::SeekingHeader {
            return Err(ParseError::NoHeaderFound {
                lines_read: stats.lines_read,
            });
        }
        if self.time.is_empty() {
            return Err(ParseError::NoDataRows {
                malformed_rows: stats.malformed_rows,
            });
        }

        debug!(
            "Parsed {}: {} rows, {} malformed, {} unparsable time, {} null samples",
            source_id,
            stats.rows_accepted,
            stats.malformed_rows,
            stats.unparsable_time_rows,
            stats.null_samples
        );

        let columns = self.headers.iter().cloned().zip(self.columns).collect();
        let table = ParsedTable {
            source_id,
            headers: self.headers,
            time_unit: self.time_unit,
            units: self.units,
            time: self.time,
            columns,
        };
        Ok((table, stats))
    }

    fn read_header(&mut self, trimmed: &str) {
        self.header_tokens = trimmed.split_whitespace().map(str::to_string).collect();

        for name in self.header_tokens.iter().filter(|name| *name != TIME_HEADER) {
            if self.headers.contains(name) {
                self.slots.push(None);
            } else {
                self.slots.push(Some(self.headers.len()));
                self.headers.push(name.clone());
            }
        }
        self.columns = vec![Vec::new(); self.headers.len()];
    }

    fn read_units(&mut self, trimmed: &str) {
        let mut tokens = trimmed.split_whitespace();
        let mut time_seen = false;

        for name in &self.header_tokens {
            let unit = tokens.next().unwrap_or("").to_string();
            if name == TIME_HEADER {
                if !time_seen {
                    self.time_unit = unit;
                    time_seen = true;
                }
            } else {
                self.units.entry(name.clone()).or_insert(unit);
            }
        }
    }

    fn read_row(&mut self, trimmed: &str) {
        if trimmed.split_whitespace().count() != self.slots.len() + 1 {
            self.stats.malformed_rows += 1;
            return;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(time) = tokens.next().and_then(parse_sample) else {
            self.stats.unparsable_time_rows += 1;
            return;
        };
        self.time.push(time);

        for (slot, token) in self.slots.iter().zip(tokens) {
            let Some(index) = *slot else { continue };
            let sample = parse_sample(token);
            if sample.is_none() {
                self.stats.null_samples += 1;
            }
            self.columns[index].push(sample);
        }
        self.stats.rows_accepted += 1;
    }
}
