use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::{ParseStats, ParsedTable};

/// Column entry of a [`ParseReport`]
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Unit string, possibly empty
    pub unit: String,
    /// Non-null samples in the column
    pub samples: usize,
}

/// Human-readable summary of one parsed file
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// File that was parsed
    pub file_path: String,
    /// Unit of the `Time` column
    pub time_unit: String,
    /// First and last time value
    pub time_range: Option<(f64, f64)>,
    /// Value columns in file order
    pub columns: Vec<ColumnSummary>,
    /// Row-level statistics of the parse
    pub stats: ParseStats,
}

impl ParseReport {
    /// Summarize a parsed table
    pub fn new(file_path: impl Into<String>, table: &ParsedTable, stats: ParseStats) -> Self {
        let columns = table
            .headers
            .iter()
            .map(|name| ColumnSummary {
                name: name.clone(),
                unit: table.unit(name).to_string(),
                samples: table
                    .column(name)
                    .map(|c| c.iter().flatten().count())
                    .unwrap_or(0),
            })
            .collect();

        Self {
            file_path: file_path.into(),
            time_unit: table.time_unit.clone(),
            time_range: table.time.first().zip(table.time.last()).map(|(a, b)| (*a, *b)),
            columns,
            stats,
        }
    }

    /// Whether any row was skipped
    pub fn has_skipped_rows(&self) -> bool {
        self.stats.malformed_rows > 0 || self.stats.unparsable_time_rows > 0
    }

    fn time_range_text(&self) -> String {
        match self.time_range {
            Some((first, last)) => format!("{} .. {} {}", first, last, self.time_unit)
                .trim_end()
                .to_string(),
            None => "-".to_string(),
        }
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Parse Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("============").cyan()));
            output.push_str(&format!("{}: {}\n", style("File").bold(), self.file_path));
            output.push_str(&format!(
                "{}: {}\n",
                style("Rows").bold(),
                style(self.stats.rows_accepted).green()
            ));
            output.push_str(&format!(
                "{}: {}\n\n",
                style("Time").bold(),
                self.time_range_text()
            ));

            output.push_str(&format!("{}\n", style("Columns").bold()));
            for (i, column) in self.columns.iter().enumerate() {
                output.push_str(&format!(
                    "  {:3}. {} {} ({} samples)\n",
                    i + 1,
                    style(&column.name).green(),
                    style(format!("[{}]", column.unit)).dim(),
                    column.samples
                ));
            }

            output.push('\n');
            let skipped = |n: usize| {
                if n > 0 {
                    style(n).yellow()
                } else {
                    style(n).green()
                }
            };
            output.push_str(&format!(
                "{}: {} malformed, {} unparsable time, {} null samples\n",
                style("Skipped").bold(),
                skipped(self.stats.malformed_rows),
                skipped(self.stats.unparsable_time_rows),
                skipped(self.stats.null_samples)
            ));

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parse Report")?;
        writeln!(f, "============")?;
        writeln!(f, "File: {}", self.file_path)?;
        writeln!(f, "Rows: {}", self.stats.rows_accepted)?;
        writeln!(f, "Time: {}", self.time_range_text())?;
        writeln!(f)?;

        writeln!(f, "Columns")?;
        for (i, column) in self.columns.iter().enumerate() {
            writeln!(
                f,
                "  {:3}. {} [{}] ({} samples)",
                i + 1,
                column.name,
                column.unit,
                column.samples
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Skipped: {} malformed, {} unparsable time, {} null samples",
            self.stats.malformed_rows, self.stats.unparsable_time_rows, self.stats.null_samples
        )
    }
}
