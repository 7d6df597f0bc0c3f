use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use outplot::downsample::downsample_table;
use outplot::stream::LineStreamer;
use outplot::table::parse_streamer;

use super::config::Config;

/// Write every column's downsampled series as `column,time,value` CSV
pub fn run(
    file: PathBuf,
    threshold: Option<usize>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let ingest = Config::load(config.as_deref())?.ingest_config(threshold);

    let streamer = LineStreamer::open_with_buffer_size(&file, ingest.chunk_size)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let (table, stats) = parse_streamer(streamer, file.display().to_string())
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    info!(
        "Parsed {} rows from {} ({} malformed)",
        stats.rows_accepted,
        file.display(),
        stats.malformed_rows
    );

    let series = downsample_table(&table, ingest.threshold);

    let sink: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["column", "time", "value"])?;

    let mut rows = 0;
    // Header order, not map order
    for name in &table.headers {
        let Some(reduced) = series.get(name) else {
            continue;
        };
        for (time, value) in reduced.points() {
            writer.write_record([name.clone(), time.to_string(), value.to_string()])?;
            rows += 1;
        }
    }
    writer.flush().context("Failed to flush CSV output")?;

    info!(
        "Wrote {} points for {} columns (threshold {})",
        rows,
        series.len(),
        ingest.threshold
    );
    Ok(())
}
