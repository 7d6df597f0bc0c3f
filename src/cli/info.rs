use anyhow::{Context, Result};
use std::path::PathBuf;

use outplot::stream::LineStreamer;
use outplot::table::{parse_streamer, ParseReport};

use super::config::Config;

/// Display information about a `.out` file
pub fn run(file: PathBuf, config: Option<PathBuf>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let ingest = Config::load(config.as_deref())?.ingest_config(None);
    let streamer = LineStreamer::open_with_buffer_size(&file, ingest.chunk_size)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let (table, stats) = parse_streamer(streamer, file.display().to_string())
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let report = ParseReport::new(file.display().to_string(), &table, stats);
    print!("{}", report.format_colored());

    Ok(())
}
