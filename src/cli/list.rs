use anyhow::{Context, Result};
use std::path::PathBuf;

use outplot::series::{discover, Session};

use super::config::Config;

/// List discovered file keys, their versions and available parameters
pub fn run(inputs: Vec<PathBuf>, filter: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let ingest = Config::load(config.as_deref())?.ingest_config(None);
    let mut session = Session::new(ingest);
    session.add_files(discover(&inputs).context("Failed to discover input files")?);

    let keys = session.filter_file_keys(filter.as_deref().unwrap_or(""));
    if keys.is_empty() {
        println!("No .out files found");
        return Ok(());
    }

    println!("Files:");
    for key in &keys {
        let errors = session.toggle_file(key);
        println!("  {}", key);
        for source in session.sources(key) {
            let id = source.source_id();
            let status = match errors.iter().find(|e| e.source_id() == Some(id.as_str())) {
                Some(e) => format!("skipped: {}", e),
                None => "ok".to_string(),
            };
            println!("    - {} ({})", id, status);
        }
    }
    println!();

    println!("Parameters:");
    let units = session.column_units();
    for (i, name) in session.available_parameters().iter().enumerate() {
        let unit = units.get(name).map(String::as_str).unwrap_or("");
        println!("  {:3}. {} [{}]", i + 1, name, unit);
    }

    Ok(())
}
