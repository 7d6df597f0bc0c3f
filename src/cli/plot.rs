use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use outplot::series::{discover, Session, Stack};

use super::config::Config;

/// Build chart stacks for the selected parameters and write them as JSON
#[allow(clippy::too_many_arguments)]
pub fn run(
    inputs: Vec<PathBuf>,
    params: Vec<String>,
    threshold: Option<usize>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    filter: Option<String>,
    hide: Vec<String>,
) -> Result<()> {
    let ingest = Config::load(config.as_deref())?.ingest_config(threshold);
    info!("Downsampling to at most {} points per series", ingest.threshold);

    let mut session = Session::new(ingest);
    let sources = discover(&inputs).context("Failed to discover input files")?;
    let added = session.add_files(sources);
    if added == 0 {
        anyhow::bail!("No .out files found in the given inputs");
    }
    info!(
        "Registered {} file versions under {} file keys",
        added,
        session.file_keys().len()
    );

    let keys = session.filter_file_keys(filter.as_deref().unwrap_or(""));
    let mut failures = 0;
    for key in &keys {
        failures += session.toggle_file(key).len();
    }
    let ingested: usize = keys.iter().map(|k| session.versions(k).len()).sum();
    if ingested == 0 {
        anyhow::bail!("None of the {} selected file versions could be parsed", failures);
    }
    if failures > 0 {
        warn!("{} file versions were skipped", failures);
    }

    select_parameters(&mut session, &params);
    if session.selected_parameters().is_empty() {
        anyhow::bail!("No parameters match the requested names");
    }

    for id in &hide {
        session.on_legend_toggle(id, false);
    }

    let stacks = session.stacks();
    write_stacks(&stacks, output.as_ref(), pretty)?;

    info!(
        "Wrote {} stacks with {} traces",
        stacks.len(),
        stacks.iter().map(|s| s.traces.len()).sum::<usize>()
    );
    Ok(())
}

/// Select parameters by name or wildcard; nothing requested selects all
fn select_parameters(session: &mut Session, params: &[String]) {
    let names: Vec<String> = if params.is_empty() {
        session.available_parameters().to_vec()
    } else {
        params
            .iter()
            .flat_map(|p| {
                if p.contains('*') {
                    session.filter_parameters(p)
                } else {
                    vec![p.clone()]
                }
            })
            .collect()
    };

    for name in names {
        if !session.selected_parameters().contains(&name) {
            session.toggle_param(&name);
        }
    }
}

fn write_stacks(stacks: &[Stack], output: Option<&PathBuf>, pretty: bool) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    if pretty {
        serde_json::to_writer_pretty(&mut writer, stacks)
    } else {
        serde_json::to_writer(&mut writer, stacks)
    }
    .context("Failed to serialize stacks")?;

    writeln!(writer)?;
    writer.flush().context("Failed to flush output")?;
    Ok(())
}
