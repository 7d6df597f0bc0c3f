use std::collections::HashMap;

use serde::Serialize;

use super::{ColorAssigner, FileVersion};

/// One plotted sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TracePoint {
    /// Time coordinate
    pub time: f64,
    /// Sample value
    pub value: f64,
}

/// One line on a chart: a single file version's series for one parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    /// `{file_key}__{version_index}__{parameter}`
    pub id: String,
    /// File key, suffixed with ` (n)` when the key has several versions
    pub name: String,
    /// Hex color of the file key
    pub color: String,
    /// Downsampled points
    pub points: Vec<TracePoint>,
    /// Whether the trace is currently shown
    pub visible: bool,
}

/// All traces of one parameter, drawn on a shared chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stack {
    /// Parameter (column) name
    pub parameter_name: String,
    /// Traces in active-file order, then version order
    pub traces: Vec<Trace>,
}

/// Build the trace id for a file version and parameter
pub fn trace_id(file_key: &str, version_index: usize, parameter: &str) -> String {
    format!("{}__{}__{}", file_key, version_index, parameter)
}

/// Build one stack per selected parameter
///
/// Each stack holds a trace for every (active file key, version) pair with a
/// non-empty series for that parameter. Missing keys, versions or columns
/// are skipped. Colors are drawn from `colors`, so a file key keeps its
/// color across calls. All traces start visible.
pub fn assemble_stacks(
    active_keys: &[String],
    selected_params: &[String],
    versions: &HashMap<String, Vec<FileVersion>>,
    colors: &mut ColorAssigner,
) -> Vec<Stack> {
    selected_params
        .iter()
        .map(|param| {
            let mut traces = Vec::new();

            for key in active_keys {
                let Some(file_versions) = versions.get(key) else {
                    continue;
                };

                for (index, version) in file_versions.iter().enumerate() {
                    let Some(series) = version.series(param).filter(|s| !s.is_empty()) else {
                        continue;
                    };

                    let name = if file_versions.len() > 1 {
                        format!("{} ({})", key, index + 1)
                    } else {
                        key.clone()
                    };

                    traces.push(Trace {
                        id: trace_id(key, index, param),
                        name,
                        color: colors.color_for(key).to_string(),
                        points: series
                            .points()
                            .map(|(time, value)| TracePoint { time, value })
                            .collect(),
                        visible: true,
                    });
                }
            }

            Stack {
                parameter_name: param.clone(),
                traces,
            }
        })
        .collect()
}
