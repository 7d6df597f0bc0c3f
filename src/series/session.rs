use std::collections::HashMap;

use log::{debug, info};

use super::assembly::{assemble_stacks, Stack};
use super::filter::filter_names;
use super::ingest::{ingest_all, FileVersion, IngestConfig};
use super::{ColorAssigner, FileSource, IngestError};

/// State of one plotting session
///
/// Holds the selected file versions grouped by file key, the versions
/// ingested so far, which keys and parameters are active, and the
/// per-trace visibility overrides. Every mutation goes through `&mut self`,
/// so completed ingests are applied by a single writer.
#[derive(Debug, Default)]
pub struct Session {
    config: IngestConfig,
    /// File keys in the order they were first added
    file_keys: Vec<String>,
    uploaded: HashMap<String, Vec<FileSource>>,
    versions: HashMap<String, Vec<FileVersion>>,
    active_keys: Vec<String>,
    selected_params: Vec<String>,
    available_params: Vec<String>,
    column_units: HashMap<String, String>,
    visibility: HashMap<String, bool>,
    colors: ColorAssigner,
}

impl Session {
    /// Create an empty session
    pub fn new(config: IngestConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Ingestion settings
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Register file versions
    ///
    /// Only `.out` files are accepted. A version whose name and
    /// modification time are already registered is skipped. Returns the
    /// number of newly registered versions.
    pub fn add_files<I>(&mut self, sources: I) -> usize
    where
        I: IntoIterator<Item = FileSource>,
    {
        let mut added = 0;
        for source in sources {
            if !source.is_out_file() {
                debug!("Ignoring non-.out file {}", source.path.display());
                continue;
            }

            if !self.uploaded.contains_key(&source.key) {
                self.file_keys.push(source.key.clone());
            }
            let entry = self.uploaded.entry(source.key.clone()).or_default();

            if !entry.iter().any(|v| v.modified_ms == source.modified_ms) {
                entry.push(source);
                added += 1;
            }
        }
        added
    }

    /// File keys in the order they were added
    pub fn file_keys(&self) -> &[String] {
        &self.file_keys
    }

    /// Registered versions of a file key
    pub fn sources(&self, key: &str) -> &[FileSource] {
        self.uploaded.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ingested versions of a file key
    pub fn versions(&self, key: &str) -> &[FileVersion] {
        self.versions.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Currently active file keys, in activation order
    pub fn active_file_keys(&self) -> &[String] {
        &self.active_keys
    }

    /// Whether a file key is active
    pub fn is_active(&self, key: &str) -> bool {
        self.active_keys.iter().any(|k| k == key)
    }

    /// Activate or deactivate a file key
    ///
    /// Activating ingests every registered version of the key that was not
    /// ingested yet. Failed versions are left out and returned; the key
    /// stays active either way. Deactivating keeps ingested data around.
    pub fn toggle_file(&mut self, key: &str) -> Vec<IngestError> {
        if let Some(pos) = self.active_keys.iter().position(|k| k == key) {
            self.active_keys.remove(pos);
            return Vec::new();
        }
        self.active_keys.push(key.to_string());

        let pending: Vec<FileSource> = self
            .sources(key)
            .iter()
            .filter(|s| {
                let id = s.source_id();
                !self.versions(key).iter().any(|v| v.source_id == id)
            })
            .cloned()
            .collect();

        let mut errors = Vec::new();
        for result in ingest_all(&pending, &self.config) {
            match result {
                Ok(version) => self.register_version(version),
                Err(e) => errors.push(e),
            }
        }
        errors
    }

    fn register_version(&mut self, version: FileVersion) {
        let entry = self.versions.entry(version.key.clone()).or_default();
        if entry.iter().any(|v| v.source_id == version.source_id) {
            return;
        }

        for name in &version.headers {
            if !self.available_params.contains(name) {
                self.available_params.push(name.clone());
            }
        }
        self.column_units
            .insert(crate::table::TIME_HEADER.to_string(), version.time_unit.clone());
        self.column_units
            .extend(version.units.iter().map(|(k, v)| (k.clone(), v.clone())));

        info!("Registered {} under {}", version.source_id, version.key);
        entry.push(version);
    }

    /// Select or deselect a parameter
    pub fn toggle_param(&mut self, name: &str) {
        match self.selected_params.iter().position(|p| p == name) {
            Some(pos) => {
                self.selected_params.remove(pos);
            }
            None => self.selected_params.push(name.to_string()),
        }
    }

    /// Selected parameters, in selection order
    pub fn selected_parameters(&self) -> &[String] {
        &self.selected_params
    }

    /// Union of the value columns of every ingested version, in first-seen order
    pub fn available_parameters(&self) -> &[String] {
        &self.available_params
    }

    /// Units of every known column; later ingests win on conflicts
    pub fn column_units(&self) -> &HashMap<String, String> {
        &self.column_units
    }

    /// Record a visibility change from the chart legend
    pub fn on_legend_toggle(&mut self, trace_id: &str, visible: bool) {
        self.visibility.insert(trace_id.to_string(), visible);
    }

    /// Stacks for the selected parameters over the active file keys
    ///
    /// Traces are visible unless a legend toggle said otherwise.
    pub fn stacks(&mut self) -> Vec<Stack> {
        let mut stacks = assemble_stacks(
            &self.active_keys,
            &self.selected_params,
            &self.versions,
            &mut self.colors,
        );
        for trace in stacks.iter_mut().flat_map(|s| s.traces.iter_mut()) {
            if let Some(&visible) = self.visibility.get(&trace.id) {
                trace.visible = visible;
            }
        }
        stacks
    }

    /// File keys matching a wildcard search
    pub fn filter_file_keys(&self, pattern: &str) -> Vec<String> {
        filter_names(&self.file_keys, pattern)
    }

    /// Available parameters matching a wildcard search
    pub fn filter_parameters(&self, pattern: &str) -> Vec<String> {
        filter_names(&self.available_params, pattern)
    }
}
