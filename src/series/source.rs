use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use jwalk::WalkDir;
use log::debug;

use super::IngestError;

/// File name suffix accepted for ingestion (case-insensitive)
pub const OUT_SUFFIX: &str = ".out";

/// One version of a user-selected file
///
/// Files sharing a name are versions of the same file key; a version is
/// identified by its relative path (or name) plus modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    /// File name, used to group versions
    pub key: String,
    /// Path below the selected directory, including the directory name
    pub relative_path: Option<String>,
    /// Location on disk
    pub path: PathBuf,
    /// Modification time in milliseconds since the Unix epoch
    pub modified_ms: i64,
}

impl FileSource {
    /// Describe a file on disk
    ///
    /// When `relative_to` is the directory the file was discovered under,
    /// the relative path is recorded as `<dir name>/<path below dir>`.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        relative_to: Option<&Path>,
    ) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let modified: DateTime<Utc> = std::fs::metadata(path)?.modified()?.into();

        let key = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            key,
            relative_path: relative_to.and_then(|root| relative_name(path, root)),
            path: path.to_path_buf(),
            modified_ms: modified.timestamp_millis(),
        })
    }

    /// Version identity: `{relative path or name}_{mtime ms}`
    pub fn source_id(&self) -> String {
        let name = self.relative_path.as_deref().unwrap_or(&self.key);
        format!("{}_{}", name, self.modified_ms)
    }

    /// Whether the file name carries the `.out` suffix
    pub fn is_out_file(&self) -> bool {
        is_out_name(&self.key)
    }
}

/// Whether `name` ends with `.out`, ignoring case
pub fn is_out_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(OUT_SUFFIX)
}

fn relative_name(path: &Path, root: &Path) -> Option<String> {
    let below = path.strip_prefix(root).ok()?;
    let relative = match root.file_name() {
        Some(dir) => Path::new(dir).join(below),
        None => below.to_path_buf(),
    };
    Some(relative.to_string_lossy().replace('\\', "/"))
}

/// Expand inputs into file sources
///
/// Files are taken as given. Directories are walked recursively in sorted
/// order, skipping hidden entries, and only `.out` files are kept from them.
pub fn discover<I, P>(inputs: I) -> Result<Vec<FileSource>, IngestError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut sources = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if !input.is_dir() {
            sources.push(FileSource::from_path(input, None)?);
            continue;
        }

        let before = sources.len();
        for entry in WalkDir::new(input).sort(true).skip_hidden(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_out = path
                .file_name()
                .is_some_and(|name| is_out_name(&name.to_string_lossy()));
            if is_out {
                sources.push(FileSource::from_path(&path, Some(input))?);
            }
        }
        debug!(
            "Discovered {} .out files under {}",
            sources.len() - before,
            input.display()
        );
    }

    Ok(sources)
}
