//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in
//! a config file:
//!
//! ```toml
//! # outplot.toml
//! [downsample]
//! threshold = 2000
//!
//! [ingest]
//! chunk_size = 65536
//! parallel = true
//! ```
//!
//! Command-line flags take precedence over file values, which take
//! precedence over the built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use outplot::series::IngestConfig;

/// Root configuration structure for outplot.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Downsampling settings.
    #[serde(default)]
    pub downsample: DownsampleSection,

    /// File ingestion settings.
    #[serde(default)]
    pub ingest: IngestSection,
}

/// `[downsample]` table.
#[derive(Debug, Default, Deserialize)]
pub struct DownsampleSection {
    /// Point budget per series.
    pub threshold: Option<usize>,
}

/// `[ingest]` table.
#[derive(Debug, Default, Deserialize)]
pub struct IngestSection {
    /// Bytes requested per read.
    pub chunk_size: Option<usize>,

    /// Ingest several files at once.
    pub parallel: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file when given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the ingestion settings, applying a threshold flag on top.
    pub fn ingest_config(&self, threshold: Option<usize>) -> IngestConfig {
        let defaults = IngestConfig::default();
        IngestConfig {
            threshold: threshold
                .or(self.downsample.threshold)
                .unwrap_or(defaults.threshold),
            chunk_size: self.ingest.chunk_size.unwrap_or(defaults.chunk_size),
            parallel: self.ingest.parallel.unwrap_or(defaults.parallel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [downsample]
            threshold = 500

            [ingest]
            chunk_size = 4096
            parallel = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.downsample.threshold, Some(500));
        assert_eq!(config.ingest.chunk_size, Some(4096));
        assert_eq!(config.ingest.parallel, Some(false));

        let ingest = config.ingest_config(None);
        assert_eq!(ingest.threshold, 500);
        assert_eq!(ingest.chunk_size, 4096);
        assert!(!ingest.parallel);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [downsample]
            threshold = 100
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.downsample.threshold, Some(100));
        assert_eq!(config.ingest.chunk_size, None);

        let ingest = config.ingest_config(None);
        assert_eq!(ingest.chunk_size, IngestConfig::default().chunk_size);
    }

    #[test]
    fn test_flag_overrides_file() {
        let config = Config::from_str("[downsample]\nthreshold = 100\n").unwrap();
        assert_eq!(config.ingest_config(Some(42)).threshold, 42);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.downsample.threshold, None);
        assert_eq!(config.ingest_config(None), IngestConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[downsample]\nthreshold = \"many\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outplot.toml");
        std::fs::write(&path, "[ingest]\nparallel = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.ingest.parallel, Some(false));
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
        assert!(Config::load(None).is_ok());
    }
}
