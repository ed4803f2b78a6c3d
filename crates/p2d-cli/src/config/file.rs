use crate::error::{CliError, Result};
use poscar2data::engine::project::ProjectionFrame;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileDiscoveryConfig {
    pub suffix: Option<String>,
    pub extension: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileOutputConfig {
    pub header: Option<String>,
    pub precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileProjectionConfig {
    pub frame: Option<ProjectionFrame>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileBatchConfig {
    pub parallel: Option<bool>,
}

/// Every value a TOML configuration file may set. Absent keys fall back to
/// the built-in defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub discovery: Option<FileDiscoveryConfig>,
    pub output: Option<FileOutputConfig>,
    pub projection: Option<FileProjectionConfig>,
    pub batch: Option<FileBatchConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_all_sections() {
        let config: FileConfig = toml::from_str(
            r#"
            [discovery]
            suffix = ".vasp"
            extension = ".data"

            [output]
            header = "generated"
            precision = 10

            [projection]
            frame = "box"

            [batch]
            parallel = true
            "#,
        )
        .unwrap();

        let discovery = config.discovery.unwrap();
        assert_eq!(discovery.suffix.as_deref(), Some(".vasp"));
        assert_eq!(discovery.extension.as_deref(), Some(".data"));
        let output = config.output.unwrap();
        assert_eq!(output.header.as_deref(), Some("generated"));
        assert_eq!(output.precision, Some(10));
        assert_eq!(config.projection.unwrap().frame, Some(ProjectionFrame::Box));
        assert_eq!(config.batch.unwrap().parallel, Some(true));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.discovery.is_none());
        assert!(config.output.is_none());
        assert!(config.projection.is_none());
        assert!(config.batch.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected_with_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[output]\ndigits = 4\n").unwrap();

        let err = FileConfig::from_file(&path).unwrap_err();
        match err {
            CliError::FileParsing { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected FileParsing, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = FileConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
