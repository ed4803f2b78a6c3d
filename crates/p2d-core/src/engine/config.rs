use super::project::ProjectionFrame;
use crate::core::io::lammps::{DEFAULT_HEADER, DEFAULT_PRECISION, WriteOptions};
use thiserror::Error;

pub const DEFAULT_SUFFIX: &str = "-POSCAR";
pub const DEFAULT_EXTENSION: &str = ".lmp";
pub const MAX_PRECISION: usize = 20;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// How input files are recognized and how their outputs are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// File-name ending that marks a structure file, e.g. `-POSCAR`.
    pub suffix: String,
    /// Replacement for the suffix in the output file name, e.g. `.lmp`.
    pub extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionConfig {
    pub discovery: DiscoveryConfig,
    pub output: WriteOptions,
    pub frame: ProjectionFrame,
    pub parallel: bool,
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    suffix: Option<String>,
    extension: Option<String>,
    header: Option<String>,
    precision: Option<usize>,
    frame: Option<ProjectionFrame>,
    parallel: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
    pub fn frame(mut self, frame: ProjectionFrame) -> Self {
        self.frame = Some(frame);
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn build(self) -> Result<ConversionConfig, ConfigError> {
        let suffix = self.suffix.unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
        if suffix.is_empty() || suffix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidParameter {
                name: "suffix",
                reason: format!("'{}' must be a non-empty file-name ending", suffix),
            });
        }

        let extension = self
            .extension
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidParameter {
                name: "extension",
                reason: format!("'{}' must be a non-empty file-name ending", extension),
            });
        }
        if extension == suffix {
            return Err(ConfigError::InvalidParameter {
                name: "extension",
                reason: "must differ from the input suffix".to_string(),
            });
        }

        let header = self.header.unwrap_or_else(|| DEFAULT_HEADER.to_string());
        if header.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidParameter {
                name: "header",
                reason: "must be a single line".to_string(),
            });
        }

        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        if precision == 0 || precision > MAX_PRECISION {
            return Err(ConfigError::InvalidParameter {
                name: "precision",
                reason: format!("{} is outside 1..={}", precision, MAX_PRECISION),
            });
        }

        Ok(ConversionConfig {
            discovery: DiscoveryConfig { suffix, extension },
            output: WriteOptions { header, precision },
            frame: self.frame.unwrap_or_default(),
            parallel: self.parallel.unwrap_or(false),
        })
    }
}
