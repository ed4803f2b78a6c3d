use poscar2data::core::io::lammps::{DEFAULT_HEADER, DEFAULT_PRECISION};
use poscar2data::engine::config::{DEFAULT_EXTENSION, DEFAULT_SUFFIX};
use poscar2data::engine::project::ProjectionFrame;

pub struct DefaultsConfig {
    pub suffix: String,
    pub extension: String,
    pub header: String,
    pub precision: usize,
    pub frame: ProjectionFrame,
    pub parallel: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            header: DEFAULT_HEADER.to_string(),
            precision: DEFAULT_PRECISION,
            frame: ProjectionFrame::Basis,
            parallel: false,
        }
    }
}
