use crate::core::io::lammps::LammpsError;
use crate::core::io::poscar::PoscarError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Lattice vector a has zero or non-finite length ({length})")]
    DegenerateA { length: f64 },

    #[error("Lattice vectors a and b are collinear (ly^2 = {ly_squared})")]
    CollinearAB { ly_squared: f64 },

    #[error("Lattice vector c lies in the plane of a and b (lz^2 = {lz_squared})")]
    CoplanarC { lz_squared: f64 },

    #[error("Lattice basis is singular and cannot be inverted")]
    SingularBasis,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to parse structure: {0}")]
    Parse(#[from] PoscarError),

    #[error("Invalid lattice geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Failed to write data file: {0}")]
    Write(#[from] LammpsError),

    #[error("I/O error on '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Short category name used in batch summaries.
    pub fn category(&self) -> &'static str {
        match self {
            ConvertError::Parse(PoscarError::Io(_)) => "io",
            ConvertError::Parse(_) => "parse",
            ConvertError::Geometry(_) => "geometry",
            ConvertError::Write(_) | ConvertError::Io { .. } => "io",
        }
    }
}
