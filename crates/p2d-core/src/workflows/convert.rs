use crate::core::io::lammps::{LammpsData, LammpsDataFile};
use crate::core::io::poscar::PoscarFile;
use crate::core::io::traits::{DataFile, StructureFile};
use crate::core::models::cell::TriangularBox;
use crate::core::models::projected::ProjectedStructure;
use crate::core::models::structure::Structure;
use crate::engine::config::ConversionConfig;
use crate::engine::decompose::decompose;
use crate::engine::error::{ConvertError, GeometryError};
use crate::engine::project::{ProjectionFrame, project};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// What a successful file conversion produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionSummary {
    pub atoms: usize,
    pub types: usize,
    pub cell: TriangularBox,
}

fn is_lower_triangular(structure: &Structure) -> bool {
    let basis = structure.lattice.basis();
    basis[(0, 1)] == 0.0 && basis[(0, 2)] == 0.0 && basis[(1, 2)] == 0.0
}

/// Derives the triangular box and positions every atom.
///
/// # Errors
///
/// Returns [`GeometryError`] if the lattice basis is degenerate.
pub fn reproject(
    structure: &Structure,
    frame: ProjectionFrame,
) -> Result<ProjectedStructure, GeometryError> {
    for group in &structure.groups {
        debug!(
            "Type {} '{}': {} atom(s)",
            group.type_id,
            group.label,
            group.len()
        );
    }

    let cell = decompose(&structure.lattice)?;
    debug!("Triangular box: {:?}", cell);

    if frame == ProjectionFrame::Basis && !is_lower_triangular(structure) {
        warn!(
            "Lattice is not in lower-triangular form; {} positions are emitted in the original basis frame.",
            structure.mode
        );
    }
    project(structure, &cell, frame)
}

/// Converts POSCAR text into LAMMPS data text with the default settings.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] for malformed input and
/// [`ConvertError::Geometry`] for a degenerate lattice.
pub fn convert(text: &str) -> Result<String, ConvertError> {
    convert_with(text, &ConversionConfig::default())
}

/// Converts POSCAR text into LAMMPS data text.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] for malformed input and
/// [`ConvertError::Geometry`] for a degenerate lattice.
pub fn convert_with(text: &str, config: &ConversionConfig) -> Result<String, ConvertError> {
    let structure = PoscarFile::read_from_str(text)?;
    let projected = reproject(&structure, config.frame)?;
    Ok(LammpsData::new(&projected, &config.output).to_string())
}

/// Converts one POSCAR file into one LAMMPS data file.
///
/// The destination is written atomically: on any error it is left untouched.
///
/// # Errors
///
/// Returns [`ConvertError`] if the input cannot be read or parsed, the lattice
/// is degenerate, or the destination cannot be written.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
) -> Result<ConversionSummary, ConvertError> {
    debug!("Reading structure from {:?}", input);
    let text = fs::read_to_string(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let structure = PoscarFile::read_from_str(&text)?;
    debug!(
        "Parsed '{}': {} atom(s) in {} type(s), {} coordinates",
        structure.comment,
        structure.atom_count(),
        structure.type_count(),
        structure.mode
    );

    let projected = reproject(&structure, config.frame)?;
    LammpsDataFile::write_to_path(&projected, &config.output, output)?;
    info!(
        "Wrote {} atom(s) to {:?}",
        projected.atom_count(),
        output
    );

    Ok(ConversionSummary {
        atoms: projected.atom_count(),
        types: projected.type_count,
        cell: projected.cell,
    })
}
