use crate::core::io::traits::DataFile;
use crate::core::models::projected::ProjectedStructure;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

pub const DEFAULT_HEADER: &str = "LAMMPS data file";
pub const DEFAULT_PRECISION: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Text placed after `# ` on the first line.
    pub header: String,
    /// Number of decimal digits for every floating-point value.
    pub precision: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Error)]
pub enum LammpsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Renders a projected structure as a LAMMPS `atomic`-style data file.
///
/// Box lower bounds are always the literal `0.0`; no `Masses` section is
/// emitted.
pub struct LammpsData<'a> {
    structure: &'a ProjectedStructure,
    options: &'a WriteOptions,
}

impl<'a> LammpsData<'a> {
    pub fn new(structure: &'a ProjectedStructure, options: &'a WriteOptions) -> Self {
        Self { structure, options }
    }
}

impl fmt::Display for LammpsData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.options.precision;
        let cell = &self.structure.cell;

        writeln!(f, "# {}", self.options.header)?;
        writeln!(f)?;
        writeln!(f, "{} atoms", self.structure.atom_count())?;
        writeln!(f, "{} atom types", self.structure.type_count)?;
        writeln!(f)?;
        writeln!(f, "0.0 {:.*} xlo xhi", p, cell.lx)?;
        writeln!(f, "0.0 {:.*} ylo yhi", p, cell.ly)?;
        writeln!(f, "0.0 {:.*} zlo zhi", p, cell.lz)?;
        writeln!(
            f,
            "{:.*} {:.*} {:.*} xy xz yz",
            p, cell.xy, p, cell.xz, p, cell.yz
        )?;
        writeln!(f)?;
        writeln!(f, "Atoms # atomic")?;
        writeln!(f)?;

        for atom in &self.structure.atoms {
            writeln!(
                f,
                "{} {} {:.*} {:.*} {:.*}",
                atom.index,
                atom.type_id,
                p,
                atom.position.x,
                p,
                atom.position.y,
                p,
                atom.position.z
            )?;
        }
        Ok(())
    }
}

pub struct LammpsDataFile;

impl DataFile for LammpsDataFile {
    type Options = WriteOptions;
    type Error = LammpsError;

    fn write_to(
        structure: &ProjectedStructure,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        write!(writer, "{}", LammpsData::new(structure, options))?;
        Ok(())
    }
}
