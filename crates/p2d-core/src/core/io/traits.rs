use crate::core::models::projected::ProjectedStructure;
use crate::core::models::structure::Structure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Defines the interface for reading crystal structure file formats.
///
/// Implementors handle format-specific parsing and produce an immutable
/// [`Structure`].
pub trait StructureFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a structure from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed structure.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error>;

    /// Reads a structure from in-memory text.
    ///
    /// # Arguments
    ///
    /// * `text` - The complete file content.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    fn read_from_str(text: &str) -> Result<Structure, Self::Error> {
        let mut bytes = text.as_bytes();
        Self::read_from(&mut bytes)
    }

    /// Reads a structure from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Structure, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Defines the interface for writing simulation data file formats.
pub trait DataFile {
    /// Format-specific rendering options.
    type Options;

    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a projected structure to a writer.
    ///
    /// # Arguments
    ///
    /// * `structure` - The box and atoms to write.
    /// * `options` - Format-specific rendering options.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        structure: &ProjectedStructure,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a projected structure to a file path atomically.
    ///
    /// The content is first written to a temporary file in the destination
    /// directory and renamed over `path` only once it is complete, so a failed
    /// write never leaves a truncated destination behind.
    ///
    /// # Arguments
    ///
    /// * `structure` - The box and atoms to write.
    /// * `options` - Format-specific rendering options.
    /// * `path` - The destination path.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created, written, or
    /// moved into place.
    fn write_to_path<P: AsRef<Path>>(
        structure: &ProjectedStructure,
        options: &Self::Options,
        path: P,
    ) -> Result<(), Self::Error> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            Self::write_to(structure, options, &mut writer)?;
            writer.flush()?;
        }
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
