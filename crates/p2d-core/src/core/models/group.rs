use nalgebra::Vector3;
use std::fmt;
use std::str::FromStr;

/// Describes how the raw coordinate triples of a structure are expressed.
///
/// The mode is read once from the structure header and applies uniformly to
/// every atom group in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateMode {
    /// Coordinates are linear combinations of the lattice basis vectors.
    Fractional,
    /// Coordinates are already absolute, in the lattice's linear units.
    Absolute,
}

impl CoordinateMode {
    /// Returns the canonical header keyword for this mode.
    pub fn keyword(&self) -> &'static str {
        match self {
            CoordinateMode::Fractional => "Direct",
            CoordinateMode::Absolute => "Cartesian",
        }
    }
}

impl fmt::Display for CoordinateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for CoordinateMode {
    type Err = ();

    /// Parses a coordinate mode keyword.
    ///
    /// Only the exact spellings `Direct`, `D`, `direct` (fractional) and
    /// `Cartesian`, `C`, `cartesian` (absolute) are accepted; surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `()` if the keyword is not one of the accepted spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Direct" | "D" | "direct" => Ok(CoordinateMode::Fractional),
            "Cartesian" | "C" | "cartesian" => Ok(CoordinateMode::Absolute),
            _ => Err(()),
        }
    }
}

/// A contiguous block of atoms sharing one atom type.
///
/// Groups appear in the same order as the per-type counts of the structure
/// header, and that order alone determines the emitted type number: the first
/// group is type 1, the second type 2, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomGroup {
    /// The 1-based ordinal type number of this group.
    pub type_id: usize,
    /// The label declared for this type in the header (e.g. an element symbol).
    pub label: String,
    /// Raw coordinate triples, in file order, interpreted per [`CoordinateMode`].
    pub coordinates: Vec<Vector3<f64>>,
}

impl AtomGroup {
    /// Creates a new atom group.
    ///
    /// # Arguments
    ///
    /// * `type_id` - The 1-based type number.
    /// * `label` - The header label for this type.
    /// * `coordinates` - The raw coordinate triples belonging to this type.
    pub fn new(type_id: usize, label: &str, coordinates: Vec<Vector3<f64>>) -> Self {
        Self {
            type_id,
            label: label.to_string(),
            coordinates,
        }
    }

    /// Returns the number of atoms in this group.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns `true` if the group declares no atoms.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}
