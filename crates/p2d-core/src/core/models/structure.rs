use super::group::{AtomGroup, CoordinateMode};
use super::lattice::Lattice;
use nalgebra::Vector3;

/// A crystal structure as read from a structure file.
///
/// This is the immutable output of parsing: the lattice, the coordinate mode
/// and the ordered atom groups. Nothing downstream mutates it; the derived box
/// and projected atoms are separate values computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// The free-form comment from the first line of the file.
    pub comment: String,
    /// The scaled lattice basis.
    pub lattice: Lattice,
    /// How the raw coordinates of every group are expressed.
    pub mode: CoordinateMode,
    /// The atom groups in declaration order.
    pub groups: Vec<AtomGroup>,
}

impl Structure {
    /// Returns the total number of atoms across all groups.
    pub fn atom_count(&self) -> usize {
        self.groups.iter().map(AtomGroup::len).sum()
    }

    /// Returns the number of atom types, i.e. the number of groups.
    ///
    /// Groups with zero atoms still count as a type.
    pub fn type_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterates over every atom as `(type_id, raw_coordinates)`.
    ///
    /// The iteration order is the global atom order: all atoms of the first
    /// group in file order, then the second group, and so on.
    pub fn atoms(&self) -> impl Iterator<Item = (usize, &Vector3<f64>)> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.coordinates.iter().map(move |c| (group.type_id, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_group_structure() -> Structure {
        Structure {
            comment: "Ti3Al".to_string(),
            lattice: Lattice::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
            mode: CoordinateMode::Fractional,
            groups: vec![
                AtomGroup::new(
                    1,
                    "Ti",
                    vec![
                        Vector3::new(0.0, 0.0, 0.0),
                        Vector3::new(0.5, 0.5, 0.0),
                        Vector3::new(0.5, 0.0, 0.5),
                    ],
                ),
                AtomGroup::new(2, "Al", vec![Vector3::new(0.0, 0.5, 0.5)]),
            ],
        }
    }

    #[test]
    fn counts_atoms_and_types() {
        let structure = two_group_structure();
        assert_eq!(structure.atom_count(), 4);
        assert_eq!(structure.type_count(), 2);
    }

    #[test]
    fn atoms_are_flattened_in_declaration_order() {
        let structure = two_group_structure();
        let types: Vec<usize> = structure.atoms().map(|(t, _)| t).collect();
        assert_eq!(types, vec![1, 1, 1, 2]);

        let last = structure.atoms().last().map(|(_, c)| *c);
        assert_eq!(last, Some(Vector3::new(0.0, 0.5, 0.5)));
    }
}
