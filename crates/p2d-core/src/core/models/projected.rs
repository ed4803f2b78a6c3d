use super::cell::TriangularBox;
use nalgebra::Point3;

/// An atom positioned for output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedAtom {
    /// The 1-based global index, stable across groups in declaration order.
    pub index: usize,
    /// The 1-based atom type number of the originating group.
    pub type_id: usize,
    /// The output position.
    pub position: Point3<f64>,
}

/// Everything the data-file writer needs: the box and the positioned atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedStructure {
    pub cell: TriangularBox,
    pub type_count: usize,
    pub atoms: Vec<ProjectedAtom>,
}

impl ProjectedStructure {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}
