use super::error::GeometryError;
use crate::core::models::cell::TriangularBox;
use crate::core::models::group::CoordinateMode;
use crate::core::models::projected::{ProjectedAtom, ProjectedStructure};
use crate::core::models::structure::Structure;
use nalgebra::{Matrix3, Point3};
use serde::Deserialize;

/// Selects the frame in which output positions are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionFrame {
    /// Fractional coordinates are multiplied by the original basis; absolute
    /// coordinates pass through unchanged.
    #[default]
    Basis,
    /// Positions are additionally rotated into the triangular box's own frame,
    /// so that fractional `(1, 0, 0)` lands on `(lx, 0, 0)`.
    Box,
}

fn box_frame_transform(
    structure: &Structure,
    cell: &TriangularBox,
) -> Result<Matrix3<f64>, GeometryError> {
    let to_fractional = structure
        .lattice
        .fractional_matrix()
        .ok_or(GeometryError::SingularBasis)?;
    Ok(cell.matrix().transpose() * to_fractional)
}

/// Positions every atom of `structure` for output.
///
/// Atoms are numbered from 1 in global order: the first group's atoms in file
/// order, then the next group's, and so on. No wrapping or clamping is applied.
///
/// The fractional-to-absolute step always uses the structure's original basis
/// matrix; `cell` only sizes the emitted box (and, for [`ProjectionFrame::Box`],
/// defines the target frame).
///
/// # Errors
///
/// Returns [`GeometryError::SingularBasis`] if the box frame is requested for a
/// basis that cannot be inverted.
pub fn project(
    structure: &Structure,
    cell: &TriangularBox,
    frame: ProjectionFrame,
) -> Result<ProjectedStructure, GeometryError> {
    let reframe = match frame {
        ProjectionFrame::Basis => None,
        ProjectionFrame::Box => Some(box_frame_transform(structure, cell)?),
    };

    let atoms = structure
        .atoms()
        .enumerate()
        .map(|(i, (type_id, raw))| {
            let absolute = match structure.mode {
                CoordinateMode::Fractional => structure.lattice.to_cartesian(raw),
                CoordinateMode::Absolute => *raw,
            };
            let position = match &reframe {
                Some(transform) => transform * absolute,
                None => absolute,
            };
            ProjectedAtom {
                index: i + 1,
                type_id,
                position: Point3::from(position),
            }
        })
        .collect();

    Ok(ProjectedStructure {
        cell: *cell,
        type_count: structure.type_count(),
        atoms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::group::AtomGroup;
    use crate::core::models::lattice::Lattice;
    use crate::engine::decompose::decompose;
    use nalgebra::Vector3;

    fn structure(lattice: Lattice, mode: CoordinateMode, groups: Vec<AtomGroup>) -> Structure {
        Structure {
            comment: String::new(),
            lattice,
            mode,
            groups,
        }
    }

    fn cubic(edge: f64) -> Lattice {
        Lattice::from_rows([[edge, 0.0, 0.0], [0.0, edge, 0.0], [0.0, 0.0, edge]])
    }

    #[test]
    fn fractional_center_of_doubled_cube() {
        let s = structure(
            cubic(2.0),
            CoordinateMode::Fractional,
            vec![AtomGroup::new(1, "X", vec![Vector3::new(0.5, 0.5, 0.5)])],
        );
        let cell = decompose(&s.lattice).unwrap();
        let projected = project(&s, &cell, ProjectionFrame::Basis).unwrap();

        assert_eq!(projected.atoms[0].position, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn absolute_coordinates_pass_through_unchanged() {
        let raw = Vector3::new(7.5, -1.25, 30.0);
        let s = structure(
            Lattice::from_rows([[3.0, 0.0, 0.0], [1.0, 3.0, 0.0], [0.5, 0.5, 3.0]]),
            CoordinateMode::Absolute,
            vec![AtomGroup::new(1, "X", vec![raw])],
        );
        let cell = decompose(&s.lattice).unwrap();
        let projected = project(&s, &cell, ProjectionFrame::Basis).unwrap();

        assert_eq!(projected.atoms[0].position, Point3::from(raw));
    }

    #[test]
    fn indices_are_global_and_types_follow_groups() {
        let s = structure(
            cubic(1.0),
            CoordinateMode::Fractional,
            vec![
                AtomGroup::new(1, "Ti", vec![Vector3::zeros(), Vector3::repeat(0.5)]),
                AtomGroup::new(2, "Al", Vec::new()),
                AtomGroup::new(3, "O", vec![Vector3::repeat(0.25)]),
            ],
        );
        let cell = decompose(&s.lattice).unwrap();
        let projected = project(&s, &cell, ProjectionFrame::Basis).unwrap();

        let ids: Vec<(usize, usize)> = projected
            .atoms
            .iter()
            .map(|a| (a.index, a.type_id))
            .collect();
        assert_eq!(ids, vec![(1, 1), (2, 1), (3, 3)]);
        assert_eq!(projected.type_count, 3);
        assert_eq!(projected.atom_count(), s.atom_count());
    }

    #[test]
    fn basis_frame_keeps_original_orientation() {
        let lattice = Lattice::from_rows([[0.0, 2.0, 0.0], [-2.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
        let s = structure(
            lattice,
            CoordinateMode::Fractional,
            vec![AtomGroup::new(1, "X", vec![Vector3::new(1.0, 0.0, 0.0)])],
        );
        let cell = decompose(&s.lattice).unwrap();
        let projected = project(&s, &cell, ProjectionFrame::Basis).unwrap();

        assert!((projected.atoms[0].position - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn box_frame_maps_basis_vectors_onto_box_edges() {
        let lattice = Lattice::from_rows([[3.1, 0.4, -0.2], [0.9, 2.8, 0.3], [-0.6, 0.7, 4.2]]);
        let s = structure(
            lattice,
            CoordinateMode::Fractional,
            vec![AtomGroup::new(
                1,
                "X",
                vec![
                    Vector3::new(1.0, 0.0, 0.0),
                    Vector3::new(0.0, 1.0, 0.0),
                    Vector3::new(0.0, 0.0, 1.0),
                ],
            )],
        );
        let cell = decompose(&s.lattice).unwrap();
        let projected = project(&s, &cell, ProjectionFrame::Box).unwrap();
        let edges = cell.matrix();

        for (atom, row) in projected.atoms.iter().zip(0..3) {
            let expected = Point3::from(edges.row(row).transpose());
            assert!((atom.position - expected).norm() < 1e-10);
        }
    }

    #[test]
    fn box_frame_of_absolute_input_matches_fractional_input() {
        let lattice = Lattice::from_rows([[3.0, 0.0, 0.0], [1.0, 2.5, 0.5], [0.2, 0.3, 4.0]]);
        let frac = Vector3::new(0.2, 0.6, 0.9);
        let cart = lattice.to_cartesian(&frac);

        let from_frac = structure(
            lattice,
            CoordinateMode::Fractional,
            vec![AtomGroup::new(1, "X", vec![frac])],
        );
        let from_cart = structure(
            lattice,
            CoordinateMode::Absolute,
            vec![AtomGroup::new(1, "X", vec![cart])],
        );
        let cell = decompose(&lattice).unwrap();

        let a = project(&from_frac, &cell, ProjectionFrame::Box).unwrap();
        let b = project(&from_cart, &cell, ProjectionFrame::Box).unwrap();
        assert!((a.atoms[0].position - b.atoms[0].position).norm() < 1e-10);
    }
}
