use nalgebra::{Matrix3, Vector3};

/// Represents the periodic cell of a crystal as three basis vectors.
///
/// The basis vectors are stored as the rows of a 3×3 matrix, already multiplied
/// by the scaling factor found in the structure header. Every length derived from
/// a `Lattice` is therefore expressed in the same linear units as the absolute
/// atomic coordinates (typically Angstroms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    /// Row-major basis matrix: row 0 is `a`, row 1 is `b`, row 2 is `c`.
    basis: Matrix3<f64>,
}

impl Lattice {
    /// Creates a lattice from three basis vectors given as rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - The basis vectors `a`, `b` and `c`, in that order.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [a, b, c] = rows;
        Self {
            basis: Matrix3::new(a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2]),
        }
    }

    /// Creates a lattice from unscaled rows and a uniform scaling factor.
    ///
    /// This mirrors the POSCAR header layout, where the basis vectors are
    /// listed in arbitrary units and multiplied by the factor on line 1.
    ///
    /// # Arguments
    ///
    /// * `scale` - The scalar applied to every component of every basis vector.
    /// * `rows` - The unscaled basis vectors `a`, `b` and `c`.
    pub fn from_scaled_rows(scale: f64, rows: [[f64; 3]; 3]) -> Self {
        let mut lattice = Self::from_rows(rows);
        lattice.basis *= scale;
        lattice
    }

    /// Returns the row-major basis matrix.
    pub fn basis(&self) -> &Matrix3<f64> {
        &self.basis
    }

    /// Returns the first basis vector `a`.
    pub fn a(&self) -> Vector3<f64> {
        self.basis.row(0).transpose()
    }

    /// Returns the second basis vector `b`.
    pub fn b(&self) -> Vector3<f64> {
        self.basis.row(1).transpose()
    }

    /// Returns the third basis vector `c`.
    pub fn c(&self) -> Vector3<f64> {
        self.basis.row(2).transpose()
    }

    /// Returns the signed determinant of the basis matrix.
    ///
    /// A negative value indicates a left-handed basis.
    pub fn determinant(&self) -> f64 {
        self.basis.determinant()
    }

    /// Returns the cell volume, `|det(basis)|`.
    pub fn volume(&self) -> f64 {
        self.determinant().abs()
    }

    /// Converts a fractional coordinate into an absolute position.
    ///
    /// The fractional triple is treated as a row vector and right-multiplied by
    /// the basis matrix, i.e. `f · basis = f₀·a + f₁·b + f₂·c`.
    ///
    /// # Arguments
    ///
    /// * `fractional` - Coordinates relative to the basis vectors.
    ///
    /// # Return
    ///
    /// Returns the absolute position in the lattice's linear units.
    pub fn to_cartesian(&self, fractional: &Vector3<f64>) -> Vector3<f64> {
        self.basis.transpose() * fractional
    }

    /// Converts an absolute position into fractional coordinates.
    ///
    /// # Arguments
    ///
    /// * `cartesian` - An absolute position in the lattice's linear units.
    ///
    /// # Return
    ///
    /// Returns `Some` with the fractional coordinates, or `None` if the basis
    /// is singular and cannot be inverted.
    pub fn to_fractional(&self, cartesian: &Vector3<f64>) -> Option<Vector3<f64>> {
        self.fractional_matrix().map(|inverse| inverse * cartesian)
    }

    /// Returns the matrix mapping absolute positions to fractional coordinates,
    /// the inverse of the transposed basis. `None` for a singular basis.
    pub fn fractional_matrix(&self) -> Option<Matrix3<f64>> {
        self.basis.transpose().try_inverse()
    }
}
