use nalgebra::Matrix3;

/// A lower-triangular simulation box anchored at the origin.
///
/// The box spans `[0, lx] × [0, ly] × [0, lz]` and is sheared by the three tilt
/// factors. Its edge vectors, written as rows, are
///
/// ```text
/// A = (lx,  0,  0)
/// B = (xy, ly,  0)
/// C = (xz, yz, lz)
/// ```
///
/// which is the restricted triclinic convention expected by simulation engines
/// that require an axis-aligned bounding box with shear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularBox {
    /// Length of the box along x.
    pub lx: f64,
    /// Extent of the box along y.
    pub ly: f64,
    /// Extent of the box along z.
    pub lz: f64,
    /// Tilt of the second edge along x.
    pub xy: f64,
    /// Tilt of the third edge along x.
    pub xz: f64,
    /// Tilt of the third edge along y.
    pub yz: f64,
}

impl TriangularBox {
    /// Returns the box volume, `lx · ly · lz`.
    pub fn volume(&self) -> f64 {
        self.lx * self.ly * self.lz
    }

    /// Returns the edge vectors as rows of a lower-triangular matrix.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.lx, 0.0, 0.0, //
            self.xy, self.ly, 0.0, //
            self.xz, self.yz, self.lz,
        )
    }
}
