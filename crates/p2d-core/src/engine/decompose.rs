use super::error::GeometryError;
use crate::core::models::cell::TriangularBox;
use crate::core::models::lattice::Lattice;
use tracing::{trace, warn};

/// Radicands below this fraction of the corresponding squared edge length are
/// treated as zero.
const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Reduces a lattice basis to an equivalent lower-triangular box.
///
/// With `a`, `b`, `c` the scaled basis vectors:
///
/// ```text
/// lx = |a|
/// xy = (a·b) / lx
/// xz = (a·c) / lx
/// ly = sqrt(|b|² - xy²)
/// yz = (b·c - xy·xz) / ly
/// lz = sqrt(|c|² - xz² - yz²)
/// ```
///
/// The result preserves all edge lengths, inter-edge angles and the cell volume.
/// A left-handed basis still yields a real box (the handedness is lost) and is
/// only reported through a warning.
///
/// # Errors
///
/// Returns [`GeometryError`] when the basis is degenerate: `a` has no length, `b`
/// is collinear with `a`, or `c` is coplanar with `a` and `b`.
pub fn decompose(lattice: &Lattice) -> Result<TriangularBox, GeometryError> {
    let (a, b, c) = (lattice.a(), lattice.b(), lattice.c());

    let lx = a.norm();
    if !lx.is_finite() || lx <= 0.0 {
        return Err(GeometryError::DegenerateA { length: lx });
    }
    let xy = a.dot(&b) / lx;
    let xz = a.dot(&c) / lx;

    let ly_squared = b.norm().powi(2) - xy.powi(2);
    if ly_squared.is_nan() || ly_squared <= DEGENERACY_TOLERANCE * b.norm_squared() {
        return Err(GeometryError::CollinearAB { ly_squared });
    }
    let ly = ly_squared.sqrt();
    let yz = (b.dot(&c) - xy * xz) / ly;

    let lz_squared = c.norm().powi(2) - xz.powi(2) - yz.powi(2);
    if lz_squared.is_nan() || lz_squared <= DEGENERACY_TOLERANCE * c.norm_squared() {
        return Err(GeometryError::CoplanarC { lz_squared });
    }
    let lz = lz_squared.sqrt();

    if lattice.determinant() < 0.0 {
        warn!("Lattice basis is left-handed; the triangular box is its right-handed equivalent.");
    }

    let cell = TriangularBox {
        lx,
        ly,
        lz,
        xy,
        xz,
        yz,
    };
    trace!("Decomposed lattice into {:?}", cell);
    Ok(cell)
}
