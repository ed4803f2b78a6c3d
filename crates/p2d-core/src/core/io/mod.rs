//! Provides input/output functionality for structure and simulation file formats.
//!
//! Readers turn structure files into immutable [`Structure`](crate::core::models::structure::Structure)
//! values; writers render a projected structure into a simulation data file.
//! Destination files are written atomically.

pub mod lammps;
pub mod poscar;
pub mod traits;
