//! # poscar2data
//!
//! Converts VASP POSCAR crystal structures into LAMMPS `atomic`-style data files.
//!
//! The lattice basis is reduced to an equivalent lower-triangular simulation box
//! (three lengths and three tilt factors) and every atom is positioned for output.
//! The whole conversion is a pipeline of immutable values:
//! parse → decompose → project → serialize.
//!
//! - **[`core`]** - Stateless data models and the file formats.
//! - **[`engine`]** - The decomposition and projection algorithms, configuration,
//!   progress events and errors.
//! - **[`workflows`]** - The public entry points: [`convert`] for in-memory text,
//!   single-file conversion, and batch processing of a directory.
//!
//! ```
//! let poscar = "cube\n1.0\n1 0 0\n0 1 0\n0 0 1\nX\n1\nDirect\n0.25 0.25 0.25\n";
//! let data = poscar2data::convert(poscar).unwrap();
//! assert!(data.contains("1 1 0.2500000000000000 0.2500000000000000 0.2500000000000000"));
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use workflows::convert::convert;
