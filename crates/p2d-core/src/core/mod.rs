//! # Core Module
//!
//! This module provides the stateless building blocks of the converter: the data
//! models describing a crystal structure and its simulation-box form, and the file
//! formats used to read and write them.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Lattice, atom groups, parsed structures, the
//!   lower-triangular box and projected atoms
//! - **File I/O** ([`io`]) - The POSCAR reader and the LAMMPS data writer, behind
//!   format-agnostic traits
//!
//! Nothing in this module holds state between calls; the algorithms that derive
//! one value from another live in [`crate::engine`].

pub mod io;
pub mod models;
