//! Data structures describing a crystal structure and its simulation-box form.
//!
//! - [`lattice`] - The scaled basis vectors of the periodic cell
//! - [`group`] - Per-type atom groups and the coordinate mode they are expressed in
//! - [`structure`] - The complete parsed structure tying both together
//! - [`cell`] - The derived lower-triangular simulation box
//! - [`projected`] - Atoms positioned for output, with their global indices

pub mod cell;
pub mod group;
pub mod lattice;
pub mod projected;
pub mod structure;
