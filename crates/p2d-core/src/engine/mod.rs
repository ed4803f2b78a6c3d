//! # Engine Module
//!
//! The algorithms that turn a parsed [`Structure`](crate::core::models::structure::Structure)
//! into a [`ProjectedStructure`](crate::core::models::projected::ProjectedStructure).
//!
//! - [`decompose`] - Reduction of the lattice basis to a lower-triangular box
//! - [`project`] - Placement of every atom in the output frame
//! - [`config`] - Conversion settings and their builder
//! - [`progress`] - Callback-based progress events for batch runs
//! - [`error`] - Geometry and conversion error types
//!
//! Every function here is pure: it takes the previous stage's value by reference
//! and returns a new value.

pub mod config;
pub mod decompose;
pub mod error;
pub mod progress;
pub mod project;
