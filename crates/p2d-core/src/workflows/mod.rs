//! # Workflows Module
//!
//! The top-level entry points of the library.
//!
//! - **Conversion** ([`convert`]) - The pure `text -> text` pipeline
//!   (parse, decompose, project, serialize) and its single-file counterpart
//!   with atomic output.
//! - **Batch** ([`batch`]) - Directory scanning by file-name suffix, output
//!   naming, and independent conversion of every match, optionally in parallel.

pub mod batch;
pub mod convert;
