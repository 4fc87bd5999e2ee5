//! Core types for the Rime crystal-growth simulation.
//!
//! This is the leaf crate with zero dependencies. It defines the vocabulary
//! shared by the lattice and engine crates: lattice cell coordinates, the
//! melt/crystal phase of a cell, and the step counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod id;
pub mod phase;

pub use cell::Cell;
pub use id::StepId;
pub use phase::Phase;
