//! Lattice topologies for the Rime crystal-growth simulation.
//!
//! This crate defines the [`Lattice`] trait, the topology-plus-geometry
//! abstraction the engine grows crystals on, along with the three concrete
//! backends and the periodic boundary arithmetic they share.
//!
//! # Backends
//!
//! - [`HexLattice`]: pointy-top hexagons, 6 neighbours per cell
//! - [`TriLattice`]: alternating up/down triangles, 3 neighbours per cell
//! - [`SquareLattice`]: von Neumann squares, 4 neighbours per cell
//!
//! All three wrap both axes (periodic boundary): every cell has the full
//! neighbour count, and a growth front walking off one edge continues from
//! the opposite edge.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hex;
pub mod lattice;
pub mod periodic;
pub mod square;
pub mod tri;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LatticeError;
pub use hex::HexLattice;
pub use lattice::{Lattice, NeighbourList, VertexList, MAX_EXTENT, MIN_EXTENT};
pub use square::SquareLattice;
pub use tri::TriLattice;
