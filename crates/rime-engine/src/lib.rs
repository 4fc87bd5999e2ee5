//! Simulation engine for the Rime crystal-growth workspace.
//!
//! This crate couples a temperature field relaxing towards an undercooled
//! ambient with a phase field freezing along an anisotropic interface, on
//! any [`rime_lattice::Lattice`] backend. [`CrystalEngine`] owns all state
//! and advances it one synchronous [`step()`](CrystalEngine::step) at a
//! time; the caller owns the drive loop and any rendering.
//!
//! # Step anatomy
//!
//! 1. Jacobi relaxation of the temperature field, `relax_iterations` times:
//!    crystal cells pin to the melting point, melt cells take the mean of
//!    their neighbours' previous temperatures.
//! 2. One interface growth pass: collect every melt cell touching crystal,
//!    shuffle, then freeze those warmer than the direction-dependent
//!    threshold.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod growth;
pub mod metrics;
pub mod neighbourhood;
pub mod phase_field;
pub mod temperature;

pub use config::{ConfigError, EngineConfig, GrowthParams};
pub use engine::{CrystalEngine, HexEngine, SquareEngine, TriEngine};
pub use growth::GrowthRule;
pub use metrics::StepMetrics;
pub use neighbourhood::NeighbourTable;
pub use phase_field::PhaseField;
pub use temperature::TemperatureField;
