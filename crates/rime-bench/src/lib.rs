//! Benchmark profiles and utilities for the Rime crystal-growth simulation.
//!
//! Provides pre-built engine profiles shared by the Criterion benches:
//!
//! - [`reference_engine`]: 64x64 square lattice (4,096 cells)
//! - [`stress_engine`]: 200x200 square lattice (40,000 cells)
//! - [`reference_hex_engine`] / [`reference_tri_engine`]: 64x64 variants on
//!   the other two backends

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rime_engine::{EngineConfig, GrowthParams, HexEngine, SquareEngine, TriEngine};
use rime_lattice::{HexLattice, SquareLattice, TriLattice};

/// Growth tunables shared by every benchmark profile.
///
/// Melting point 0, threshold -1 with 0.4 anisotropy, 5 relaxation passes
/// per step. Matches the interactive defaults so bench numbers track what
/// users actually run.
pub fn reference_params() -> GrowthParams {
    GrowthParams {
        t_m: 0.0,
        base_growth_threshold: -1.0,
        anisotropy_factor: 0.4,
        relax_iterations: 5,
    }
}

fn reference_config(seed: u64) -> EngineConfig {
    EngineConfig {
        t_infty: -10.0,
        params: reference_params(),
        seed,
    }
}

/// Build the reference profile: 64x64 square lattice (4,096 cells).
pub fn reference_engine(seed: u64) -> SquareEngine {
    let lattice = SquareLattice::new(64, 64, 10.0).unwrap();
    SquareEngine::new(lattice, reference_config(seed)).unwrap()
}

/// Build the stress profile: 200x200 square lattice (40,000 cells).
///
/// Same tunables as [`reference_engine`] at ~10x the cell count.
pub fn stress_engine(seed: u64) -> SquareEngine {
    let lattice = SquareLattice::new(200, 200, 10.0).unwrap();
    SquareEngine::new(lattice, reference_config(seed)).unwrap()
}

/// Build the reference profile on the hexagonal backend (6 neighbours).
pub fn reference_hex_engine(seed: u64) -> HexEngine {
    let lattice = HexLattice::new(64, 64, 10.0).unwrap();
    HexEngine::new(lattice, reference_config(seed)).unwrap()
}

/// Build the reference profile on the triangular backend (3 neighbours).
pub fn reference_tri_engine(seed: u64) -> TriEngine {
    let lattice = TriLattice::new(64, 64, 10.0).unwrap();
    TriEngine::new(lattice, reference_config(seed)).unwrap()
}
