//! Rime: faceted crystal growth on periodic lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Rime sub-crates. For most users, adding `rime` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rime::prelude::*;
//!
//! // A 12x12 hexagonal lattice with radius-8 cells.
//! let lattice = HexLattice::new(12, 12, 8.0).unwrap();
//! let mut engine = CrystalEngine::new(lattice, EngineConfig::default()).unwrap();
//!
//! // The melt starts with the three-cell seed cluster frozen.
//! assert_eq!(engine.phase().crystal_count(), 3);
//!
//! // Drive the simulation; each step relaxes the temperature field and
//! // runs one interface growth pass.
//! for _ in 0..10 {
//!     let metrics = engine.step();
//!     assert!(metrics.frozen_cells <= metrics.interface_cells);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rime-core` | Cells, phases, step IDs |
//! | [`lattice`] | `rime-lattice` | The `Lattice` trait, the three backends, periodic wrapping |
//! | [`engine`] | `rime-engine` | The growth engine, configuration, fields, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`rime-core`).
///
/// [`types::Cell`] coordinates, the [`types::Phase`] enum, and the
/// [`types::StepId`] counter.
pub use rime_core as types;

/// Lattice topologies and geometry (`rime-lattice`).
///
/// Provides the [`lattice::Lattice`] trait and concrete backends:
/// [`lattice::HexLattice`], [`lattice::TriLattice`], and
/// [`lattice::SquareLattice`], plus the periodic coordinate wrap in
/// [`lattice::periodic`].
pub use rime_lattice as lattice;

/// The crystal-growth engine (`rime-engine`).
///
/// [`engine::CrystalEngine`] owns the phase and temperature fields and
/// advances them one [`engine::CrystalEngine::step`] at a time.
pub use rime_engine as engine;

/// Common imports for typical Rime usage.
///
/// ```rust
/// use rime::prelude::*;
/// ```
///
/// This imports the engine and its configuration, the three lattice
/// backends with their shared trait, and the core cell types.
pub mod prelude {
    // Core types
    pub use rime_core::{Cell, Phase, StepId};

    // Lattices
    pub use rime_lattice::{HexLattice, Lattice, LatticeError, SquareLattice, TriLattice};

    // Engine
    pub use rime_engine::{
        ConfigError, CrystalEngine, EngineConfig, GrowthParams, HexEngine, SquareEngine,
        StepMetrics, TriEngine,
    };
}
