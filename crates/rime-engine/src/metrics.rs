//! Per-step observability counters.
//!
//! [`CrystalEngine::step`](crate::CrystalEngine::step) returns one
//! [`StepMetrics`] per call. The engine never logs or prints; callers that
//! want progress output read these counters and format them however they
//! like (see `examples/quickstart.rs`).

use rime_core::StepId;

/// Counters describing a single completed engine step.
///
/// Returned by value from [`CrystalEngine::step`](crate::CrystalEngine::step);
/// the engine keeps no history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepMetrics {
    /// Step this report describes (`StepId(1)` after the first step).
    pub step: StepId,
    /// Melt cells adjacent to at least one crystal cell when the growth
    /// pass collected its candidates.
    pub interface_cells: usize,
    /// Interface cells that froze during this step's growth pass.
    pub frozen_cells: usize,
    /// Total crystal cells after the step completed.
    pub crystal_cells: usize,
    /// Wall-clock time spent relaxing the temperature field, in microseconds.
    pub relax_us: u64,
    /// Wall-clock time spent in the growth pass, in microseconds.
    pub growth_us: u64,
}
