//! The engine proper: state ownership, stepping, and queries.
//!
//! [`CrystalEngine`] is generic over the lattice backend; the
//! [`HexEngine`], [`TriEngine`], and [`SquareEngine`] aliases name the
//! three stock instantiations. Engines share nothing: each exclusively
//! owns its lattice, both fields, the neighbour table, and the RNG, so
//! independent engines can be driven from independent threads.

use std::fmt;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rime_core::{Cell, Phase, StepId};
use rime_lattice::{HexLattice, Lattice, SquareLattice, TriLattice};

use crate::config::{ConfigError, EngineConfig, GrowthParams};
use crate::growth::{growth_pass, GrowthRule};
use crate::metrics::StepMetrics;
use crate::neighbourhood::NeighbourTable;
use crate::phase_field::PhaseField;
use crate::temperature::TemperatureField;

/// Faceted crystal growth in an undercooled melt on a periodic lattice.
///
/// The engine couples a [`TemperatureField`] relaxing towards the ambient
/// with a [`PhaseField`] freezing along the crystal interface. State
/// changes only through [`step`](Self::step), [`set_params`](Self::set_params),
/// and [`reset`](Self::reset); everything else is a read-only query.
///
/// # Examples
///
/// ```
/// use rime_engine::{CrystalEngine, EngineConfig};
/// use rime_lattice::SquareLattice;
///
/// let lattice = SquareLattice::new(16, 16, 10.0)?;
/// let mut engine = CrystalEngine::new(lattice, EngineConfig::default())?;
/// assert_eq!(engine.phase().crystal_count(), 3);
///
/// let metrics = engine.step();
/// assert_eq!(metrics.step.0, 1);
/// assert!(metrics.crystal_cells >= 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct CrystalEngine<L: Lattice> {
    lattice: L,
    table: NeighbourTable,
    phase: PhaseField,
    temperature: TemperatureField,
    params: GrowthParams,
    t_infty: f64,
    seed: u64,
    rng: ChaCha8Rng,
    seed_center: Cell,
    origin: (f64, f64),
    step: StepId,
}

/// [`CrystalEngine`] over a [`HexLattice`].
pub type HexEngine = CrystalEngine<HexLattice>;

/// [`CrystalEngine`] over a [`TriLattice`].
pub type TriEngine = CrystalEngine<TriLattice>;

/// [`CrystalEngine`] over a [`SquareLattice`].
pub type SquareEngine = CrystalEngine<SquareLattice>;

// Compile-time assertion: engines move between threads.
// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<HexEngine>();
        assert_send::<TriEngine>();
        assert_send::<SquareEngine>();
    }
};

impl<L: Lattice> CrystalEngine<L> {
    /// Build an engine over `lattice`, validate `config`, and place the
    /// three-cell seed cluster.
    ///
    /// The temperature field starts at `config.t_infty` everywhere except
    /// the seed cells, which pin to the melting point.
    pub fn new(lattice: L, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = NeighbourTable::build(&lattice);
        let phase = PhaseField::new(lattice.cell_count());
        let temperature = TemperatureField::new(lattice.cell_count(), config.t_infty as f32);
        let seed_center = Cell::new((lattice.width() / 2) as i32, (lattice.height() / 2) as i32);
        let origin = lattice.cell_center(seed_center);

        let mut engine = Self {
            lattice,
            table,
            phase,
            temperature,
            params: config.params,
            t_infty: config.t_infty,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            seed_center,
            origin,
            step: StepId(0),
        };
        engine.place_seed_cluster();
        Ok(engine)
    }

    /// Freeze the center cell plus two of its neighbours, chosen uniformly
    /// without replacement, and pin all three to the melting point.
    fn place_seed_cluster(&mut self) {
        let t_m = self.params.t_m as f32;
        let center_rank = self.lattice.index_of(self.seed_center);
        self.phase.freeze(center_rank);
        self.temperature.set(center_rank, t_m);

        let mut neighbours = self.lattice.neighbours(self.seed_center);
        neighbours.shuffle(&mut self.rng);
        for n in neighbours.iter().take(2) {
            let rank = self.lattice.index_of(*n);
            self.phase.freeze(rank);
            self.temperature.set(rank, t_m);
        }
    }

    /// Advance the simulation by one step.
    ///
    /// Runs `relax_iterations` Jacobi passes over the temperature field,
    /// then one interface growth pass, then increments the step counter.
    /// Always leaves the state fully consistent; `frozen_cells == 0` in the
    /// returned metrics is the natural termination signal for a drive loop.
    pub fn step(&mut self) -> StepMetrics {
        let relax_start = Instant::now();
        let t_m = self.params.t_m as f32;
        for _ in 0..self.params.relax_iterations {
            self.temperature.relax(&self.table, &self.phase, t_m);
        }
        let relax_us = relax_start.elapsed().as_micros() as u64;

        let growth_start = Instant::now();
        let rule = GrowthRule::new(
            self.params.base_growth_threshold,
            self.params.anisotropy_factor,
        );
        let outcome = growth_pass(
            &self.lattice,
            &self.table,
            &mut self.phase,
            &mut self.temperature,
            rule,
            self.origin,
            self.params.t_m,
            &mut self.rng,
        );
        let growth_us = growth_start.elapsed().as_micros() as u64;

        self.step = self.step.next();
        StepMetrics {
            step: self.step,
            interface_cells: outcome.interface_cells,
            frozen_cells: outcome.frozen_cells,
            crystal_cells: self.phase.crystal_count(),
            relax_us,
            growth_us,
        }
    }

    /// Replace the tunable parameters between steps.
    ///
    /// Re-validates against the ambient temperature fixed at construction.
    /// On error the previous parameters stay in effect.
    pub fn set_params(&mut self, params: GrowthParams) -> Result<(), ConfigError> {
        params.validate_with_ambient(self.t_infty)?;
        self.params = params;
        Ok(())
    }

    /// Return the engine to step zero with a fresh seed cluster.
    ///
    /// Restores all-melt phase and uniform ambient temperature, reseeds the
    /// RNG from `seed`, and places a new cluster around the same center
    /// cell. `reset(engine.seed())` reproduces the run from the start.
    pub fn reset(&mut self, seed: u64) {
        self.phase.clear();
        self.temperature.fill(self.t_infty as f32);
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.step = StepId(0);
        self.place_seed_cluster();
    }

    /// The lattice this engine runs on.
    pub fn lattice(&self) -> &L {
        &self.lattice
    }

    /// Read-only phase field in canonical order.
    pub fn phase(&self) -> &PhaseField {
        &self.phase
    }

    /// Read-only temperature field in canonical order.
    pub fn temperature(&self) -> &TemperatureField {
        &self.temperature
    }

    /// Phase of `cell`.
    pub fn phase_at(&self, cell: Cell) -> Phase {
        self.phase.get(self.lattice.index_of(cell))
    }

    /// Temperature of `cell`.
    pub fn temperature_at(&self, cell: Cell) -> f32 {
        self.temperature.get(self.lattice.index_of(cell))
    }

    /// Position of `cell`'s temperature between the ambient (0.0) and the
    /// melting point (1.0): `(T - t_infty) / (t_m - t_infty)`.
    ///
    /// Renderers can feed this straight into a colour ramp. Construction
    /// guarantees the denominator is strictly positive.
    pub fn normalized_temperature(&self, cell: Cell) -> f64 {
        (f64::from(self.temperature_at(cell)) - self.t_infty) / (self.params.t_m - self.t_infty)
    }

    /// Drawing-plane center of `cell`.
    pub fn cell_center(&self, cell: Cell) -> (f64, f64) {
        self.lattice.cell_center(cell)
    }

    /// The fixed center cell of the seed cluster; growth angles are
    /// measured from its drawing-plane position.
    pub fn seed_center(&self) -> Cell {
        self.seed_center
    }

    /// Number of completed steps.
    pub fn current_step(&self) -> StepId {
        self.step
    }

    /// The active tunable parameters.
    pub fn params(&self) -> GrowthParams {
        self.params
    }

    /// The ambient melt temperature fixed at construction.
    pub fn t_infty(&self) -> f64 {
        self.t_infty
    }

    /// The RNG seed currently in effect.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<L: Lattice> fmt::Debug for CrystalEngine<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrystalEngine")
            .field("width", &self.lattice.width())
            .field("height", &self.lattice.height())
            .field("step", &self.step)
            .field("crystal_cells", &self.phase.crystal_count())
            .field("seed", &self.seed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crystal_cells<L: Lattice>(engine: &CrystalEngine<L>) -> Vec<Cell> {
        engine
            .lattice()
            .canonical_ordering()
            .into_iter()
            .filter(|&c| engine.phase_at(c).is_crystal())
            .collect()
    }

    fn assert_fresh_cluster<L: Lattice>(engine: &CrystalEngine<L>) {
        let cluster = crystal_cells(engine);
        assert_eq!(cluster.len(), 3, "seed cluster must be exactly 3 cells");

        let center = engine.seed_center();
        assert!(cluster.contains(&center), "center cell must be crystal");
        let neighbours = engine.lattice().neighbours(center);
        for cell in cluster.iter().filter(|&&c| c != center) {
            assert!(
                neighbours.contains(cell),
                "{cell} is not a neighbour of the center {center}"
            );
        }

        let t_m = engine.params().t_m as f32;
        let t_infty = engine.t_infty() as f32;
        for cell in engine.lattice().canonical_ordering() {
            if engine.phase_at(cell).is_crystal() {
                assert_eq!(engine.temperature_at(cell), t_m);
            } else {
                assert_eq!(engine.temperature_at(cell), t_infty);
            }
        }
        assert_eq!(engine.current_step(), StepId(0));
    }

    // ── Construction ───────────────────────────────────────────────

    #[test]
    fn seed_cluster_is_three_cells_on_every_backend() {
        let config = EngineConfig {
            seed: 11,
            ..EngineConfig::default()
        };
        let hex = CrystalEngine::new(HexLattice::new(8, 8, 10.0).unwrap(), config).unwrap();
        assert_fresh_cluster(&hex);
        let tri = CrystalEngine::new(TriLattice::new(8, 8, 10.0).unwrap(), config).unwrap();
        assert_fresh_cluster(&tri);
        let square = CrystalEngine::new(SquareLattice::new(8, 8, 10.0).unwrap(), config).unwrap();
        assert_fresh_cluster(&square);
    }

    #[test]
    fn construction_rejects_ambient_at_the_melting_point() {
        let lattice = SquareLattice::new(5, 5, 10.0).unwrap();
        let config = EngineConfig {
            t_infty: 0.0,
            ..EngineConfig::default()
        };
        match CrystalEngine::new(lattice, config) {
            Err(ConfigError::AmbientNotBelowMelting { .. }) => {}
            other => panic!("expected AmbientNotBelowMelting, got {other:?}"),
        }
    }

    #[test]
    fn the_seed_chooses_the_cluster() {
        let mut clusters: Vec<Vec<Cell>> = (0..6)
            .map(|seed| {
                let engine = CrystalEngine::new(
                    SquareLattice::new(9, 9, 10.0).unwrap(),
                    EngineConfig {
                        seed,
                        ..EngineConfig::default()
                    },
                )
                .unwrap();
                crystal_cells(&engine)
            })
            .collect();
        clusters.sort();
        clusters.dedup();
        assert!(clusters.len() >= 2, "six seeds all produced the same cluster");
    }

    // ── Worked 5x5 example ─────────────────────────────────────────
    //
    // Square 5x5, cluster {(2,2),(3,2),(2,3)}, t_m = 0, t_infty = -10,
    // isotropic threshold, 5 relaxation passes per step. Every temperature
    // these assertions check is a dyadic rational, so f32 holds it exactly.

    fn five_by_five(base_growth_threshold: f64) -> SquareEngine {
        let lattice = SquareLattice::new(5, 5, 10.0).unwrap();
        let config = EngineConfig {
            t_infty: -10.0,
            params: GrowthParams {
                t_m: 0.0,
                base_growth_threshold,
                anisotropy_factor: 0.0,
                relax_iterations: 5,
            },
            seed: 0,
        };
        let mut engine = CrystalEngine::new(lattice, config).unwrap();
        // Swap the random cluster for the fixed one the worked example uses.
        engine.phase.clear();
        engine.temperature.fill(-10.0);
        for cell in [Cell::new(2, 2), Cell::new(3, 2), Cell::new(2, 3)] {
            let rank = engine.lattice.index_of(cell);
            engine.phase.freeze(rank);
            engine.temperature.set(rank, 0.0);
        }
        engine
    }

    #[test]
    fn five_by_five_first_step_relaxes_but_freezes_nothing() {
        let mut engine = five_by_five(-1.0);
        let metrics = engine.step();

        assert_eq!(metrics.step, StepId(1));
        assert_eq!(metrics.interface_cells, 7);
        assert_eq!(metrics.frozen_cells, 0);
        assert_eq!(metrics.crystal_cells, 3);

        // Worked by hand: the four distinct interface temperatures after
        // five Jacobi passes.
        assert_eq!(engine.temperature_at(Cell::new(2, 1)), -5.21484375);
        assert_eq!(engine.temperature_at(Cell::new(1, 2)), -5.21484375);
        assert_eq!(engine.temperature_at(Cell::new(3, 1)), -5.41015625);
        assert_eq!(engine.temperature_at(Cell::new(1, 3)), -5.41015625);
        assert_eq!(engine.temperature_at(Cell::new(4, 2)), -5.576171875);
        assert_eq!(engine.temperature_at(Cell::new(2, 4)), -5.576171875);
        assert_eq!(engine.temperature_at(Cell::new(3, 3)), -3.49609375);

        // None of them beats the -1 threshold, so the cluster is unchanged.
        for cell in [Cell::new(2, 2), Cell::new(3, 2), Cell::new(2, 3)] {
            assert_eq!(engine.phase_at(cell), Phase::Crystal);
        }
    }

    #[test]
    fn five_by_five_freezes_every_interface_cell_past_the_threshold() {
        // All seven relaxed interface temperatures exceed -6.
        let mut engine = five_by_five(-6.0);
        let metrics = engine.step();

        assert_eq!(metrics.interface_cells, 7);
        assert_eq!(metrics.frozen_cells, 7);
        assert_eq!(metrics.crystal_cells, 10);
        // Newly frozen cells pin to the melting point.
        assert_eq!(engine.temperature_at(Cell::new(3, 3)), 0.0);
        assert_eq!(engine.temperature_at(Cell::new(4, 2)), 0.0);
    }

    #[test]
    fn five_by_five_freezes_only_cells_above_the_threshold() {
        // Relaxed interface temperatures: -5.21 twice, -5.41 twice, -5.58
        // twice, -3.50 once. At a threshold of -5.5 only the -5.58 pair
        // stays melt.
        let mut engine = five_by_five(-5.5);
        let metrics = engine.step();

        assert_eq!(metrics.interface_cells, 7);
        assert_eq!(metrics.frozen_cells, 5);
        assert_eq!(engine.phase_at(Cell::new(4, 2)), Phase::Melt);
        assert_eq!(engine.phase_at(Cell::new(2, 4)), Phase::Melt);
        assert_eq!(engine.phase_at(Cell::new(3, 3)), Phase::Crystal);
        assert_eq!(engine.phase_at(Cell::new(2, 1)), Phase::Crystal);
    }

    #[test]
    fn zero_relax_iterations_grows_on_raw_temperatures() {
        let mut engine = five_by_five(-11.0);
        let mut params = engine.params();
        params.relax_iterations = 0;
        engine.set_params(params).unwrap();

        let metrics = engine.step();

        // The raw ambient of -10 beats the -11 threshold on every
        // interface cell; nothing was averaged first.
        assert_eq!(metrics.frozen_cells, 7);
        assert_eq!(engine.temperature_at(Cell::new(0, 0)), -10.0);
    }

    // ── Stepping ───────────────────────────────────────────────────

    #[test]
    fn zero_steps_leave_the_initial_state() {
        let engine = five_by_five(-1.0);
        assert_eq!(engine.current_step(), StepId(0));
        assert_eq!(engine.phase().crystal_count(), 3);
        let melt = engine.lattice().cell_count() - 3;
        assert_eq!(
            engine
                .temperature()
                .as_slice()
                .iter()
                .filter(|&&t| t == -10.0)
                .count(),
            melt
        );
    }

    #[test]
    fn step_counter_increments_by_one() {
        let mut engine = five_by_five(-1.0);
        for expected in 1..=4u64 {
            let metrics = engine.step();
            assert_eq!(metrics.step, StepId(expected));
            assert_eq!(engine.current_step(), StepId(expected));
        }
    }

    #[test]
    fn crystal_growth_is_monotonic_under_default_params() {
        let mut engine = CrystalEngine::new(
            SquareLattice::new(7, 7, 10.0).unwrap(),
            EngineConfig {
                seed: 5,
                ..EngineConfig::default()
            },
        )
        .unwrap();

        let mut previous = engine.phase().crystal_count();
        for _ in 0..200 {
            let metrics = engine.step();
            assert!(
                metrics.crystal_cells >= previous,
                "crystal count shrank from {previous} to {}",
                metrics.crystal_cells
            );
            assert_eq!(metrics.crystal_cells, engine.phase().crystal_count());
            previous = metrics.crystal_cells;
        }
        assert!(previous > 3, "no growth after 200 steps");
        assert!(previous <= engine.lattice().cell_count());
    }

    #[test]
    fn identical_configs_replay_identical_histories() {
        let config = EngineConfig {
            seed: 1234,
            ..EngineConfig::default()
        };
        let mut a = CrystalEngine::new(HexLattice::new(10, 8, 10.0).unwrap(), config).unwrap();
        let mut b = CrystalEngine::new(HexLattice::new(10, 8, 10.0).unwrap(), config).unwrap();

        for _ in 0..8 {
            let ma = a.step();
            let mb = b.step();
            // Timing fields are wall-clock and excluded from the comparison.
            assert_eq!(
                (ma.step, ma.interface_cells, ma.frozen_cells, ma.crystal_cells),
                (mb.step, mb.interface_cells, mb.frozen_cells, mb.crystal_cells),
            );
            assert_eq!(a.phase().as_slice(), b.phase().as_slice());
            assert_eq!(a.temperature().as_slice(), b.temperature().as_slice());
        }
    }

    // ── Live tuning ────────────────────────────────────────────────

    #[test]
    fn set_params_takes_effect_on_the_next_step() {
        let mut engine = five_by_five(-1.0);
        let mut params = engine.params();
        params.base_growth_threshold = -6.0;
        engine.set_params(params).unwrap();

        let metrics = engine.step();
        assert_eq!(metrics.frozen_cells, 7);
    }

    #[test]
    fn rejected_params_leave_the_engine_unchanged() {
        let mut engine = five_by_five(-1.0);
        let before = engine.params();

        let mut bad = before;
        bad.t_m = -20.0;
        match engine.set_params(bad) {
            Err(ConfigError::AmbientNotBelowMelting { .. }) => {}
            other => panic!("expected AmbientNotBelowMelting, got {other:?}"),
        }
        let mut nan = before;
        nan.anisotropy_factor = f64::NAN;
        match engine.set_params(nan) {
            Err(ConfigError::NonFiniteParameter { .. }) => {}
            other => panic!("expected NonFiniteParameter, got {other:?}"),
        }

        assert_eq!(engine.params(), before);
    }

    // ── Reset ──────────────────────────────────────────────────────

    #[test]
    fn reset_with_the_same_seed_reproduces_the_run() {
        let config = EngineConfig {
            seed: 77,
            ..EngineConfig::default()
        };
        let mut engine =
            CrystalEngine::new(TriLattice::new(8, 8, 10.0).unwrap(), config).unwrap();

        for _ in 0..5 {
            engine.step();
        }
        let phase_after = engine.phase().as_slice().to_vec();
        let temperature_after = engine.temperature().as_slice().to_vec();

        engine.reset(77);
        assert_eq!(engine.current_step(), StepId(0));
        assert_eq!(engine.phase().crystal_count(), 3);
        for _ in 0..5 {
            engine.step();
        }
        assert_eq!(engine.phase().as_slice(), phase_after.as_slice());
        assert_eq!(engine.temperature().as_slice(), temperature_after.as_slice());
    }

    // ── Queries ────────────────────────────────────────────────────

    #[test]
    fn normalized_temperature_spans_ambient_to_melting() {
        let engine = five_by_five(-1.0);
        assert_eq!(engine.normalized_temperature(Cell::new(2, 2)), 1.0);
        assert_eq!(engine.normalized_temperature(Cell::new(0, 0)), 0.0);
    }

    #[test]
    fn cell_center_delegates_to_the_lattice() {
        let engine = five_by_five(-1.0);
        assert_eq!(engine.cell_center(Cell::new(2, 2)), (25.0, 25.0));
        assert_eq!(engine.seed_center(), Cell::new(2, 2));
    }

    #[test]
    fn debug_output_is_compact() {
        let engine = five_by_five(-1.0);
        let text = format!("{engine:?}");
        assert!(text.contains("CrystalEngine"));
        assert!(text.contains("crystal_cells: 3"));
    }
}
