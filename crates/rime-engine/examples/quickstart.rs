//! Rime quickstart: grow one crystal from scratch.
//!
//! Demonstrates:
//!   1. Fitting a square lattice into a drawing area
//!   2. Configuring and constructing a CrystalEngine
//!   3. Stepping and reading per-step metrics
//!   4. Rendering the phase field as ASCII
//!   5. Resetting for a fresh run
//!
//! Run with:
//!   cargo run --example quickstart

use rime_core::Cell;
use rime_engine::{CrystalEngine, EngineConfig, GrowthParams};
use rime_lattice::{Lattice, SquareLattice};

// ─── Drawing area ───────────────────────────────────────────────

const AVAIL_W: f64 = 500.0;
const AVAIL_H: f64 = 320.0;
const CELL_EDGE: f64 = 12.0;

const MAX_STEPS: u32 = 400;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Rime Quickstart ===\n");

    // 1. Fit a square lattice into the drawing area.
    let lattice = SquareLattice::fit_to_area(AVAIL_W, AVAIL_H, CELL_EDGE)?;
    println!(
        "Lattice: {}x{} square, {} cells, edge {}",
        lattice.width(),
        lattice.height(),
        lattice.cell_count(),
        lattice.pitch(),
    );

    // 2. Configure the run: undercooled melt, mild anisotropy.
    let config = EngineConfig {
        t_infty: -10.0,
        params: GrowthParams {
            t_m: 0.0,
            base_growth_threshold: -1.0,
            anisotropy_factor: 0.4,
            relax_iterations: 5,
        },
        seed: 42,
    };
    let mut engine = CrystalEngine::new(lattice, config)?;
    println!(
        "Engine ready: {} crystal cells, seed {}\n",
        engine.phase().crystal_count(),
        engine.seed(),
    );

    // 3. Grow until the melt is exhausted (interface empty) or we give up.
    println!("Growing...");
    let mut final_step = 0;
    for _ in 0..MAX_STEPS {
        let metrics = engine.step();
        final_step = metrics.step.0;

        if metrics.step.0 % 25 == 0 {
            println!(
                "  step {:>3}: crystal={:>4} interface={:>4} frozen={:>3} time={}μs",
                metrics.step.0,
                metrics.crystal_cells,
                metrics.interface_cells,
                metrics.frozen_cells,
                metrics.relax_us + metrics.growth_us,
            );
        }
        if metrics.interface_cells == 0 {
            break;
        }
    }
    println!(
        "\nStopped at step {} with {} of {} cells crystal.",
        final_step,
        engine.phase().crystal_count(),
        engine.lattice().cell_count(),
    );

    // 4. Render the final phase field; melt cells shade by warmth.
    println!("\nFinal phase map:");
    for r in 0..engine.lattice().height() as i32 {
        let mut row = String::new();
        for q in 0..engine.lattice().width() as i32 {
            let cell = Cell::new(q, r);
            let glyph = if engine.phase_at(cell).is_crystal() {
                '#'
            } else {
                let warmth = engine.normalized_temperature(cell);
                if warmth >= 0.75 {
                    '+'
                } else if warmth >= 0.4 {
                    ':'
                } else {
                    '.'
                }
            };
            row.push(glyph);
        }
        println!("  {row}");
    }

    // 5. Reset for a fresh run under a different seed.
    engine.reset(123);
    println!(
        "\nReset to seed 123: step {}, {} crystal cells.",
        engine.current_step(),
        engine.phase().crystal_count(),
    );

    println!("Done.");
    Ok(())
}
