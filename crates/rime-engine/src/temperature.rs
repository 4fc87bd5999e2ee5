//! Temperature field and Jacobi relaxation.

use crate::neighbourhood::NeighbourTable;
use crate::phase_field::PhaseField;

/// Per-cell temperature in canonical order, with a scratch buffer for
/// whole-field Jacobi passes.
///
/// Storage is `f32` per cell; the engine's parameters and angle math stay
/// in `f64` and narrow on write.
#[derive(Clone, Debug)]
pub struct TemperatureField {
    current: Vec<f32>,
    scratch: Vec<f32>,
}

impl TemperatureField {
    /// Uniform field over `cell_count` cells.
    pub(crate) fn new(cell_count: usize, value: f32) -> Self {
        Self {
            current: vec![value; cell_count],
            scratch: vec![value; cell_count],
        }
    }

    /// Temperature of the cell with canonical rank `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= len()`.
    #[inline]
    pub fn get(&self, rank: usize) -> f32 {
        self.current[rank]
    }

    /// Number of cells in the field.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// True when the field covers zero cells.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Read-only view of the whole field in canonical order.
    pub fn as_slice(&self) -> &[f32] {
        &self.current
    }

    /// Overwrite one cell.
    pub(crate) fn set(&mut self, rank: usize, value: f32) {
        self.current[rank] = value;
    }

    /// Reset the whole field to a uniform value.
    pub(crate) fn fill(&mut self, value: f32) {
        self.current.fill(value);
        self.scratch.fill(value);
    }

    /// One Jacobi pass.
    ///
    /// Every crystal cell pins to `t_m`; every melt cell takes the
    /// arithmetic mean of its neighbours' previous temperatures. New values
    /// are built entirely from a read of the current buffer and swapped in
    /// afterwards, so within-pass update order never affects the result.
    pub(crate) fn relax(&mut self, table: &NeighbourTable, phase: &PhaseField, t_m: f32) {
        debug_assert_eq!(self.current.len(), table.len());
        for rank in 0..self.current.len() {
            self.scratch[rank] = if phase.get(rank).is_crystal() {
                t_m
            } else {
                let neighbours = table.neighbours_of(rank);
                if neighbours.is_empty() {
                    // Isolated cell: hold its previous temperature.
                    self.current[rank]
                } else {
                    let sum: f32 = neighbours.iter().map(|&n| self.current[n]).sum();
                    sum / neighbours.len() as f32
                }
            };
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
    }
}
