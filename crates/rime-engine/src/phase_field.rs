//! Melt/crystal phase state over a lattice.

use rime_core::{Cell, Phase};
use rime_lattice::Lattice;

use crate::neighbourhood::NeighbourTable;

/// One [`Phase`] per cell in canonical order, plus a running crystal count.
///
/// Transitions are one-way: cells freeze and never melt back, so the crystal
/// count is monotonic between resets. All mutation entry points are
/// crate-internal; callers read the field through
/// [`CrystalEngine`](crate::CrystalEngine).
#[derive(Clone, Debug)]
pub struct PhaseField {
    cells: Vec<Phase>,
    crystal_count: usize,
}

impl PhaseField {
    /// All-melt field over `cell_count` cells.
    pub(crate) fn new(cell_count: usize) -> Self {
        Self {
            cells: vec![Phase::Melt; cell_count],
            crystal_count: 0,
        }
    }

    /// Phase of the cell with canonical rank `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= len()`.
    #[inline]
    pub fn get(&self, rank: usize) -> Phase {
        self.cells[rank]
    }

    /// Number of cells in the field.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the field covers zero cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of crystal cells.
    pub fn crystal_count(&self) -> usize {
        self.crystal_count
    }

    /// Read-only view of the whole field in canonical order.
    pub fn as_slice(&self) -> &[Phase] {
        &self.cells
    }

    /// True iff at least one topology neighbour of `cell` is crystal.
    ///
    /// The phase of `cell` itself does not enter the answer: a crystal cell
    /// surrounded by melt is not adjacent to crystal.
    pub fn is_adjacent_to_crystal(&self, lattice: &dyn Lattice, cell: Cell) -> bool {
        lattice
            .neighbours(cell)
            .into_iter()
            .any(|n| self.cells[lattice.index_of(n)].is_crystal())
    }

    /// Rank-table variant of [`is_adjacent_to_crystal`](Self::is_adjacent_to_crystal),
    /// used by the step hot loops.
    #[inline]
    pub(crate) fn adjacent_to_crystal_by_rank(&self, table: &NeighbourTable, rank: usize) -> bool {
        table
            .neighbours_of(rank)
            .iter()
            .any(|&n| self.cells[n].is_crystal())
    }

    /// Freeze the cell with canonical rank `rank`. Idempotent.
    pub(crate) fn freeze(&mut self, rank: usize) {
        if !self.cells[rank].is_crystal() {
            self.cells[rank] = Phase::Crystal;
            self.crystal_count += 1;
        }
    }

    /// Return every cell to melt.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Phase::Melt);
        self.crystal_count = 0;
    }
}
