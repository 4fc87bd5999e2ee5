//! Precomputed neighbour ranks for hot-loop field access.
//!
//! [`Lattice::neighbours`] wraps coordinates and builds a small vector on
//! every call, and the relaxation kernel visits every cell several times per
//! step. [`NeighbourTable`] resolves the whole topology once at engine
//! construction into flat canonical ranks, so the kernels index straight
//! into the field buffers.

use rime_lattice::Lattice;
use smallvec::SmallVec;

/// Neighbour ranks of every cell, in canonical order.
///
/// Row `i` lists the canonical ranks of the neighbours of the cell with
/// canonical rank `i`, in the same order [`Lattice::neighbours`] returns
/// them. The table is a pure cache: lookups are behaviourally identical to
/// calling [`Lattice::neighbours`] followed by [`Lattice::index_of`].
#[derive(Clone, Debug)]
pub struct NeighbourTable {
    ranks: Vec<SmallVec<[usize; 6]>>,
}

impl NeighbourTable {
    /// Resolve the full topology of `lattice` into ranks.
    pub fn build(lattice: &dyn Lattice) -> Self {
        let ranks = lattice
            .canonical_ordering()
            .into_iter()
            .map(|cell| {
                lattice
                    .neighbours(cell)
                    .into_iter()
                    .map(|n| lattice.index_of(n))
                    .collect()
            })
            .collect();
        Self { ranks }
    }

    /// Neighbour ranks of the cell with canonical rank `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= len()`.
    #[inline]
    pub fn neighbours_of(&self, rank: usize) -> &[usize] {
        &self.ranks[rank]
    }

    /// Number of cells covered by the table.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// True when the table covers zero cells.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
