//! The core `Lattice` trait.

use rime_core::Cell;
use smallvec::SmallVec;

/// Minimum extent per axis.
///
/// The seed cluster is a cell plus two neighbours; anything narrower folds
/// onto itself under the periodic wrap.
pub const MIN_EXTENT: u32 = 3;

/// Maximum extent per axis: coordinates use `i32`, so each axis must fit.
pub const MAX_EXTENT: u32 = i32::MAX as u32;

/// Ordered neighbour list of a cell.
///
/// Inline capacity 6 covers the hexagonal lattice; the triangular and
/// square lattices use 3 and 4 of the slots.
pub type NeighbourList = SmallVec<[Cell; 6]>;

/// Polygon corners of a cell in the drawing plane, in draw order.
pub type VertexList = SmallVec<[(f64, f64); 6]>;

/// Central topology abstraction for the crystal-growth engine.
///
/// A lattice is an immutable `width` by `height` grid of cells under
/// periodic boundary conditions on both axes, together with the real-plane
/// geometry used by the anisotropic growth rule and by renderers. Concrete
/// backends ([`HexLattice`](crate::HexLattice),
/// [`TriLattice`](crate::TriLattice),
/// [`SquareLattice`](crate::SquareLattice)) implement it to define their
/// neighbourhoods and cell shapes.
///
/// # Object safety
///
/// The trait is usable as `&dyn Lattice`: field helpers and the engine's
/// precomputed neighbour table accept trait objects so they work with any
/// backend.
///
/// # Coordinates
///
/// Query methods take in-range cells (`0 <= q < width`, `0 <= r < height`)
/// and panic on out-of-range input; wrapping arbitrary coordinates into
/// range is the caller's job via [`periodic::wrap_cell`](crate::periodic::wrap_cell).
/// Returned neighbour lists are always already wrapped.
pub trait Lattice: Send + Sync + 'static {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Cell pitch in drawing-plane units (hex radius or edge length).
    fn pitch(&self) -> f64;

    /// Fixed number of neighbours of every cell.
    fn neighbour_count(&self) -> usize;

    /// The neighbours of `cell` in a deterministic, backend-defined order,
    /// each wrapped through the periodic boundary.
    ///
    /// Always returns exactly [`neighbour_count`](Self::neighbour_count)
    /// cells; edge cells see across the wrap.
    fn neighbours(&self, cell: Cell) -> NeighbourList;

    /// Center of `cell` in the drawing plane.
    ///
    /// Positions do not wrap: cells `(0, r)` and `(width - 1, r)` sit at
    /// opposite ends of the plane even though they are topological
    /// neighbours.
    fn cell_center(&self, cell: Cell) -> (f64, f64);

    /// Polygon corners of `cell` in the drawing plane, in draw order.
    fn cell_vertices(&self, cell: Cell) -> VertexList;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Flat index of `cell` in canonical row-major order (r then q).
    ///
    /// Fields store one value per cell in this order.
    fn index_of(&self, cell: Cell) -> usize {
        check_cell(cell, self.width(), self.height());
        cell.r as usize * self.width() as usize + cell.q as usize
    }

    /// All cells in canonical row-major order (outer loop r, inner loop q).
    ///
    /// Two calls on the same lattice return the same sequence; the n-th
    /// cell has [`index_of`](Self::index_of) equal to n.
    fn canonical_ordering(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.cell_count());
        for r in 0..self.height() as i32 {
            for q in 0..self.width() as i32 {
                out.push(Cell::new(q, r));
            }
        }
        out
    }
}

/// Panic unless `cell` is in-range for a `width` by `height` grid.
pub(crate) fn check_cell(cell: Cell, width: u32, height: u32) {
    assert!(
        cell.q >= 0 && cell.q < width as i32 && cell.r >= 0 && cell.r < height as i32,
        "cell {cell} out of bounds: q in [0, {width}), r in [0, {height})"
    );
}

/// Validate constructor dimensions shared by all backends.
pub(crate) fn check_dims(width: u32, height: u32, pitch: f64) -> Result<(), crate::LatticeError> {
    use crate::LatticeError;

    if !(pitch.is_finite() && pitch > 0.0) {
        return Err(LatticeError::InvalidPitch { value: pitch });
    }
    for (axis, value) in [("width", width), ("height", height)] {
        if value < MIN_EXTENT {
            return Err(LatticeError::ExtentTooSmall {
                axis,
                value,
                min: MIN_EXTENT,
            });
        }
        if value > MAX_EXTENT {
            return Err(LatticeError::ExtentTooLarge {
                axis,
                value,
                max: MAX_EXTENT,
            });
        }
    }
    Ok(())
}

/// Extent that fits `avail` drawing units at the given cell pitch, with one
/// cell of margin on each side.
///
/// Saturates instead of overflowing, so hostile inputs fall out as
/// extent errors in [`check_dims`].
pub(crate) fn fit_extent(avail: f64, cell_pitch: f64) -> u32 {
    let usable = avail - 2.0 * cell_pitch;
    if usable <= 0.0 {
        0
    } else {
        (usable / cell_pitch).floor() as u32
    }
}
