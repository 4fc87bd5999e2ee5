//! Square lattice (von Neumann neighbourhood).

use crate::error::LatticeError;
use crate::lattice::{check_cell, check_dims, fit_extent, Lattice, NeighbourList, VertexList};
use crate::periodic::wrap_offsets;
use rime_core::Cell;
use smallvec::smallvec;

/// Offsets in `(dq, dr)` order: right, left, down, up. Diagonals are
/// deliberately excluded.
const SQUARE_OFFSETS: [(i32, i32); 4] = [
    (1, 0),  // right
    (-1, 0), // left
    (0, 1),  // down
    (0, -1), // up
];

/// A periodic square lattice with 4-connected cells.
///
/// The only backend without a parity split: every cell uses the same offset
/// table, so neighbour symmetry holds on any extent.
///
/// # Examples
///
/// ```
/// use rime_core::Cell;
/// use rime_lattice::{Lattice, SquareLattice};
///
/// let sq = SquareLattice::new(5, 5, 10.0).unwrap();
/// assert_eq!(sq.neighbour_count(), 4);
///
/// let n = sq.neighbours(Cell::new(0, 0));
/// assert!(n.contains(&Cell::new(4, 0)));
/// assert!(n.contains(&Cell::new(0, 4)));
/// ```
#[derive(Debug, Clone)]
pub struct SquareLattice {
    width: u32,
    height: u32,
    edge: f64,
}

impl SquareLattice {
    /// Create a lattice of `width * height` squares with the given edge
    /// length in drawing units.
    ///
    /// Returns [`LatticeError::ExtentTooSmall`] if either axis is below 3,
    /// [`LatticeError::ExtentTooLarge`] if it exceeds `i32::MAX`, or
    /// [`LatticeError::InvalidPitch`] for a non-positive or non-finite
    /// edge.
    pub fn new(width: u32, height: u32, edge: f64) -> Result<Self, LatticeError> {
        check_dims(width, height, edge)?;
        Ok(Self {
            width,
            height,
            edge,
        })
    }

    /// Create the largest lattice that fits a drawing area, leaving one
    /// cell of margin on each side.
    pub fn fit_to_area(avail_width: f64, avail_height: f64, edge: f64) -> Result<Self, LatticeError> {
        check_dims(3, 3, edge)?;
        let width = fit_extent(avail_width, edge);
        let height = fit_extent(avail_height, edge);
        Self::new(width, height, edge)
    }
}

impl Lattice for SquareLattice {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pitch(&self) -> f64 {
        self.edge
    }

    fn neighbour_count(&self) -> usize {
        4
    }

    fn neighbours(&self, cell: Cell) -> NeighbourList {
        check_cell(cell, self.width, self.height);
        wrap_offsets(cell, &SQUARE_OFFSETS, self.width, self.height)
    }

    fn cell_center(&self, cell: Cell) -> (f64, f64) {
        check_cell(cell, self.width, self.height);
        (
            f64::from(cell.q) * self.edge + self.edge / 2.0,
            f64::from(cell.r) * self.edge + self.edge / 2.0,
        )
    }

    fn cell_vertices(&self, cell: Cell) -> VertexList {
        check_cell(cell, self.width, self.height);
        let x0 = f64::from(cell.q) * self.edge;
        let y0 = f64::from(cell.r) * self.edge;
        smallvec![
            (x0, y0),
            (x0 + self.edge, y0),
            (x0 + self.edge, y0 + self.edge),
            (x0, y0 + self.edge),
        ]
    }
}
