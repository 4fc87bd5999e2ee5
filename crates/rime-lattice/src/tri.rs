//! Triangular lattice (alternating upward and downward cells).

use crate::error::LatticeError;
use crate::lattice::{check_cell, check_dims, fit_extent, Lattice, NeighbourList, VertexList};
use crate::periodic::wrap_offsets;
use rime_core::Cell;
use smallvec::smallvec;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Offsets for upward cells, in `(dq, dr)` order: down, left, right.
const UPWARD_OFFSETS: [(i32, i32); 3] = [
    (0, 1),  // down (across the base)
    (-1, 0), // left
    (1, 0),  // right
];

/// Offsets for downward cells, in `(dq, dr)` order: up, left, right.
const DOWNWARD_OFFSETS: [(i32, i32); 3] = [
    (0, -1), // up (across the base)
    (-1, 0), // left
    (1, 0),  // right
];

/// A periodic lattice of edge-sharing triangles.
///
/// Cells alternate orientation in a checkerboard: `(q + r)` even points up,
/// odd points down. A triangle shares edges with its left and right
/// neighbours and with the cell across its horizontal base, which lies
/// below for upward cells and above for downward ones; three neighbours
/// either way.
///
/// # Examples
///
/// ```
/// use rime_core::Cell;
/// use rime_lattice::{Lattice, TriLattice};
///
/// let tri = TriLattice::new(6, 6, 10.0).unwrap();
/// assert_eq!(tri.neighbour_count(), 3);
/// assert!(tri.is_upward(Cell::new(0, 0)));
/// assert!(!tri.is_upward(Cell::new(1, 0)));
///
/// // An upward cell reaches across its base to the row below.
/// let n = tri.neighbours(Cell::new(2, 2));
/// assert!(n.contains(&Cell::new(2, 3)));
/// ```
#[derive(Debug, Clone)]
pub struct TriLattice {
    width: u32,
    height: u32,
    edge: f64,
}

impl TriLattice {
    /// Create a lattice of `width * height` triangles with the given edge
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
        let height = fit_extent(avail_height, edge * SQRT_3 / 2.0);
        Self::new(width, height, edge)
    }

    /// Height of a triangle row in drawing units.
    pub fn row_height(&self) -> f64 {
        self.edge * SQRT_3 / 2.0
    }

    /// True iff `cell` points upward (`q + r` even).
    pub fn is_upward(&self, cell: Cell) -> bool {
        (cell.q + cell.r) % 2 == 0
    }

    /// Top-left corner of the cell's bounding box.
    fn cell_origin(&self, cell: Cell) -> (f64, f64) {
        (
            f64::from(cell.q) * self.edge,
            f64::from(cell.r) * self.row_height(),
        )
    }
}

impl Lattice for TriLattice {
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
        3
    }

    fn neighbours(&self, cell: Cell) -> NeighbourList {
        check_cell(cell, self.width, self.height);
        let offsets = if self.is_upward(cell) {
            &UPWARD_OFFSETS
        } else {
            &DOWNWARD_OFFSETS
        };
        wrap_offsets(cell, offsets, self.width, self.height)
    }

    fn cell_center(&self, cell: Cell) -> (f64, f64) {
        check_cell(cell, self.width, self.height);
        let (x0, y0) = self.cell_origin(cell);
        let h = self.row_height();
        // Centroid: two thirds down for upward cells, one third for downward.
        let dy = if self.is_upward(cell) {
            h * 2.0 / 3.0
        } else {
            h / 3.0
        };
        (x0 + self.edge / 2.0, y0 + dy)
    }

    fn cell_vertices(&self, cell: Cell) -> VertexList {
        check_cell(cell, self.width, self.height);
        let (x0, y0) = self.cell_origin(cell);
        let h = self.row_height();
        if self.is_upward(cell) {
            smallvec![
                (x0 + self.edge / 2.0, y0), // apex
                (x0, y0 + h),               // bottom-left
                (x0 + self.edge, y0 + h),   // bottom-right
            ]
        } else {
            smallvec![
                (x0, y0),                   // top-left
                (x0 + self.edge, y0),       // top-right
                (x0 + self.edge / 2.0, y0 + h), // apex
            ]
        }
    }
}
