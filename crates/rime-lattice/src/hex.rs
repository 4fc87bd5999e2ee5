//! Hexagonal lattice (pointy-top, column-offset coordinates).

use crate::error::LatticeError;
use crate::lattice::{check_cell, check_dims, fit_extent, Lattice, NeighbourList, VertexList};
use crate::periodic::wrap_offsets;
use rime_core::Cell;
use smallvec::SmallVec;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Offsets for even columns, in `(dq, dr)` order: E, N, NW, W, SW, S.
const EVEN_COLUMN_OFFSETS: [(i32, i32); 6] = [
    (1, 0),   // E
    (0, -1),  // N
    (-1, -1), // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, 1),   // S
];

/// Offsets for odd columns, in `(dq, dr)` order: E, NE, N, W, S, SE.
const ODD_COLUMN_OFFSETS: [(i32, i32); 6] = [
    (1, 0),  // E
    (1, -1), // NE
    (0, -1), // N
    (-1, 0), // W
    (0, 1),  // S
    (1, 1),  // SE
];

/// A periodic hexagonal lattice of pointy-top cells.
///
/// Cells use offset coordinates: `q` is the column, `r` the row, and odd
/// columns sit half a row lower in the drawing plane. Which diagonal
/// directions a cell can reach depends on its column parity, so the two
/// offset tables above differ and are load-bearing; together they give every
/// cell exactly six neighbours once the periodic wrap is applied.
///
/// # Examples
///
/// ```
/// use rime_core::Cell;
/// use rime_lattice::{HexLattice, Lattice};
///
/// let hex = HexLattice::new(8, 6, 10.0).unwrap();
/// assert_eq!(hex.cell_count(), 48);
/// assert_eq!(hex.neighbour_count(), 6);
///
/// // The boundary wraps: a corner cell still has six neighbours,
/// // one of them on the far edge.
/// let corner = hex.neighbours(Cell::new(0, 0));
/// assert_eq!(corner.len(), 6);
/// assert!(corner.contains(&Cell::new(7, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct HexLattice {
    width: u32,
    height: u32,
    radius: f64,
}

impl HexLattice {
    /// Create a lattice of `width * height` hexagons with the given
    /// circumradius in drawing units.
    ///
    /// Returns [`LatticeError::ExtentTooSmall`] if either axis is below 3,
    /// [`LatticeError::ExtentTooLarge`] if it exceeds `i32::MAX`, or
    /// [`LatticeError::InvalidPitch`] for a non-positive or non-finite
    /// radius.
    pub fn new(width: u32, height: u32, radius: f64) -> Result<Self, LatticeError> {
        check_dims(width, height, radius)?;
        Ok(Self {
            width,
            height,
            radius,
        })
    }

    /// Create the largest lattice that fits a drawing area, leaving one
    /// cell of margin on each side.
    ///
    /// The extent is the floor of the usable span over the cell pitch per
    /// axis; areas too small for 3 cells on an axis are reported as
    /// [`LatticeError::ExtentTooSmall`].
    pub fn fit_to_area(avail_width: f64, avail_height: f64, radius: f64) -> Result<Self, LatticeError> {
        check_dims(3, 3, radius)?;
        let width = fit_extent(avail_width, 1.5 * radius);
        let height = fit_extent(avail_height, SQRT_3 * radius);
        Self::new(width, height, radius)
    }

    /// Horizontal distance between adjacent column centers.
    pub fn column_spacing(&self) -> f64 {
        1.5 * self.radius
    }

    /// Vertical distance between adjacent row centers.
    pub fn row_spacing(&self) -> f64 {
        SQRT_3 * self.radius
    }
}

impl Lattice for HexLattice {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pitch(&self) -> f64 {
        self.radius
    }

    fn neighbour_count(&self) -> usize {
        6
    }

    fn neighbours(&self, cell: Cell) -> NeighbourList {
        check_cell(cell, self.width, self.height);
        let offsets = if cell.q % 2 == 0 {
            &EVEN_COLUMN_OFFSETS
        } else {
            &ODD_COLUMN_OFFSETS
        };
        wrap_offsets(cell, offsets, self.width, self.height)
    }

    fn cell_center(&self, cell: Cell) -> (f64, f64) {
        check_cell(cell, self.width, self.height);
        let x = f64::from(cell.q) * self.column_spacing();
        let mut y = f64::from(cell.r) * self.row_spacing();
        if cell.q % 2 == 1 {
            y += self.row_spacing() / 2.0;
        }
        (x, y)
    }

    fn cell_vertices(&self, cell: Cell) -> VertexList {
        let (cx, cy) = self.cell_center(cell);
        let mut out = SmallVec::new();
        for k in 0..6 {
            // Pointy-top corners: -30 degrees, then 60-degree steps.
            let angle = -std::f64::consts::FRAC_PI_6 + f64::from(k) * std::f64::consts::FRAC_PI_3;
            out.push((cx + self.radius * angle.cos(), cy + self.radius * angle.sin()));
        }
        out
    }
}
