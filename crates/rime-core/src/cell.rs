//! Lattice cell coordinates.

use std::fmt;

/// A cell position on a two-dimensional lattice.
///
/// `q` runs along the drawing x axis and `r` along the drawing y axis. The
/// interpretation of the pair is lattice-specific: axial column/row on the
/// hexagonal lattice, offset column/row on the triangular and square
/// lattices. Coordinates are plain `i32`s; lattices wrap out-of-range values
/// into extent through their periodic boundary when resolving neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column coordinate (x axis).
    pub q: i32,
    /// Row coordinate (y axis).
    pub r: i32,
}

impl Cell {
    /// Create a cell at `(q, r)`.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The cell displaced by `(dq, dr)`, without any boundary wrapping.
    pub const fn offset(self, dq: i32, dr: i32) -> Self {
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}
