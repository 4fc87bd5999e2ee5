//! Periodic boundary arithmetic.

use crate::lattice::NeighbourList;
use rime_core::Cell;

/// Wrap a coordinate into `[0, extent)` under the periodic boundary.
///
/// Accepts any `i32`, including negatives and values many multiples of
/// `extent` out of range; `wrap(c + k * extent, extent) == wrap(c, extent)`
/// for every `k`. The arithmetic widens to `i64` so no input can overflow.
///
/// # Examples
///
/// ```
/// use rime_lattice::periodic::wrap;
///
/// assert_eq!(wrap(5, 5), 0);
/// assert_eq!(wrap(-1, 5), 4);
/// assert_eq!(wrap(-13, 5), 2);
/// assert_eq!(wrap(3, 5), 3);
/// ```
#[inline]
pub fn wrap(coord: i32, extent: u32) -> i32 {
    let n = i64::from(extent);
    (((i64::from(coord) % n) + n) % n) as i32
}

/// Wrap both axes of a cell into a `width` by `height` grid.
#[inline]
pub fn wrap_cell(cell: Cell, width: u32, height: u32) -> Cell {
    Cell::new(wrap(cell.q, width), wrap(cell.r, height))
}

/// Apply a fixed offset table to a cell, wrapping each result.
///
/// Shared by the lattice backends: the offsets define the topology, the
/// wrap closes it into a torus.
pub(crate) fn wrap_offsets(
    cell: Cell,
    offsets: &[(i32, i32)],
    width: u32,
    height: u32,
) -> NeighbourList {
    offsets
        .iter()
        .map(|&(dq, dr)| wrap_cell(cell.offset(dq, dr), width, height))
        .collect()
}
