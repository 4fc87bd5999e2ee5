//! Lattice trait compliance test helpers.
//!
//! These functions verify that a `Lattice` implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules (HexLattice, TriLattice, SquareLattice).
//!
//! Neighbour symmetry is a separate entry point: the hex and triangle
//! parities cannot tile an odd torus, so backends only assert it on extents
//! where their parity axis is even.

use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Assert every cell has exactly `neighbour_count` distinct neighbours,
/// none of them the cell itself.
pub fn assert_neighbour_cardinality(lattice: &dyn Lattice) {
    for cell in lattice.canonical_ordering() {
        let n = lattice.neighbours(cell);
        assert_eq!(
            n.len(),
            lattice.neighbour_count(),
            "cell {cell} has {} neighbours, expected {}",
            n.len(),
            lattice.neighbour_count()
        );
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "cell {cell} has duplicate neighbours");
        assert!(!n.contains(&cell), "cell {cell} is its own neighbour");
    }
}

/// Assert every neighbour coordinate is wrapped into the grid.
pub fn assert_neighbours_in_range(lattice: &dyn Lattice) {
    let (w, h) = (lattice.width() as i32, lattice.height() as i32);
    for cell in lattice.canonical_ordering() {
        for nb in lattice.neighbours(cell) {
            assert!(
                nb.q >= 0 && nb.q < w && nb.r >= 0 && nb.r < h,
                "neighbour {nb} of {cell} falls outside q in [0, {w}), r in [0, {h})"
            );
        }
    }
}

/// Assert two neighbour queries for the same cell return the same list.
pub fn assert_neighbours_deterministic(lattice: &dyn Lattice) {
    for cell in lattice.canonical_ordering() {
        assert_eq!(
            lattice.neighbours(cell),
            lattice.neighbours(cell),
            "neighbours({cell}) is non-deterministic"
        );
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(lattice: &dyn Lattice) {
    for cell in lattice.canonical_ordering() {
        for nb in lattice.neighbours(cell) {
            assert!(
                lattice.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(lattice: &dyn Lattice) {
    let a = lattice.canonical_ordering();
    let b = lattice.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique cells.
pub fn assert_canonical_ordering_complete(lattice: &dyn Lattice) {
    let ordering = lattice.canonical_ordering();
    assert_eq!(
        ordering.len(),
        lattice.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        lattice.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        lattice.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that `index_of` inverts the canonical ordering.
pub fn assert_index_matches_ordering(lattice: &dyn Lattice) {
    for (i, cell) in lattice.canonical_ordering().into_iter().enumerate() {
        assert_eq!(
            lattice.index_of(cell),
            i,
            "index_of({cell}) disagrees with canonical position {i}"
        );
    }
}

/// Run every check except neighbour symmetry.
pub fn run_basic_compliance(lattice: &dyn Lattice) {
    assert_neighbour_cardinality(lattice);
    assert_neighbours_in_range(lattice);
    assert_neighbours_deterministic(lattice);
    assert_canonical_ordering_deterministic(lattice);
    assert_canonical_ordering_complete(lattice);
    assert_index_matches_ordering(lattice);
}

/// Run all checks, including neighbour symmetry.
pub fn run_full_compliance(lattice: &dyn Lattice) {
    run_basic_compliance(lattice);
    assert_neighbours_symmetric(lattice);
}
