//! The melt/crystal phase of a lattice cell.

use std::fmt;

/// Phase of a single lattice cell.
///
/// Every cell starts as [`Phase::Melt`] except the seed cluster. The growth
/// pass is the only writer, and it only ever moves cells from melt to
/// crystal; a crystal cell never reverts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Undercooled liquid, free to solidify.
    #[default]
    Melt,
    /// Solidified. Temperature is pinned to the melting point.
    Crystal,
}

impl Phase {
    /// True iff the cell has solidified.
    pub const fn is_crystal(self) -> bool {
        matches!(self, Self::Crystal)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Melt => write!(f, "melt"),
            Self::Crystal => write!(f, "crystal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_melt() {
        assert_eq!(Phase::default(), Phase::Melt);
        assert!(!Phase::default().is_crystal());
    }

    #[test]
    fn crystal_is_crystal() {
        assert!(Phase::Crystal.is_crystal());
    }
}
