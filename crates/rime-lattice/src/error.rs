//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors reported when constructing a lattice.
///
/// All validation happens at construction time. Once built, a lattice is
/// immutable and its queries cannot fail; out-of-range coordinates passed to
/// query methods are programming errors and panic.
#[derive(Clone, Debug, PartialEq)]
pub enum LatticeError {
    /// An axis extent is below the minimum of 3 cells.
    ///
    /// The seed cluster occupies a cell and two of its neighbours; with
    /// fewer than 3 cells per axis the periodic wrap folds the cluster onto
    /// itself.
    ExtentTooSmall {
        /// Axis name ("width" or "height").
        axis: &'static str,
        /// The offending extent.
        value: u32,
        /// Minimum accepted extent.
        min: u32,
    },
    /// An axis extent exceeds `i32::MAX` (coordinates are `i32`).
    ExtentTooLarge {
        /// Axis name ("width" or "height").
        axis: &'static str,
        /// The offending extent.
        value: u32,
        /// Maximum accepted extent.
        max: u32,
    },
    /// The cell pitch is not a positive finite number.
    InvalidPitch {
        /// The offending pitch.
        value: f64,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentTooSmall { axis, value, min } => {
                write!(f, "{axis} is {value}, below the minimum of {min} cells")
            }
            Self::ExtentTooLarge { axis, value, max } => {
                write!(f, "{axis} is {value}, exceeding the maximum of {max} cells")
            }
            Self::InvalidPitch { value } => {
                write!(f, "cell pitch {value} is not a positive finite number")
            }
        }
    }
}

impl Error for LatticeError {}
