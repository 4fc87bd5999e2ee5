//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the constructor input for
//! [`CrystalEngine`](crate::CrystalEngine). The tunable subset lives in
//! [`GrowthParams`] so it can also be re-supplied between steps via
//! [`set_params`](crate::CrystalEngine::set_params); the remaining fields
//! are fixed for the life of the engine.

use std::error::Error;
use std::fmt;

// ── GrowthParams ───────────────────────────────────────────────────

/// The tunable parameter set.
///
/// These four values may change over the life of an engine through
/// [`CrystalEngine::set_params`](crate::CrystalEngine::set_params);
/// everything else in [`EngineConfig`] is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthParams {
    /// Melting point. Crystal cells pin to this temperature. Default: 0.0.
    pub t_m: f64,
    /// Baseline freezing threshold before directional modulation.
    /// Default: -1.0.
    pub base_growth_threshold: f64,
    /// Strength of the 4-fold directional modulation. Zero gives an
    /// isotropic threshold. Default: 0.4.
    pub anisotropy_factor: f64,
    /// Jacobi relaxation passes per engine step. Default: 5.
    pub relax_iterations: u32,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            t_m: 0.0,
            base_growth_threshold: -1.0,
            anisotropy_factor: 0.4,
            relax_iterations: 5,
        }
    }
}

impl GrowthParams {
    /// Check that every floating-point parameter is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("t_m", self.t_m),
            ("base_growth_threshold", self.base_growth_threshold),
            ("anisotropy_factor", self.anisotropy_factor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }

    /// Validate finiteness plus the ordering against the ambient temperature.
    ///
    /// The undercooling `t_m - t_infty` must be strictly positive: it drives
    /// all growth and is the denominator of
    /// [`normalized_temperature`](crate::CrystalEngine::normalized_temperature).
    pub(crate) fn validate_with_ambient(&self, t_infty: f64) -> Result<(), ConfigError> {
        self.validate()?;
        if t_infty >= self.t_m {
            return Err(ConfigError::AmbientNotBelowMelting {
                t_infty,
                t_m: self.t_m,
            });
        }
        Ok(())
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete construction input for a [`CrystalEngine`](crate::CrystalEngine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Ambient melt temperature far from the crystal. Must be strictly
    /// below `params.t_m`. Default: -10.0.
    pub t_infty: f64,
    /// The tunable parameter set.
    pub params: GrowthParams,
    /// RNG seed. Two engines built over the same lattice with the same
    /// config produce identical histories. Default: 0.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            t_infty: -10.0,
            params: GrowthParams::default(),
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Validate all parameters: finiteness and `t_infty < params.t_m`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.t_infty.is_finite() {
            return Err(ConfigError::NonFiniteParameter {
                name: "t_infty",
                value: self.t_infty,
            });
        }
        self.params.validate_with_ambient(self.t_infty)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`] or
/// [`set_params`](crate::CrystalEngine::set_params).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A floating-point parameter is NaN or infinite.
    NonFiniteParameter {
        /// Which parameter failed.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The ambient temperature is not strictly below the melting point:
    /// the melt is not undercooled, nothing can freeze, and the
    /// temperature normalization would divide by zero.
    AmbientNotBelowMelting {
        /// The configured ambient temperature.
        t_infty: f64,
        /// The configured melting point.
        t_m: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteParameter { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::AmbientNotBelowMelting { t_infty, t_m } => {
                write!(
                    f,
                    "ambient temperature {t_infty} must be strictly below the melting point {t_m}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
