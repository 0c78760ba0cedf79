//! # Design Conventions and Factors
//!
//! Selects between Factor-of-Safety and Load-and-Resistance-Factor design
//! and carries the strength-reduction/load factors plus the durability
//! thickness deduction.
//!
//! ## Overview
//!
//! - [`DesignConvention`] - FoS vs LRFD pass/fail logic
//! - [`DesignFactors`] - phi factors, load factor, durability deduction
//!
//! Under FoS the phi factors and load factor are unused; under LRFD they
//! must all be positive ([`DesignFactors::validate`]).
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::factors::{DesignConvention, DesignFactors};
//!
//! let factors = DesignFactors::default();          // FoS, phi = 0.6, gamma = 1.5
//! assert_eq!(factors.convention, DesignConvention::FactorOfSafety);
//!
//! let lrfd = DesignFactors::default().with_convention(DesignConvention::Lrfd);
//! assert!(lrfd.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, DesignError};

/// Design convention selection.
///
/// The convention drives which evaluator runs and how pass/fail is decided:
/// FoS passes on capacity/demand >= 1.0, LRFD passes on utilisation <= 1.0.
/// Both share 1.0 as the boundary value, which is why chart collaborators
/// can draw a single reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DesignConvention {
    /// Factor-of-Safety design - unfactored demand, safety margin on the ratio
    #[default]
    FactorOfSafety,
    /// Load and Resistance Factor Design - factored demand vs reduced capacity
    Lrfd,
}

impl DesignConvention {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignConvention::FactorOfSafety => "FoS (Factor of Safety)",
            DesignConvention::Lrfd => "LRFD (Load and Resistance Factor Design)",
        }
    }

    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignConvention::FactorOfSafety => "FOS",
            DesignConvention::Lrfd => "LRFD",
        }
    }
}

impl std::fmt::Display for DesignConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Design factors and durability allowance.
///
/// ## JSON Example
///
/// ```json
/// {
///   "convention": "Lrfd",
///   "phi_flexure": 0.6,
///   "phi_shear": 0.6,
///   "phi_punching": 0.6,
///   "phi_adhesion": null,
///   "gamma_load": 1.5,
///   "t_dur_deduction_m": 0.01
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignFactors {
    /// FoS or LRFD; drives result presentation and pass/fail logic
    pub convention: DesignConvention,

    /// Strength reduction factor for flexure (LRFD only)
    pub phi_flexure: f64,

    /// Strength reduction factor for in-plane shear (LRFD only)
    pub phi_shear: f64,

    /// Strength reduction factor for punching/diagonal tension (LRFD only)
    pub phi_punching: f64,

    /// Dedicated strength reduction factor for adhesion (LRFD only).
    ///
    /// No code defines one; when `None` the adhesion check reuses
    /// `phi_shear` as a conservative substitution.
    #[serde(default)]
    pub phi_adhesion: Option<f64>,

    /// Load factor applied to demands (LRFD only)
    pub gamma_load: f64,

    /// Thickness deduction for durability/long-term degradation (m).
    /// 0.0 if not applicable. Applies under both conventions.
    pub t_dur_deduction_m: f64,
}

impl Default for DesignFactors {
    fn default() -> Self {
        DesignFactors {
            convention: DesignConvention::FactorOfSafety,
            phi_flexure: 0.6,
            phi_shear: 0.6,
            phi_punching: 0.6,
            phi_adhesion: None,
            gamma_load: 1.5,
            t_dur_deduction_m: 0.0,
        }
    }
}

impl DesignFactors {
    /// Switch the convention (builder pattern)
    pub fn with_convention(mut self, convention: DesignConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Set the durability thickness deduction in metres (builder pattern)
    pub fn with_durability_deduction(mut self, deduction_m: f64) -> Self {
        self.t_dur_deduction_m = deduction_m;
        self
    }

    /// Set a dedicated adhesion reduction factor (builder pattern)
    pub fn with_phi_adhesion(mut self, phi: f64) -> Self {
        self.phi_adhesion = Some(phi);
        self
    }

    /// The reduction factor the adhesion check should use: the dedicated
    /// factor when one is configured, otherwise the shear factor.
    pub fn phi_for_adhesion(&self) -> f64 {
        self.phi_adhesion.unwrap_or(self.phi_shear)
    }

    /// Validate factor positivity.
    ///
    /// Reduction factors and the load factor must be positive when LRFD is
    /// selected; under FoS they are unused and not checked.
    pub fn validate(&self) -> CalcResult<()> {
        if self.convention == DesignConvention::Lrfd {
            for (name, value) in [
                ("phi_flexure", self.phi_flexure),
                ("phi_shear", self.phi_shear),
                ("phi_punching", self.phi_punching),
                ("phi_adhesion", self.phi_for_adhesion()),
                ("gamma_load", self.gamma_load),
            ] {
                if value <= 0.0 {
                    return Err(DesignError::invalid_input(
                        name,
                        value.to_string(),
                        "Must be positive under the LRFD convention",
                    ));
                }
            }
        }
        if self.t_dur_deduction_m < 0.0 {
            return Err(DesignError::invalid_input(
                "t_dur_deduction_m",
                self.t_dur_deduction_m.to_string(),
                "Durability deduction cannot be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_convention() {
        let factors = DesignFactors::default();
        assert_eq!(factors.convention, DesignConvention::FactorOfSafety);
        assert_eq!(factors.phi_flexure, 0.6);
        assert_eq!(factors.gamma_load, 1.5);
        assert_eq!(factors.t_dur_deduction_m, 0.0);
    }

    #[test]
    fn test_adhesion_reuses_shear_phi() {
        let factors = DesignFactors::default();
        assert_eq!(factors.phi_for_adhesion(), factors.phi_shear);

        let dedicated = factors.with_phi_adhesion(0.5);
        assert_eq!(dedicated.phi_for_adhesion(), 0.5);
    }

    #[test]
    fn test_lrfd_requires_positive_factors() {
        let mut factors = DesignFactors::default().with_convention(DesignConvention::Lrfd);
        assert!(factors.validate().is_ok());

        factors.phi_punching = 0.0;
        assert!(factors.validate().is_err());
    }

    #[test]
    fn test_fos_ignores_factor_values() {
        // Unused under FoS, so zero factors validate fine
        let mut factors = DesignFactors::default();
        factors.phi_flexure = 0.0;
        factors.gamma_load = 0.0;
        assert!(factors.validate().is_ok());
    }

    #[test]
    fn test_negative_deduction_rejected() {
        let factors = DesignFactors::default().with_durability_deduction(-0.01);
        assert!(factors.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let factors = DesignFactors::default()
            .with_convention(DesignConvention::Lrfd)
            .with_phi_adhesion(0.55);
        let json = serde_json::to_string(&factors).unwrap();
        let roundtrip: DesignFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(factors, roundtrip);
    }

    #[test]
    fn test_convention_codes() {
        assert_eq!(DesignConvention::FactorOfSafety.code(), "FOS");
        assert_eq!(DesignConvention::Lrfd.to_string(), "LRFD");
    }
}
