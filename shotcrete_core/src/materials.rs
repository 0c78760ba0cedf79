//! # Shotcrete Material Properties
//!
//! Material and interface strengths for the sprayed lining at the selected
//! design age. All strengths are stresses in MPa and are supplied entirely
//! by the caller; the engine never looks values up behind the caller's back.
//!
//! ## Property Summary
//!
//! | Property | Symbol | Role                                         |
//! |----------|--------|----------------------------------------------|
//! | f_c      | f'c    | Compressive strength (reference only)        |
//! | tau_b    | τ_b    | Rock-shotcrete adhesion (bond) strength      |
//! | f_r      | f_r    | Residual flexural tensile strength (SFRS)    |
//! | tau_v    | τ_v    | In-plane shear strength                      |
//! | v_rd     | v_rd   | Punching / diagonal tension design stress    |
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::materials::{ShotcreteMaterial, DesignAge};
//!
//! // Caller-supplied strengths
//! let mat = ShotcreteMaterial::new(30.0, 1.0, 1.2, 1.5, 1.2);
//! assert_eq!(mat.tau_b_mpa, 1.0);
//!
//! // Or start from age-typical values and adjust
//! let early = DesignAge::Early.typical_properties();
//! assert!(early.f_c_mpa < mat.f_c_mpa);
//! ```

use serde::{Deserialize, Serialize};

/// Material properties for shotcrete and the rock interface, at the
/// selected design age. All stresses in MPa. Immutable once constructed.
///
/// ## JSON Example
///
/// ```json
/// {
///   "f_c_mpa": 30.0,
///   "tau_b_mpa": 1.0,
///   "f_r_mpa": 1.2,
///   "tau_v_mpa": 1.5,
///   "v_rd_mpa": 1.2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotcreteMaterial {
    /// Compressive strength at the design age (MPa). Carried for reporting
    /// and code-derived properties; not used directly by the four checks.
    pub f_c_mpa: f64,

    /// Adhesion (bond) strength rock-to-shotcrete (MPa)
    pub tau_b_mpa: f64,

    /// Residual flexural tensile strength for fibre/mesh design (MPa),
    /// compatible with EN 14651 / ASTM C1609 style residuals
    pub f_r_mpa: f64,

    /// In-plane shear strength of the panel (MPa)
    pub tau_v_mpa: f64,

    /// Design diagonal tension / punching shear stress (MPa)
    pub v_rd_mpa: f64,
}

impl ShotcreteMaterial {
    /// Construct from explicit strengths (MPa): f_c, tau_b, f_r, tau_v, v_rd.
    pub fn new(f_c_mpa: f64, tau_b_mpa: f64, f_r_mpa: f64, tau_v_mpa: f64, v_rd_mpa: f64) -> Self {
        ShotcreteMaterial {
            f_c_mpa,
            tau_b_mpa,
            f_r_mpa,
            tau_v_mpa,
            v_rd_mpa,
        }
    }

    /// True when every strength is physically meaningful (> 0).
    ///
    /// A non-physical strength is not an error: the corresponding check
    /// degrades to zero capacity and fails downstream.
    pub fn is_physical(&self) -> bool {
        self.f_c_mpa > 0.0
            && self.tau_b_mpa > 0.0
            && self.f_r_mpa > 0.0
            && self.tau_v_mpa > 0.0
            && self.v_rd_mpa > 0.0
    }
}

impl Default for ShotcreteMaterial {
    /// 28-day generic fibre-reinforced shotcrete
    fn default() -> Self {
        DesignAge::TwentyEightDay.typical_properties()
    }
}

/// Design age for the lining, driving typical starter strengths.
///
/// These presets seed an input form; the caller remains free to override
/// every strength on [`ShotcreteMaterial`] from test data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DesignAge {
    /// Freshly sprayed, first hours to ~1 day
    Early,
    /// Seven days
    SevenDay,
    /// Twenty-eight days (standard design age)
    #[default]
    TwentyEightDay,
}

impl DesignAge {
    pub const ALL: [DesignAge; 3] = [
        DesignAge::Early,
        DesignAge::SevenDay,
        DesignAge::TwentyEightDay,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignAge::Early => "Early age",
            DesignAge::SevenDay => "7 days",
            DesignAge::TwentyEightDay => "28 days",
        }
    }

    /// Short label matching common report conventions
    pub fn label(&self) -> &'static str {
        match self {
            DesignAge::Early => "Early",
            DesignAge::SevenDay => "7d",
            DesignAge::TwentyEightDay => "28d",
        }
    }

    /// Typical starter strengths at this age (MPa).
    ///
    /// Early-age bond and residual strengths are a fraction of the 28-day
    /// values; these numbers are deliberately conservative starters, not a
    /// substitute for site testing.
    pub fn typical_properties(&self) -> ShotcreteMaterial {
        match self {
            DesignAge::Early => ShotcreteMaterial::new(5.0, 0.2, 0.4, 0.5, 0.4),
            DesignAge::SevenDay => ShotcreteMaterial::new(20.0, 0.7, 0.9, 1.1, 0.9),
            DesignAge::TwentyEightDay => ShotcreteMaterial::new(30.0, 1.0, 1.2, 1.5, 1.2),
        }
    }
}

impl std::fmt::Display for DesignAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
