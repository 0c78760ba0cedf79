//! # Rock-Block Load Models
//!
//! Converts a geometric idealisation of an unstable rock block into (a) its
//! total weight as a resultant force and (b) an equivalent uniform pressure
//! over the square tributary panel spanning between four bolts.
//!
//! ## Geometry conventions
//!
//! - Bolt spacing `s` defines a square tributary panel s x s (m).
//! - For wedges, the apex sits above the panel centre; faces are planar.
//! - `theta_deg` is measured from the HORIZONTAL base plane to the wedge
//!   face along the panel midline (0 deg = flat, 90 deg = vertical). The
//!   pyramid height is then h = (s/2)*tan(theta) and the volume
//!   V = s^2 * h / 3. The angle is not clamped: a theta approaching 90 deg
//!   propagates as an extreme weight, not an error.
//!
//! ## Variants
//!
//! - [`PanelLoadModel::PyramidalWedge`] - conservative steep pyramid
//! - [`PanelLoadModel::FlatBlock`] - bedded/flat-lying strata block
//! - [`PanelLoadModel::ShaleWedge`] - wedge with variable bedding angle
//!   (same geometry as the pyramid, but theta is always explicit)
//!
//! This module is the only component permitted to raise for malformed
//! input; everything downstream degrades to zero/failing values.
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::loads::{PanelLoadModel, LoadOptions, compute_panel_load};
//!
//! let model = PanelLoadModel::FlatBlock { h_block_m: 0.6 };
//! let load = compute_panel_load(&model, 1.5, 25.0, &LoadOptions::default()).unwrap();
//!
//! // V = 1.5^2 * 0.6 = 1.35 m^3, W = 33.75 kN, w = 15 kN/m^2
//! assert!((load.total_weight_kn - 33.75).abs() < 1e-9);
//! assert!((load.uniform_pressure_kn_m2 - 15.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, DesignError};

/// Typical shotcrete unit weight (kN/m^3)
pub const GAMMA_SHOTCRETE_KN_M3: f64 = 24.0;

/// Geometric idealisation of the unstable block over one panel.
///
/// A payload-carrying sum type: each variant owns exactly the parameters it
/// uses, so a flat block cannot be handed a wedge angle and a wedge cannot
/// be handed a block height.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "PyramidalWedge", "theta_deg": 60.0 }
/// { "type": "FlatBlock", "h_block_m": 0.6 }
/// { "type": "ShaleWedge", "theta_deg": 50.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PanelLoadModel {
    /// Steep pyramidal wedge (classically taken near 60 deg sides)
    PyramidalWedge {
        /// Side angle from horizontal to the wedge face (deg)
        theta_deg: f64,
    },
    /// Flat rectangular block representing bedded, flat-lying strata
    FlatBlock {
        /// Assumed block thickness/height (m); must be > 0
        h_block_m: f64,
    },
    /// Shale wedge with variable bedding-plane side angle
    ShaleWedge {
        /// Side angle from horizontal (deg); always explicit, no default
        theta_deg: f64,
    },
}

impl PanelLoadModel {
    /// Short name for reports and chart legends
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelLoadModel::PyramidalWedge { .. } => "Pyramidal wedge",
            PanelLoadModel::FlatBlock { .. } => "Flat block",
            PanelLoadModel::ShaleWedge { .. } => "Shale wedge",
        }
    }
}

impl std::fmt::Display for PanelLoadModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelLoadModel::PyramidalWedge { theta_deg } => {
                write!(f, "Pyramidal wedge (theta = {theta_deg} deg)")
            }
            PanelLoadModel::FlatBlock { h_block_m } => {
                write!(f, "Flat block (h = {h_block_m} m)")
            }
            PanelLoadModel::ShaleWedge { theta_deg } => {
                write!(f, "Shale wedge (theta = {theta_deg} deg)")
            }
        }
    }
}

/// Optional load terms added on top of the rock-block weight.
///
/// Defaults exclude everything: no surcharge, no shotcrete self-weight.
/// The orchestrator always evaluates with the defaults so the load stays
/// ground-dominant and comparable across scenarios; consumers running the
/// load model directly may opt in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Uniform surcharge (kN/m^2), integrated over the panel area.
    /// Water, equipment, etc. Default 0.0.
    pub surcharge_kn_m2: f64,

    /// Include the shotcrete self-weight term t * s^2 * gamma_sc.
    /// Default false.
    pub include_shotcrete_self_weight: bool,

    /// Shotcrete thickness for the self-weight term (m). Ignored unless
    /// `include_shotcrete_self_weight` is set. Default 0.0.
    pub t_shotcrete_m: f64,

    /// Shotcrete unit weight (kN/m^3). Default [`GAMMA_SHOTCRETE_KN_M3`].
    pub gamma_shotcrete_kn_m3: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            surcharge_kn_m2: 0.0,
            include_shotcrete_self_weight: false,
            t_shotcrete_m: 0.0,
            gamma_shotcrete_kn_m3: GAMMA_SHOTCRETE_KN_M3,
        }
    }
}

impl LoadOptions {
    /// Add a uniform surcharge (builder pattern)
    pub fn with_surcharge(mut self, surcharge_kn_m2: f64) -> Self {
        self.surcharge_kn_m2 = surcharge_kn_m2;
        self
    }

    /// Include shotcrete self-weight at the given thickness (builder pattern)
    pub fn with_self_weight(mut self, t_shotcrete_m: f64) -> Self {
        self.include_shotcrete_self_weight = true;
        self.t_shotcrete_m = t_shotcrete_m;
        self
    }
}

/// Computed panel load: resultant weight and equivalent uniform pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLoad {
    /// Total block weight including any opted-in terms (kN)
    pub total_weight_kn: f64,

    /// Equivalent uniform pressure W / s^2 (kN/m^2)
    pub uniform_pressure_kn_m2: f64,
}

/// Convert a discrete block weight W (kN) on a square s x s panel into an
/// equivalent uniform pressure w = W / s^2 (kN/m^2).
pub fn uniform_pressure_from_weight(weight_kn: f64, s_m: f64) -> CalcResult<f64> {
    if s_m <= 0.0 {
        return Err(DesignError::invalid_input(
            "s_m",
            s_m.to_string(),
            "Bolt spacing must be > 0",
        ));
    }
    Ok(weight_kn / (s_m * s_m))
}

fn validate_panel(s_m: f64, gamma_rock_kn_m3: f64) -> CalcResult<()> {
    if s_m <= 0.0 {
        return Err(DesignError::invalid_input(
            "s_m",
            s_m.to_string(),
            "Bolt spacing must be > 0",
        ));
    }
    if gamma_rock_kn_m3 <= 0.0 {
        return Err(DesignError::invalid_input(
            "gamma_rock_kn_m3",
            gamma_rock_kn_m3.to_string(),
            "Rock unit weight must be > 0",
        ));
    }
    Ok(())
}

/// Surcharge and optional self-weight terms shared by all variants (kN).
fn optional_terms_kn(s_m: f64, options: &LoadOptions) -> f64 {
    let area = s_m * s_m;
    let surcharge = if options.surcharge_kn_m2 > 0.0 {
        options.surcharge_kn_m2 * area
    } else {
        0.0
    };
    let self_weight = if options.include_shotcrete_self_weight && options.t_shotcrete_m > 0.0 {
        options.t_shotcrete_m * area * options.gamma_shotcrete_kn_m3
    } else {
        0.0
    };
    surcharge + self_weight
}

/// Weight of a square pyramidal wedge with side angle `theta_deg` from the
/// horizontal: h = (s/2)*tan(theta), V = s^2*h/3, W = V*gamma_rock.
pub fn pyramid_block_load(
    s_m: f64,
    gamma_rock_kn_m3: f64,
    theta_deg: f64,
    options: &LoadOptions,
) -> CalcResult<PanelLoad> {
    validate_panel(s_m, gamma_rock_kn_m3)?;

    let h = 0.5 * s_m * theta_deg.to_radians().tan();
    let volume = s_m * s_m * h / 3.0;
    let total_weight_kn = volume * gamma_rock_kn_m3 + optional_terms_kn(s_m, options);

    Ok(PanelLoad {
        total_weight_kn,
        uniform_pressure_kn_m2: uniform_pressure_from_weight(total_weight_kn, s_m)?,
    })
}

/// Weight of a flat rectangular block: V = s^2 * h_block, W = V*gamma_rock.
/// Requires h_block > 0.
pub fn flat_block_load(
    s_m: f64,
    gamma_rock_kn_m3: f64,
    h_block_m: f64,
    options: &LoadOptions,
) -> CalcResult<PanelLoad> {
    validate_panel(s_m, gamma_rock_kn_m3)?;
    if h_block_m <= 0.0 {
        return Err(DesignError::invalid_input(
            "h_block_m",
            h_block_m.to_string(),
            "Flat block height must be > 0",
        ));
    }

    let volume = s_m * s_m * h_block_m;
    let total_weight_kn = volume * gamma_rock_kn_m3 + optional_terms_kn(s_m, options);

    Ok(PanelLoad {
        total_weight_kn,
        uniform_pressure_kn_m2: uniform_pressure_from_weight(total_weight_kn, s_m)?,
    })
}

/// Shale wedge with an explicit side angle. Same geometry as the pyramid;
/// theta represents the variable bedding-plane angle and has no default.
pub fn shale_wedge_load(
    s_m: f64,
    gamma_rock_kn_m3: f64,
    theta_deg: f64,
    options: &LoadOptions,
) -> CalcResult<PanelLoad> {
    pyramid_block_load(s_m, gamma_rock_kn_m3, theta_deg, options)
}

/// Dispatch over the selected model to compute (W_total, w_uniform).
pub fn compute_panel_load(
    model: &PanelLoadModel,
    s_m: f64,
    gamma_rock_kn_m3: f64,
    options: &LoadOptions,
) -> CalcResult<PanelLoad> {
    match model {
        PanelLoadModel::PyramidalWedge { theta_deg } => {
            pyramid_block_load(s_m, gamma_rock_kn_m3, *theta_deg, options)
        }
        PanelLoadModel::FlatBlock { h_block_m } => {
            flat_block_load(s_m, gamma_rock_kn_m3, *h_block_m, options)
        }
        PanelLoadModel::ShaleWedge { theta_deg } => {
            shale_wedge_load(s_m, gamma_rock_kn_m3, *theta_deg, options)
        }
    }
}
