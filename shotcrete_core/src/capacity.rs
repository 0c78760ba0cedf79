//! # Capacities and Demands
//!
//! Capacity (resistance) and demand formulas for the four failure modes of
//! a shotcrete panel spanning between rock bolts:
//!
//! 1. Adhesion (bond) failure at the rock interface
//! 2. Flexure (two-way slab idealisation)
//! 3. Punching shear at bolt face plates
//! 4. Direct (in-plane) shear of the panel
//!
//! ## Units
//!
//! - Lengths/thicknesses: metres (m)
//! - Strengths: MPa (1 MPa = 1000 kN/m^2)
//! - Uniform loads: kN/m^2
//! - Forces (adhesion, punching, direct shear): kN
//! - Moments (flexure): kN*m per metre width, strip method
//!
//! ## Degradation policy
//!
//! Every formula returns 0.0 when an individually non-physical input is
//! supplied (non-positive spacing, thickness, or strength where required).
//! A zero-capacity mode simply fails its check downstream; a single bad
//! material property never aborts the whole evaluation.
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::capacity::{adhesion_capacity_kn, evaluate_fos};
//!
//! // tau_b = 1 MPa over a 4 * 1.5 * 0.05 = 0.3 m^2 bond ring -> 300 kN
//! let capacity = adhesion_capacity_kn(1.5, 0.05, 1.0);
//! assert_eq!(capacity, 300.0);
//!
//! let (fos, passes) = evaluate_fos(capacity, 100.0);
//! assert_eq!(fos, 3.0);
//! assert!(passes);
//! ```

use crate::units::MPA_TO_KN_M2;

/// Default two-way action reduction on the simply-supported strip moment
pub const DEFAULT_TWO_WAY_FACTOR: f64 = 0.6;

// ============================================================================
// 1) Adhesion (bond)
// ============================================================================

/// Adhesion (bond) capacity as a resultant force (kN), comparable directly
/// with a block weight.
///
/// Perimeter ring model: A_eff = 4 * s * a_bond, C = tau_b * 1000 * A_eff.
/// `a_bond` is the adhesive length, a calibrated parameter from site
/// practice (commonly 30-50 mm). For full-area bond set a_bond = s/2.
pub fn adhesion_capacity_kn(s_m: f64, a_bond_m: f64, tau_b_mpa: f64) -> f64 {
    if s_m <= 0.0 || a_bond_m < 0.0 || tau_b_mpa < 0.0 {
        return 0.0;
    }
    let ring_area_m2 = 4.0 * s_m * a_bond_m;
    tau_b_mpa * MPA_TO_KN_M2 * ring_area_m2
}

// ============================================================================
// 2) Flexure (two-way slab idealisation)
// ============================================================================

/// Bending moment demand per metre width (kN*m/m) for a square panel under
/// uniform load `w`, using a strip method with a two-way reduction:
///
/// M = two_way_factor * w * s^2 / 8
///
/// The 1D strip value w*s^2/8 assumes simple supports; the reduction
/// accounts for two-way action between the bolt lines. Replace the factor
/// with code plate coefficients for fixed/continuous edges if needed.
pub fn flexure_demand_knm(w_kn_m2: f64, s_m: f64, two_way_factor: f64) -> f64 {
    if s_m <= 0.0 || w_kn_m2 < 0.0 {
        return 0.0;
    }
    let m_strip = w_kn_m2 * s_m * s_m / 8.0;
    two_way_factor * m_strip
}

/// Residual flexural capacity per metre width (kN*m/m) from the residual
/// flexural tensile strength f_r:
///
/// Z = t_eff^2 / 6 (unit-width section modulus), M_rd = f_r * 1000 * Z
pub fn flexure_capacity_knm(t_eff_m: f64, f_r_mpa: f64) -> f64 {
    if t_eff_m <= 0.0 || f_r_mpa <= 0.0 {
        return 0.0;
    }
    let z_m3 = t_eff_m * t_eff_m / 6.0;
    f_r_mpa * MPA_TO_KN_M2 * z_m3
}

// ============================================================================
// 3) Punching shear at bolt plates
// ============================================================================

/// Punching shear demand (kN) attributed to a single bolt/plate.
///
/// Tributary assumption: each bolt carries a quarter of the panel load,
/// V = w * s^2 / 4. Adjust the fraction if the bolt layout differs.
pub fn punching_demand_kn(w_kn_m2: f64, s_m: f64) -> f64 {
    if s_m <= 0.0 || w_kn_m2 < 0.0 {
        return 0.0;
    }
    w_kn_m2 * s_m * s_m / 4.0
}

/// Punching shear capacity (kN) around a bolt face plate.
///
/// Effective depth d = 0.9 * t_eff, control perimeter u = 4 * (c + 0.5*d),
/// V_rd = v_rd * 1000 * u * d. Mirrors code-style punching checks with a
/// simplified perimeter.
pub fn punching_capacity_kn(t_eff_m: f64, c_plate_m: f64, v_rd_mpa: f64) -> f64 {
    if t_eff_m <= 0.0 || c_plate_m < 0.0 || v_rd_mpa <= 0.0 {
        return 0.0;
    }
    let d = 0.9 * t_eff_m;
    let u = 4.0 * (c_plate_m + 0.5 * d);
    v_rd_mpa * MPA_TO_KN_M2 * u * d
}

// ============================================================================
// 4) Direct (in-plane) shear
// ============================================================================

/// In-plane shear capacity (kN) along the panel boundary.
///
/// Shear area A_v = 4 * s * t_eff, V_rd = tau_v * 1000 * A_v. Direct shear
/// rarely governs; included for completeness.
pub fn direct_shear_capacity_kn(s_m: f64, t_eff_m: f64, tau_v_mpa: f64) -> f64 {
    if s_m <= 0.0 || t_eff_m <= 0.0 || tau_v_mpa <= 0.0 {
        return 0.0;
    }
    let shear_area_m2 = 4.0 * s_m * t_eff_m;
    tau_v_mpa * MPA_TO_KN_M2 * shear_area_m2
}

// ============================================================================
// Evaluators
// ============================================================================

/// Factor-of-Safety check: (capacity/demand, pass).
///
/// - demand <= 0: the mode trivially passes with FoS = +inf
/// - capacity <= 0 with demand > 0: FoS = 0, fail
pub fn evaluate_fos(capacity: f64, demand: f64) -> (f64, bool) {
    if demand <= 0.0 {
        return (f64::INFINITY, true);
    }
    if capacity <= 0.0 {
        return (0.0, false);
    }
    let fos = capacity / demand;
    (fos, fos >= 1.0)
}

/// LRFD check: utilisation U = (gamma*demand)/(phi*capacity), pass = U <= 1.
///
/// Negative demand is clamped to zero. When phi <= 0, capacity <= 0, or the
/// denominator is otherwise non-positive the check cannot be meaningfully
/// evaluated and returns (+inf, fail) - a conservative default-to-fail,
/// never a silent pass.
pub fn evaluate_lrfd(capacity: f64, demand: f64, phi: f64, gamma: f64) -> (f64, bool) {
    if capacity <= 0.0 || phi <= 0.0 {
        return (f64::INFINITY, false);
    }
    let demand = demand.max(0.0);
    let denominator = phi * capacity;
    if denominator <= 0.0 {
        return (f64::INFINITY, false);
    }
    let utilisation = gamma * demand / denominator;
    (utilisation, utilisation <= 1.0)
}
