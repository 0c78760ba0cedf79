//! # Design Orchestrator
//!
//! The single entry point of the engine: [`evaluate`] takes a
//! [`DesignInput`], builds the panel load from the selected block model,
//! runs demand/capacity for each of the four failure modes, applies FoS or
//! LRFD logic per the input's factors, and returns a [`DesignResult`] with
//! per-mode details and the governing outcome.
//!
//! The function has no side effects and no shared state between calls, so
//! a consumer sweeping a parameter may call it from worker threads freely.
//!
//! ## Per-mode conventions
//!
//! - Adhesion:     demand = W_total (kN), capacity from the bond ring (kN)
//! - Flexure:      demand = M (kN*m/m), capacity = M_rd (kN*m/m)
//! - Punching:     demand = V at one bolt (kN), capacity = V_rd (kN)
//! - Direct shear: demand = W_total (kN), capacity = V_rd (kN)
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::design::{DesignInput, evaluate};
//! use shotcrete_core::loads::PanelLoadModel;
//!
//! let input = DesignInput::new(1.5, 0.10, 0.25, 25.0,
//!     PanelLoadModel::PyramidalWedge { theta_deg: 60.0 });
//! let result = evaluate(&input).unwrap();
//!
//! println!("{}", result.summary());
//! assert!(result.governing_value > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::capacity::{
    adhesion_capacity_kn, direct_shear_capacity_kn, evaluate_fos, evaluate_lrfd,
    flexure_capacity_knm, flexure_demand_knm, punching_capacity_kn, punching_demand_kn,
    DEFAULT_TWO_WAY_FACTOR,
};
use crate::errors::{CalcResult, DesignError};
use crate::factors::{DesignConvention, DesignFactors};
use crate::geology::GeologyPreset;
use crate::loads::{compute_panel_load, LoadOptions, PanelLoadModel};
use crate::materials::ShotcreteMaterial;

/// Default adhesive (bond) length (m). Commonly 30-50 mm; treat as a
/// calibrated parameter from site practice.
pub const DEFAULT_A_BOND_M: f64 = 0.05;

/// The four failure modes checked for every design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureMode {
    /// Bond failure at the rock-shotcrete interface
    Adhesion,
    /// Two-way bending of the panel between bolts
    Flexure,
    /// Punching shear around a bolt face plate
    Punching,
    /// In-plane shear along the panel boundary
    DirectShear,
}

impl FailureMode {
    /// Evaluation order. Governing selection iterates this order and keeps
    /// the first mode on ties, so callers must not assume which of two
    /// numerically-equal modes is reported.
    pub const ALL: [FailureMode; 4] = [
        FailureMode::Adhesion,
        FailureMode::Flexure,
        FailureMode::Punching,
        FailureMode::DirectShear,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            FailureMode::Adhesion => "Adhesion",
            FailureMode::Flexure => "Flexure",
            FailureMode::Punching => "Punching",
            FailureMode::DirectShear => "Direct shear",
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// All user-selectable inputs needed to execute the design checks.
///
/// ## JSON Example
///
/// ```json
/// {
///   "s_m": 1.5,
///   "t_m": 0.10,
///   "c_m": 0.25,
///   "gamma_rock_kn_m3": 25.0,
///   "load_model": { "type": "PyramidalWedge", "theta_deg": 60.0 },
///   "a_bond_m": 0.05,
///   "materials": { "f_c_mpa": 30.0, "tau_b_mpa": 1.0, "f_r_mpa": 1.2,
///                  "tau_v_mpa": 1.5, "v_rd_mpa": 1.2 },
///   "factors": { "convention": "FactorOfSafety", "phi_flexure": 0.6,
///                "phi_shear": 0.6, "phi_punching": 0.6,
///                "gamma_load": 1.5, "t_dur_deduction_m": 0.0 },
///   "geology": "Generic",
///   "age_label": "28d",
///   "notes": ""
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Bolt spacing, panel side length (m); must be > 0
    pub s_m: f64,

    /// Nominal shotcrete thickness (m); must be > 0
    pub t_m: f64,

    /// Effective bearing/plate width around a bolt (m); must be >= 0
    pub c_m: f64,

    /// Rock unit weight (kN/m^3); must be > 0
    pub gamma_rock_kn_m3: f64,

    /// Geometric idealisation of the unstable block
    pub load_model: PanelLoadModel,

    /// Adhesive (bond) length for the adhesion ring (m)
    #[serde(default = "default_a_bond")]
    pub a_bond_m: f64,

    /// Material strengths at the design age
    pub materials: ShotcreteMaterial,

    /// Design convention, reduction/load factors, durability deduction
    pub factors: DesignFactors,

    /// Geology preset tag. Advisory/traceability only; never read by
    /// [`evaluate`].
    #[serde(default)]
    pub geology: GeologyPreset,

    /// Descriptive age label (e.g. "Early", "7d", "28d"). Pass-through.
    #[serde(default)]
    pub age_label: String,

    /// Free-form notes carried into reports for traceability. Pass-through.
    #[serde(default)]
    pub notes: String,
}

fn default_a_bond() -> f64 {
    DEFAULT_A_BOND_M
}

impl DesignInput {
    /// Construct with default materials, factors, and bond length.
    pub fn new(
        s_m: f64,
        t_m: f64,
        c_m: f64,
        gamma_rock_kn_m3: f64,
        load_model: PanelLoadModel,
    ) -> Self {
        DesignInput {
            s_m,
            t_m,
            c_m,
            gamma_rock_kn_m3,
            load_model,
            a_bond_m: DEFAULT_A_BOND_M,
            materials: ShotcreteMaterial::default(),
            factors: DesignFactors::default(),
            geology: GeologyPreset::default(),
            age_label: "28d".to_string(),
            notes: String::new(),
        }
    }

    /// Effective thickness after durability deduction, never negative.
    /// Recomputed on demand; never cached.
    pub fn effective_thickness_m(&self) -> f64 {
        let t_eff = self.t_m - self.factors.t_dur_deduction_m.max(0.0);
        t_eff.max(0.0)
    }

    /// Full-form validation for presentation layers.
    ///
    /// [`evaluate`] itself only raises through the load model; this method
    /// lets a UI reject a form before evaluation with a field-level message.
    pub fn validate(&self) -> CalcResult<()> {
        if self.s_m <= 0.0 {
            return Err(DesignError::invalid_input(
                "s_m",
                self.s_m.to_string(),
                "Bolt spacing must be positive",
            ));
        }
        if self.t_m <= 0.0 {
            return Err(DesignError::invalid_input(
                "t_m",
                self.t_m.to_string(),
                "Thickness must be positive",
            ));
        }
        if self.c_m < 0.0 {
            return Err(DesignError::invalid_input(
                "c_m",
                self.c_m.to_string(),
                "Plate width cannot be negative",
            ));
        }
        if self.gamma_rock_kn_m3 <= 0.0 {
            return Err(DesignError::invalid_input(
                "gamma_rock_kn_m3",
                self.gamma_rock_kn_m3.to_string(),
                "Rock unit weight must be positive",
            ));
        }
        if self.a_bond_m < 0.0 {
            return Err(DesignError::invalid_input(
                "a_bond_m",
                self.a_bond_m.to_string(),
                "Bond length cannot be negative",
            ));
        }
        self.factors.validate()
    }
}

/// Demand vs capacity outcome for a single failure mode.
///
/// Exactly one of `fos`/`utilisation` is populated, per the convention
/// active at evaluation time. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeResult {
    /// Demand: force (kN) or moment (kN*m/m) depending on the mode
    pub demand: f64,

    /// Capacity in the same dimension system as `demand`
    pub capacity: f64,

    /// Capacity / demand, under the FoS convention
    pub fos: Option<f64>,

    /// (gamma*demand) / (phi*capacity), under LRFD
    pub utilisation: Option<f64>,

    /// Result of the governing criterion for the active convention
    pub passes: bool,

    /// Human-readable derivation note (formula and key parameters)
    pub detail: String,
}

impl ModeResult {
    /// The convention-active value: FoS or utilisation.
    pub fn governing_metric(&self) -> f64 {
        self.fos.or(self.utilisation).unwrap_or(0.0)
    }
}

/// Derived scalars carried on the result for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    /// Effective thickness after durability deduction (m)
    pub t_eff_m: f64,

    /// Total rock-block weight on the panel (kN)
    pub total_weight_kn: f64,

    /// Equivalent uniform panel pressure (kN/m^2)
    pub uniform_pressure_kn_m2: f64,
}

/// Complete outcome of one design evaluation: the four mode results, the
/// governing mode, and derived scalars. Constructed fresh per call; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Adhesion (bond) check
    pub adhesion: ModeResult,

    /// Flexure check
    pub flexure: ModeResult,

    /// Punching shear check
    pub punching: ModeResult,

    /// Direct in-plane shear check
    pub direct_shear: ModeResult,

    /// The mode with the least margin (min FoS or max utilisation).
    /// First mode in [`FailureMode::ALL`] order wins ties.
    pub governing_mode: FailureMode,

    /// The controlling value (FoS or utilisation)
    pub governing_value: f64,

    /// Overall pass/fail per the chosen convention
    pub ok: bool,

    /// Convenience numbers for reporting
    pub derived: DerivedQuantities,
}

impl DesignResult {
    /// The four mode results in evaluation order.
    pub fn modes(&self) -> [(FailureMode, &ModeResult); 4] {
        [
            (FailureMode::Adhesion, &self.adhesion),
            (FailureMode::Flexure, &self.flexure),
            (FailureMode::Punching, &self.punching),
            (FailureMode::DirectShear, &self.direct_shear),
        ]
    }

    /// Look up one mode's result.
    pub fn mode(&self, mode: FailureMode) -> &ModeResult {
        match mode {
            FailureMode::Adhesion => &self.adhesion,
            FailureMode::Flexure => &self.flexure,
            FailureMode::Punching => &self.punching,
            FailureMode::DirectShear => &self.direct_shear,
        }
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        let status = if self.ok { "OK" } else { "NOT OK" };
        format!(
            "Governing: {} -> {:.3} ({})",
            self.governing_mode.display_name(),
            self.governing_value,
            status
        )
    }
}

/// Build a ModeResult with either FoS or utilisation filled in.
fn evaluate_mode(
    demand: f64,
    capacity: f64,
    factors: &DesignFactors,
    phi: f64,
    detail: String,
) -> ModeResult {
    match factors.convention {
        DesignConvention::FactorOfSafety => {
            let (fos, passes) = evaluate_fos(capacity, demand);
            ModeResult {
                demand,
                capacity,
                fos: Some(fos),
                utilisation: None,
                passes,
                detail,
            }
        }
        DesignConvention::Lrfd => {
            let (utilisation, passes) = evaluate_lrfd(capacity, demand, phi, factors.gamma_load);
            ModeResult {
                demand,
                capacity,
                fos: None,
                utilisation: Some(utilisation),
                passes,
                detail,
            }
        }
    }
}

/// Master entry point: run all four failure-mode checks on `input` and
/// return a [`DesignResult`].
///
/// The load model is invoked exactly once, with shotcrete self-weight
/// excluded by policy so the load stays ground-dominant and comparable
/// across scenarios. Invalid geometry (non-positive spacing or rock unit
/// weight, non-positive flat-block height) propagates as an error; all
/// other non-physical inputs degrade to zero-capacity failing modes.
pub fn evaluate(input: &DesignInput) -> CalcResult<DesignResult> {
    let mat = &input.materials;
    let factors = &input.factors;
    let t_eff = input.effective_thickness_m();

    let load = compute_panel_load(
        &input.load_model,
        input.s_m,
        input.gamma_rock_kn_m3,
        &LoadOptions::default(),
    )?;
    let w = load.uniform_pressure_kn_m2;

    // 1) Adhesion: resultant-to-resultant. No dedicated phi exists for
    // adhesion; the shear factor substitutes unless one is configured.
    let adhesion = evaluate_mode(
        load.total_weight_kn,
        adhesion_capacity_kn(input.s_m, input.a_bond_m, mat.tau_b_mpa),
        factors,
        factors.phi_for_adhesion(),
        format!(
            "Ring area 4*s*a_bond; tau_b={:.3} MPa, a_bond={:.3} m",
            mat.tau_b_mpa, input.a_bond_m
        ),
    );

    // 2) Flexure: strip moment with two-way reduction vs residual capacity
    let flexure = evaluate_mode(
        flexure_demand_knm(w, input.s_m, DEFAULT_TWO_WAY_FACTOR),
        flexure_capacity_knm(t_eff, mat.f_r_mpa),
        factors,
        factors.phi_flexure,
        format!(
            "M=0.6*w*s^2/8; f_r={:.3} MPa; t_eff={:.3} m",
            mat.f_r_mpa, t_eff
        ),
    );

    // 3) Punching: quarter-panel load at one bolt vs control perimeter
    let punching = evaluate_mode(
        punching_demand_kn(w, input.s_m),
        punching_capacity_kn(t_eff, input.c_m, mat.v_rd_mpa),
        factors,
        factors.phi_punching,
        format!(
            "u=4*(c+0.5d), d=0.9*t_eff; v_rd={:.3} MPa; c={:.3} m",
            mat.v_rd_mpa, input.c_m
        ),
    );

    // 4) Direct shear: panel resultant vs perimeter shear area
    let direct_shear = evaluate_mode(
        load.total_weight_kn,
        direct_shear_capacity_kn(input.s_m, t_eff, mat.tau_v_mpa),
        factors,
        factors.phi_shear,
        format!(
            "A_v=4*s*t_eff; tau_v={:.3} MPa; t_eff={:.3} m",
            mat.tau_v_mpa, t_eff
        ),
    );

    let mut result = DesignResult {
        adhesion,
        flexure,
        punching,
        direct_shear,
        governing_mode: FailureMode::Adhesion,
        governing_value: 0.0,
        ok: false,
        derived: DerivedQuantities {
            t_eff_m: t_eff,
            total_weight_kn: load.total_weight_kn,
            uniform_pressure_kn_m2: w,
        },
    };

    let (governing_mode, governing_value) = match factors.convention {
        // Governing = minimum FoS; strict comparison keeps the first mode
        // encountered on ties.
        DesignConvention::FactorOfSafety => {
            let mut governing = (FailureMode::Adhesion, f64::INFINITY);
            for (mode, mr) in result.modes() {
                let value = mr.fos.unwrap_or(f64::INFINITY);
                if value < governing.1 {
                    governing = (mode, value);
                }
            }
            governing
        }
        // Governing = maximum utilisation, same first-wins tie policy.
        DesignConvention::Lrfd => {
            let mut governing = (FailureMode::Adhesion, f64::NEG_INFINITY);
            for (mode, mr) in result.modes() {
                let value = mr.utilisation.unwrap_or(f64::NEG_INFINITY);
                if value > governing.1 {
                    governing = (mode, value);
                }
            }
            governing
        }
    };

    result.governing_mode = governing_mode;
    result.governing_value = governing_value;
    result.ok = match factors.convention {
        DesignConvention::FactorOfSafety => governing_value >= 1.0,
        DesignConvention::Lrfd => governing_value <= 1.0,
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::DesignConvention;

    fn default_input() -> DesignInput {
        let mut input = DesignInput::new(
            1.5,
            0.10,
            0.25,
            25.0,
            PanelLoadModel::PyramidalWedge { theta_deg: 60.0 },
        );
        input.materials = ShotcreteMaterial::new(30.0, 1.0, 1.2, 1.5, 1.2);
        input
    }

    #[test]
    fn test_evaluate_returns_four_modes_with_sane_numbers() {
        let result = evaluate(&default_input()).unwrap();
        for (_, mr) in result.modes() {
            assert!(mr.demand >= 0.0);
            assert!(mr.capacity >= 0.0);
            assert!(mr.fos.is_some());
            assert!(mr.utilisation.is_none());
        }
        assert!(result.governing_value > 0.0);
    }

    #[test]
    fn test_wider_spacing_does_not_increase_governing_fos() {
        let mut narrow = default_input();
        narrow.s_m = 1.2;
        let mut wide = default_input();
        wide.s_m = 2.4;

        let res_narrow = evaluate(&narrow).unwrap();
        let res_wide = evaluate(&wide).unwrap();
        assert!(res_wide.governing_value <= res_narrow.governing_value);
    }

    #[test]
    fn test_thicker_shotcrete_increases_flexural_capacity() {
        let mut thin = default_input();
        thin.t_m = 0.08;
        let mut thick = default_input();
        thick.t_m = 0.14;

        let res_thin = evaluate(&thin).unwrap();
        let res_thick = evaluate(&thick).unwrap();
        assert!(res_thick.flexure.capacity > res_thin.flexure.capacity);
    }

    #[test]
    fn test_lrfd_switch_populates_utilisation() {
        let mut input = default_input();
        input.factors = input.factors.with_convention(DesignConvention::Lrfd);

        let result = evaluate(&input).unwrap();
        for (_, mr) in result.modes() {
            assert!(mr.utilisation.is_some());
            assert!(mr.fos.is_none());
        }
        assert!(result.governing_value > 0.0);
    }

    #[test]
    fn test_durability_deduction_reduces_flexural_capacity() {
        let mut base = default_input();
        base.t_m = 0.12;
        let mut deducted = base.clone();
        deducted.factors = deducted.factors.with_durability_deduction(0.02);

        let res_base = evaluate(&base).unwrap();
        let res_deducted = evaluate(&deducted).unwrap();
        assert!(res_deducted.flexure.capacity < res_base.flexure.capacity);
        assert!((res_deducted.derived.t_eff_m - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_repeat_evaluation_is_bit_identical() {
        let input = default_input();
        let first = evaluate(&input).unwrap();
        let second = evaluate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_geometry_propagates() {
        let mut input = default_input();
        input.s_m = 0.0;
        assert!(evaluate(&input).is_err());

        let mut input = default_input();
        input.load_model = PanelLoadModel::FlatBlock { h_block_m: -0.5 };
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn test_governing_is_minimum_fos() {
        let result = evaluate(&default_input()).unwrap();
        let min_fos = result
            .modes()
            .iter()
            .map(|(_, mr)| mr.fos.unwrap())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.governing_value, min_fos);
        assert_eq!(
            result.mode(result.governing_mode).fos.unwrap(),
            result.governing_value
        );
    }

    #[test]
    fn test_governing_is_maximum_utilisation_under_lrfd() {
        let mut input = default_input();
        input.factors = input.factors.with_convention(DesignConvention::Lrfd);
        let result = evaluate(&input).unwrap();

        let max_util = result
            .modes()
            .iter()
            .map(|(_, mr)| mr.utilisation.unwrap())
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.governing_value, max_util);
    }

    #[test]
    fn test_dedicated_adhesion_phi_changes_adhesion_only() {
        let mut base = default_input();
        base.factors = base.factors.with_convention(DesignConvention::Lrfd);
        let mut custom = base.clone();
        custom.factors = custom.factors.with_phi_adhesion(0.3);

        let res_base = evaluate(&base).unwrap();
        let res_custom = evaluate(&custom).unwrap();
        assert!(res_custom.adhesion.utilisation.unwrap() > res_base.adhesion.utilisation.unwrap());
        assert_eq!(res_custom.flexure, res_base.flexure);
    }

    #[test]
    fn test_non_physical_material_fails_mode_not_evaluation() {
        let mut input = default_input();
        input.materials.tau_b_mpa = -1.0;

        let result = evaluate(&input).unwrap();
        assert_eq!(result.adhesion.capacity, 0.0);
        assert!(!result.adhesion.passes);
        // Other modes unaffected
        assert!(result.flexure.capacity > 0.0);
    }

    #[test]
    fn test_effective_thickness_never_negative() {
        let mut input = default_input();
        input.t_m = 0.05;
        input.factors = input.factors.with_durability_deduction(0.08);
        assert_eq!(input.effective_thickness_m(), 0.0);
    }

    #[test]
    fn test_input_validation() {
        assert!(default_input().validate().is_ok());

        let mut input = default_input();
        input.t_m = 0.0;
        assert!(input.validate().is_err());

        let mut input = default_input();
        input.c_m = -0.1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_metadata_is_pass_through() {
        let mut input = default_input();
        input.age_label = "7d".to_string();
        input.notes = "crown pillar panel".to_string();

        let tagged = evaluate(&input).unwrap();
        input.age_label = String::new();
        input.notes = String::new();
        let untagged = evaluate(&input).unwrap();
        assert_eq!(tagged, untagged);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = default_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: DesignInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = evaluate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: DesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.governing_mode, result.governing_mode);
    }

    #[test]
    fn test_summary_format() {
        let result = evaluate(&default_input()).unwrap();
        let summary = result.summary();
        assert!(summary.starts_with("Governing: "));
        assert!(summary.contains(result.governing_mode.display_name()));
    }
}
