//! # Parameter Sweeps
//!
//! Repeated evaluation across a swept bolt spacing, producing the series a
//! charting collaborator needs: (spacing, governing value) pairs plus
//! optional per-mode series. Each point is an independent [`evaluate`]
//! call with no shared state, so large sweeps parallelize trivially on the
//! caller's side.
//!
//! The engine performs no optimization: a consumer wanting "the largest
//! spacing that still passes" samples this sweep and interpolates.
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::design::DesignInput;
//! use shotcrete_core::loads::PanelLoadModel;
//! use shotcrete_core::sweep::{linspace, sweep_spacing};
//!
//! let base = DesignInput::new(1.5, 0.10, 0.25, 25.0,
//!     PanelLoadModel::PyramidalWedge { theta_deg: 60.0 });
//! let sweep = sweep_spacing(&base, &linspace(1.0, 2.5, 16)).unwrap();
//!
//! assert_eq!(sweep.points.len(), 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::design::{evaluate, DesignInput, FailureMode};
use crate::errors::CalcResult;

/// One sampled point of a spacing sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Swept bolt spacing (m)
    pub s_m: f64,

    /// Governing value at this spacing (FoS or utilisation)
    pub governing_value: f64,

    /// Governing mode at this spacing
    pub governing_mode: FailureMode,

    /// Overall pass/fail at this spacing
    pub ok: bool,
}

/// Per-mode value series aligned with [`SpacingSweep::points`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSeries {
    pub mode: FailureMode,

    /// FoS or utilisation per sampled spacing, in sweep order
    pub values: Vec<f64>,
}

/// Result of sweeping bolt spacing on an otherwise fixed input.
///
/// `convention_code` records whether values are FoS or utilisation; both
/// share 1.0 as the pass/fail boundary, so chart collaborators draw one
/// horizontal reference line either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingSweep {
    /// "FOS" or "LRFD"
    pub convention_code: String,

    /// Governing series, one point per requested spacing
    pub points: Vec<SweepPoint>,

    /// Per-mode series in [`FailureMode::ALL`] order
    pub mode_series: Vec<ModeSeries>,
}

impl SpacingSweep {
    /// (spacing, governing value) pairs for a single-curve chart.
    pub fn governing_pairs(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.s_m, p.governing_value))
            .collect()
    }
}

/// Evenly spaced sample values from `start` to `end` inclusive.
///
/// Returns an empty vec for n == 0 and a single start value for n == 1.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n as f64 - 1.0);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Evaluate `base` at each spacing in `spacings_m`, holding everything
/// else fixed.
///
/// An invalid spacing fails the whole sweep with the load model's error,
/// matching the single-evaluation behavior.
pub fn sweep_spacing(base: &DesignInput, spacings_m: &[f64]) -> CalcResult<SpacingSweep> {
    let mut points = Vec::with_capacity(spacings_m.len());
    let mut mode_values: Vec<Vec<f64>> = vec![Vec::with_capacity(spacings_m.len()); 4];

    for &s_m in spacings_m {
        let mut input = base.clone();
        input.s_m = s_m;
        let result = evaluate(&input)?;

        points.push(SweepPoint {
            s_m,
            governing_value: result.governing_value,
            governing_mode: result.governing_mode,
            ok: result.ok,
        });
        for (series, (_, mr)) in mode_values.iter_mut().zip(result.modes()) {
            series.push(mr.governing_metric());
        }
    }

    let mode_series = FailureMode::ALL
        .into_iter()
        .zip(mode_values)
        .map(|(mode, values)| ModeSeries { mode, values })
        .collect();

    Ok(SpacingSweep {
        convention_code: base.factors.convention.code().to_string(),
        points,
        mode_series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::PanelLoadModel;

    fn base_input() -> DesignInput {
        DesignInput::new(
            1.5,
            0.10,
            0.25,
            25.0,
            PanelLoadModel::PyramidalWedge { theta_deg: 60.0 },
        )
    }

    #[test]
    fn test_linspace() {
        let values = linspace(1.0, 2.0, 5);
        assert_eq!(values, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_sweep_point_count_and_alignment() {
        let sweep = sweep_spacing(&base_input(), &linspace(1.0, 2.5, 10)).unwrap();
        assert_eq!(sweep.points.len(), 10);
        assert_eq!(sweep.mode_series.len(), 4);
        for series in &sweep.mode_series {
            assert_eq!(series.values.len(), 10);
        }
        assert_eq!(sweep.convention_code, "FOS");
    }

    #[test]
    fn test_governing_fos_non_increasing_with_spacing() {
        let sweep = sweep_spacing(&base_input(), &linspace(1.0, 3.0, 12)).unwrap();
        for pair in sweep.points.windows(2) {
            assert!(pair[1].governing_value <= pair[0].governing_value + 1e-9);
        }
    }

    #[test]
    fn test_sweep_matches_single_evaluations() {
        let base = base_input();
        let sweep = sweep_spacing(&base, &[1.2, 1.8]).unwrap();

        let mut single = base.clone();
        single.s_m = 1.8;
        let result = evaluate(&single).unwrap();
        assert_eq!(sweep.points[1].governing_value, result.governing_value);
        assert_eq!(sweep.points[1].governing_mode, result.governing_mode);
    }

    #[test]
    fn test_invalid_spacing_fails_sweep() {
        assert!(sweep_spacing(&base_input(), &[1.5, 0.0]).is_err());
    }

    #[test]
    fn test_governing_pairs() {
        let sweep = sweep_spacing(&base_input(), &[1.2, 1.8]).unwrap();
        let pairs = sweep.governing_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, 1.2);
    }

    #[test]
    fn test_serialization() {
        let sweep = sweep_spacing(&base_input(), &[1.2, 1.8]).unwrap();
        let json = serde_json::to_string(&sweep).unwrap();
        let roundtrip: SpacingSweep = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, sweep);
    }
}
