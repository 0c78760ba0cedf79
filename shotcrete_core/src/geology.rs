//! # Geology Presets
//!
//! Named ground conditions with suggested starter parameters for the load
//! model. Presets inform a UI's defaults and are carried on the input for
//! traceability; the orchestrator never reads them, so two inputs that
//! differ only in preset evaluate identically.
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::geology::GeologyPreset;
//! use shotcrete_core::loads::PanelLoadModel;
//!
//! let suggestion = GeologyPreset::HawkesburySandstone.suggested_parameters();
//! assert!(matches!(suggestion.load_model, PanelLoadModel::FlatBlock { .. }));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::loads::PanelLoadModel;

/// Named ground condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GeologyPreset {
    /// No specific geology; conservative pyramid loading
    #[default]
    Generic,
    /// Flat-lying, thick-bedded sandstone (flat block loading)
    HawkesburySandstone,
    /// Thinly bedded shale with variable-angle wedges
    AshfieldShale,
}

impl GeologyPreset {
    pub const ALL: [GeologyPreset; 3] = [
        GeologyPreset::Generic,
        GeologyPreset::HawkesburySandstone,
        GeologyPreset::AshfieldShale,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            GeologyPreset::Generic => "Generic",
            GeologyPreset::HawkesburySandstone => "Hawkesbury Sandstone",
            GeologyPreset::AshfieldShale => "Ashfield Shale",
        }
    }

    /// Suggested starter parameters for this ground condition.
    pub fn suggested_parameters(&self) -> PresetParameters {
        PRESET_TABLE[self]
    }
}

impl std::fmt::Display for GeologyPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Starter parameters a UI may seed an input form with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetParameters {
    /// Suggested load model (with typical geometry payload)
    pub load_model: PanelLoadModel,

    /// Typical rock unit weight (kN/m^3)
    pub gamma_rock_kn_m3: f64,
}

static PRESET_TABLE: Lazy<HashMap<GeologyPreset, PresetParameters>> = Lazy::new(|| {
    HashMap::from([
        (
            GeologyPreset::Generic,
            PresetParameters {
                load_model: PanelLoadModel::PyramidalWedge { theta_deg: 60.0 },
                gamma_rock_kn_m3: 25.0,
            },
        ),
        (
            GeologyPreset::HawkesburySandstone,
            PresetParameters {
                load_model: PanelLoadModel::FlatBlock { h_block_m: 0.6 },
                gamma_rock_kn_m3: 24.0,
            },
        ),
        (
            GeologyPreset::AshfieldShale,
            PresetParameters {
                load_model: PanelLoadModel::ShaleWedge { theta_deg: 50.0 },
                gamma_rock_kn_m3: 25.0,
            },
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_has_parameters() {
        for preset in GeologyPreset::ALL {
            let params = preset.suggested_parameters();
            assert!(params.gamma_rock_kn_m3 > 0.0);
        }
    }

    #[test]
    fn test_preset_load_models() {
        assert!(matches!(
            GeologyPreset::Generic.suggested_parameters().load_model,
            PanelLoadModel::PyramidalWedge { .. }
        ));
        assert!(matches!(
            GeologyPreset::AshfieldShale.suggested_parameters().load_model,
            PanelLoadModel::ShaleWedge { .. }
        ));
    }

    #[test]
    fn test_serialization() {
        let preset = GeologyPreset::AshfieldShale;
        let json = serde_json::to_string(&preset).unwrap();
        assert_eq!(json, "\"AshfieldShale\"");

        let roundtrip: GeologyPreset = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, preset);
    }
}
