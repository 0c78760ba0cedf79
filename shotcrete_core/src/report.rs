//! # Tabular Reports
//!
//! Flattens a [`DesignInput`]/[`DesignResult`] pair into plain tables an
//! export collaborator can write to a spreadsheet, CSV, or a terminal.
//! Pure data transformation: no computation happens here, and the builders
//! never fail.
//!
//! A full [`DesignReport`] mirrors the conventional workbook layout:
//! Summary, Inputs, Results (per mode), Derived, and an optional
//! spacing-sweep sheet.
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::design::{DesignInput, evaluate};
//! use shotcrete_core::loads::PanelLoadModel;
//! use shotcrete_core::report::build_report;
//!
//! let input = DesignInput::new(1.5, 0.10, 0.25, 25.0,
//!     PanelLoadModel::PyramidalWedge { theta_deg: 60.0 });
//! let result = evaluate(&input).unwrap();
//!
//! let report = build_report(&input, &result, None);
//! assert_eq!(report.tables.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::design::{DesignInput, DesignResult};
use crate::factors::DesignConvention;
use crate::sweep::SpacingSweep;

/// One flat table (sheet): a name, column headers, and string rows.
///
/// Values are pre-formatted strings so the writer needs no knowledge of
/// units or numeric formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Sheet/table name (e.g. "Inputs")
    pub name: String,

    /// Column headers
    pub headers: Vec<String>,

    /// Data rows, each the same length as `headers`
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    fn new(name: &str, headers: &[&str]) -> Self {
        ReportTable {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }
}

/// A set of report tables for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub tables: Vec<ReportTable>,
}

fn fmt_num(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{value:.4}")
    }
}

/// Flatten the input into a two-column Parameter/Value table.
pub fn build_input_table(input: &DesignInput) -> ReportTable {
    let mut table = ReportTable::new("Inputs", &["Parameter", "Value"]);
    let mut push = |parameter: &str, value: String| {
        table.rows.push(vec![parameter.to_string(), value]);
    };

    push("Design convention", input.factors.convention.code().to_string());
    push("Bolt spacing s (m)", fmt_num(input.s_m));
    push("Thickness t (m)", fmt_num(input.t_m));
    push("Plate width c (m)", fmt_num(input.c_m));
    push("Rock unit weight (kN/m^3)", fmt_num(input.gamma_rock_kn_m3));
    push("Load model", input.load_model.to_string());
    push("Geology preset", input.geology.display_name().to_string());
    push("Bond length a_bond (m)", fmt_num(input.a_bond_m));
    push("f_c (MPa)", fmt_num(input.materials.f_c_mpa));
    push("tau_b (MPa)", fmt_num(input.materials.tau_b_mpa));
    push("f_r (MPa)", fmt_num(input.materials.f_r_mpa));
    push("tau_v (MPa)", fmt_num(input.materials.tau_v_mpa));
    push("v_rd (MPa)", fmt_num(input.materials.v_rd_mpa));
    push("phi_flexure", fmt_num(input.factors.phi_flexure));
    push("phi_shear", fmt_num(input.factors.phi_shear));
    push("phi_punching", fmt_num(input.factors.phi_punching));
    push(
        "phi_adhesion",
        input
            .factors
            .phi_adhesion
            .map(fmt_num)
            .unwrap_or_else(|| "(reuses phi_shear)".to_string()),
    );
    push("gamma_load", fmt_num(input.factors.gamma_load));
    push("Durability deduction (m)", fmt_num(input.factors.t_dur_deduction_m));
    push("Age label", input.age_label.clone());
    push("Notes", input.notes.clone());
    table
}

/// Per-mode results table. The metric column is FoS or Utilisation
/// depending on the convention the result was evaluated under.
pub fn build_results_table(input: &DesignInput, result: &DesignResult) -> ReportTable {
    let metric = match input.factors.convention {
        DesignConvention::FactorOfSafety => "FoS",
        DesignConvention::Lrfd => "Utilisation",
    };
    let mut table =
        ReportTable::new("Results", &["Mode", "Demand", "Capacity", metric, "Pass", "Detail"]);

    for (mode, mr) in result.modes() {
        table.push_row(vec![
            mode.display_name().to_string(),
            fmt_num(mr.demand),
            fmt_num(mr.capacity),
            fmt_num(mr.governing_metric()),
            if mr.passes { "Yes" } else { "No" }.to_string(),
            mr.detail.clone(),
        ]);
    }
    table
}

/// Derived scalars table (effective thickness, loads).
pub fn build_derived_table(result: &DesignResult) -> ReportTable {
    let mut table = ReportTable::new("Derived", &["Quantity", "Value"]);
    table.push_row(vec![
        "Effective thickness t_eff (m)".to_string(),
        fmt_num(result.derived.t_eff_m),
    ]);
    table.push_row(vec![
        "Total block weight W (kN)".to_string(),
        fmt_num(result.derived.total_weight_kn),
    ]);
    table.push_row(vec![
        "Uniform pressure w (kN/m^2)".to_string(),
        fmt_num(result.derived.uniform_pressure_kn_m2),
    ]);
    table
}

/// One-row summary table with the governing outcome.
pub fn build_summary_table(input: &DesignInput, result: &DesignResult) -> ReportTable {
    let mut table = ReportTable::new(
        "Summary",
        &["Convention", "Governing mode", "Governing value", "Overall"],
    );
    table.push_row(vec![
        input.factors.convention.code().to_string(),
        result.governing_mode.display_name().to_string(),
        fmt_num(result.governing_value),
        if result.ok { "OK" } else { "NOT OK" }.to_string(),
    ]);
    table
}

/// Spacing-sweep sheet: one row per sampled spacing.
pub fn build_sweep_table(sweep: &SpacingSweep) -> ReportTable {
    let mut table = ReportTable::new(
        "Sweep",
        &["s (m)", "Governing value", "Governing mode", "Pass"],
    );
    for point in &sweep.points {
        table.push_row(vec![
            fmt_num(point.s_m),
            fmt_num(point.governing_value),
            point.governing_mode.display_name().to_string(),
            if point.ok { "Yes" } else { "No" }.to_string(),
        ]);
    }
    table
}

/// Assemble the full report: Summary, Inputs, Results, Derived, and the
/// sweep sheet when one is supplied.
pub fn build_report(
    input: &DesignInput,
    result: &DesignResult,
    sweep: Option<&SpacingSweep>,
) -> DesignReport {
    let mut tables = vec![
        build_summary_table(input, result),
        build_input_table(input),
        build_results_table(input, result),
        build_derived_table(result),
    ];
    if let Some(sweep) = sweep {
        tables.push(build_sweep_table(sweep));
    }
    DesignReport { tables }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::evaluate;
    use crate::loads::PanelLoadModel;
    use crate::sweep::sweep_spacing;

    fn sample() -> (DesignInput, DesignResult) {
        let input = DesignInput::new(
            1.5,
            0.10,
            0.25,
            25.0,
            PanelLoadModel::PyramidalWedge { theta_deg: 60.0 },
        );
        let result = evaluate(&input).unwrap();
        (input, result)
    }

    #[test]
    fn test_results_table_has_four_rows() {
        let (input, result) = sample();
        let table = build_results_table(&input, &result);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.headers[3], "FoS");
        for row in &table.rows {
            assert_eq!(row.len(), table.headers.len());
        }
    }

    #[test]
    fn test_input_table_carries_metadata() {
        let (mut input, _) = sample();
        input.notes = "pillar heading".to_string();
        let table = build_input_table(&input);
        assert!(table
            .rows
            .iter()
            .any(|row| row[0] == "Notes" && row[1] == "pillar heading"));
    }

    #[test]
    fn test_derived_table() {
        let (_, result) = sample();
        let table = build_derived_table(&result);
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn test_report_sheet_count() {
        let (input, result) = sample();
        assert_eq!(build_report(&input, &result, None).tables.len(), 4);

        let sweep = sweep_spacing(&input, &[1.2, 1.8]).unwrap();
        let report = build_report(&input, &result, Some(&sweep));
        assert_eq!(report.tables.len(), 5);
        assert_eq!(report.tables[4].rows.len(), 2);
    }

    #[test]
    fn test_infinite_metric_formatting() {
        assert_eq!(fmt_num(f64::INFINITY), "inf");
        assert_eq!(fmt_num(1.23456), "1.2346");
    }

    #[test]
    fn test_serialization() {
        let (input, result) = sample();
        let report = build_report(&input, &result, None);
        let json = serde_json::to_string(&report).unwrap();
        let roundtrip: DesignReport = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, report);
    }
}
