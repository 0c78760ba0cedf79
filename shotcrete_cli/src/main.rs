//! # Shotcrete Panel Design CLI
//!
//! Terminal front end for the design engine: prompts for geometry and
//! materials with sensible defaults, runs the four failure-mode checks,
//! prints a per-mode table with the governing outcome, then an optional
//! spacing sweep and the full JSON result for scripting/API use.

use std::io::{self, BufRead, Write};

use shotcrete_core::design::{evaluate, DesignInput};
use shotcrete_core::factors::DesignConvention;
use shotcrete_core::loads::PanelLoadModel;
use shotcrete_core::materials::ShotcreteMaterial;
use shotcrete_core::sweep::{linspace, sweep_spacing};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn main() {
    println!("Shotcrete Panel Design - bolted blocky ground");
    println!("=============================================");
    println!();

    let s_m = prompt_f64("Bolt spacing s (m) [1.5]: ", 1.5);
    let t_m = prompt_f64("Shotcrete thickness t (m) [0.10]: ", 0.10);
    let c_m = prompt_f64("Plate width c (m) [0.25]: ", 0.25);
    let gamma_rock = prompt_f64("Rock unit weight (kN/m^3) [25.0]: ", 25.0);
    let theta_deg = prompt_f64("Wedge angle theta (deg) [60.0]: ", 60.0);
    let lrfd = prompt_yes_no("Use LRFD instead of FoS? (y/N): ", false);

    let mut input = DesignInput::new(
        s_m,
        t_m,
        c_m,
        gamma_rock,
        PanelLoadModel::PyramidalWedge { theta_deg },
    );
    input.materials = ShotcreteMaterial::default();
    if lrfd {
        input.factors = input.factors.with_convention(DesignConvention::Lrfd);
    }

    println!();
    match evaluate(&input) {
        Ok(result) => {
            let metric = match input.factors.convention {
                DesignConvention::FactorOfSafety => "FoS",
                DesignConvention::Lrfd => "Util",
            };

            println!("==========================================================");
            println!("  PANEL DESIGN CHECKS ({})", input.factors.convention);
            println!("==========================================================");
            println!();
            println!("Derived:");
            println!("  t_eff   = {:.3} m", result.derived.t_eff_m);
            println!("  W_total = {:.1} kN", result.derived.total_weight_kn);
            println!("  w       = {:.2} kN/m^2", result.derived.uniform_pressure_kn_m2);
            println!();
            println!(
                "  {:<14} {:>10} {:>10} {:>8}  Check",
                "Mode", "Demand", "Capacity", metric
            );
            for (mode, mr) in result.modes() {
                println!(
                    "  {:<14} {:>10.2} {:>10.2} {:>8.3}  {}",
                    mode.display_name(),
                    mr.demand,
                    mr.capacity,
                    mr.governing_metric(),
                    status_icon(mr.passes)
                );
            }
            println!();
            println!("==========================================================");
            println!("  {}", result.summary());
            println!("==========================================================");

            if prompt_yes_no("\nRun spacing sweep 1.0-2.5 m? (y/N): ", false) {
                match sweep_spacing(&input, &linspace(1.0, 2.5, 16)) {
                    Ok(sweep) => {
                        println!();
                        println!("  {:>6}  {:>8}  Governing", "s (m)", metric);
                        for point in &sweep.points {
                            println!(
                                "  {:>6.2}  {:>8.3}  {} {}",
                                point.s_m,
                                point.governing_value,
                                point.governing_mode.display_name(),
                                status_icon(point.ok)
                            );
                        }
                    }
                    Err(e) => eprintln!("Sweep failed: {}", e),
                }
            }

            println!();
            println!("JSON Output (for scripting/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
