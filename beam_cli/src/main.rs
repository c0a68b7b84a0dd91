//! # Beam CLI
//!
//! Terminal front end for the beam statics engine. Prompts for a simple
//! beam definition, runs the full analysis pipeline, and prints reactions,
//! diagram extremes, the validation verdict, and the derivation trace,
//! followed by the raw JSON for scripting use.

use std::io::{self, BufRead, Write};

use beam_core::analysis::analyze;
use beam_core::model::{Beam, Load, Support};

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

fn main() {
    println!("Beam CLI - Determinate Beam Statics");
    println!("===================================");
    println!();

    let length = prompt_f64("Beam length (m) [10.0]: ", 10.0);
    let point_magnitude = prompt_f64("Point load magnitude (kN) [20.0]: ", 20.0);
    let point_position = prompt_f64(
        &format!("Point load position (m) [{}]: ", length / 2.0),
        length / 2.0,
    );
    let uniform_intensity = prompt_f64("Uniform load over full span (kN/m) [0.0]: ", 0.0);

    let mut beam = Beam::new(length)
        .with_support(Support::pin(0.0))
        .with_support(Support::roller(length))
        .with_load(Load::point(point_magnitude, point_position));
    if uniform_intensity != 0.0 {
        beam = beam.with_load(Load::uniform(uniform_intensity, 0.0, length));
    }

    println!();
    match analyze(&beam) {
        Ok(results) => {
            let force = beam.units.force_label();
            let len = beam.units.length_label();
            let moment = beam.units.moment_label();

            println!("═══════════════════════════════════════");
            println!("  BEAM ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Reactions:");
            for (i, reaction) in results.reactions.iter().enumerate() {
                println!(
                    "  R{} at x = {:.2} {}: V = {:.3} {}, M = {:.3} {}",
                    i + 1,
                    reaction.position,
                    len,
                    reaction.vertical_force,
                    force,
                    reaction.moment,
                    moment
                );
            }
            println!();
            println!("Diagram extremes:");
            println!(
                "  V_max = {:.3} {} at x = {:.2} {}",
                results.shear_extremes.max_value, force, results.shear_extremes.max_position, len
            );
            println!(
                "  V_min = {:.3} {} at x = {:.2} {}",
                results.shear_extremes.min_value, force, results.shear_extremes.min_position, len
            );
            println!(
                "  M_max = {:.3} {} at x = {:.2} {}",
                results.moment_extremes.max_value,
                moment,
                results.moment_extremes.max_position,
                len
            );
            println!(
                "  M_min = {:.3} {} at x = {:.2} {}",
                results.moment_extremes.min_value,
                moment,
                results.moment_extremes.min_position,
                len
            );
            println!();
            println!(
                "Validation: {}",
                if results.validation.is_valid {
                    "[OK] all checks passed"
                } else {
                    "[WARN] see messages below"
                }
            );
            for message in results
                .validation
                .equilibrium
                .messages
                .iter()
                .chain(&results.validation.closure.messages)
                .chain(&results.validation.relationship.messages)
            {
                println!("  - {}", message);
            }
            println!();
            println!("Derivation:");
            for step in &results.trace {
                println!("  {}. {}", step.number, step.title);
                println!("     {}", step.description);
                for equation in &step.equations {
                    println!("       {}", equation);
                }
                if let Some(result) = &step.result {
                    println!("     => {}", result);
                }
            }

            println!();
            println!("JSON Output (for scripting/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&results) {
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
        }
    }
}
