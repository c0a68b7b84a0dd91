//! Calculation Trace
//!
//! Builds the numbered, human-readable derivation that accompanies every
//! analysis: free body description, load enumeration, the moment and force
//! equilibrium solves, and a closing self-check. The trace narrates the
//! numbers the solver actually produced — it formats the reactions it is
//! given and never re-solves them, so the story cannot drift from the
//! result.

use serde::{Deserialize, Serialize};

use crate::analysis::reactions::Reaction;
use crate::model::{Beam, Load};

/// One numbered step of the derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub number: usize,
    pub title: String,
    pub description: String,
    /// Equation strings with substituted numbers
    pub equations: Vec<String>,
    /// Headline result of this step, if it has one
    pub result: Option<String>,
}

/// Generate the derivation trace for a solved beam.
///
/// Branches on the same cantilever / simply-supported split as the solver.
pub fn generate(beam: &Beam, reactions: &[Reaction]) -> Vec<CalculationStep> {
    let mut steps = Vec::new();

    steps.push(free_body_step(beam, steps.len() + 1));
    steps.push(load_enumeration_step(beam, steps.len() + 1));

    if beam.is_cantilever() {
        cantilever_steps(beam, reactions, &mut steps);
    } else {
        simply_supported_steps(beam, reactions, &mut steps);
    }

    steps.push(verification_step(beam, reactions, steps.len() + 1));
    steps
}

fn free_body_step(beam: &Beam, number: usize) -> CalculationStep {
    let len = beam.units.length_label();
    let supports = beam
        .supports
        .iter()
        .map(|s| format!("{} support at x = {} {}", s.kind, s.position, len))
        .collect::<Vec<_>>()
        .join(", ");

    let configuration = if beam.is_cantilever() {
        "cantilever"
    } else {
        "simply supported"
    };

    CalculationStep {
        number,
        title: "Free body diagram".to_string(),
        description: format!(
            "Beam of length {} {}, {}: {}. Positions measured from the left \
             end; forces positive upward, applied loads positive downward.",
            beam.length, len, configuration, supports
        ),
        equations: Vec::new(),
        result: None,
    }
}

fn load_enumeration_step(beam: &Beam, number: usize) -> CalculationStep {
    let force = beam.units.force_label();
    let len = beam.units.length_label();
    let moment = beam.units.moment_label();
    let intensity = beam.units.intensity_label();

    let equations = beam
        .loads
        .iter()
        .map(|load| match load {
            Load::Point {
                position,
                magnitude,
                angle_deg,
            } => {
                if *angle_deg == 0.0 {
                    format!("P = {} {} at x = {} {}", magnitude, force, position, len)
                } else {
                    format!(
                        "P = {} {} at x = {} {} ({}° from vertical, V = {:.3} {})",
                        magnitude,
                        force,
                        position,
                        len,
                        angle_deg,
                        load.vertical_component(),
                        force
                    )
                }
            }
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => format!(
                "w = {} to {} {} over [{}, {}] {} (W = {:.3} {} at x̄ = {:.3} {})",
                start_magnitude,
                end_magnitude,
                intensity,
                start,
                end,
                len,
                load.vertical_component(),
                force,
                load.centroid().unwrap_or(*start),
                len
            ),
            Load::Moment {
                position,
                magnitude,
                direction,
            } => format!(
                "M = {} {} ({}) at x = {} {}",
                magnitude, moment, direction, position, len
            ),
        })
        .collect::<Vec<_>>();

    let description = if beam.loads.is_empty() {
        "No applied loads.".to_string()
    } else {
        format!(
            "{} applied load(s); distributed loads replaced by their resultants \
             at their centroids.",
            beam.loads.len()
        )
    };

    CalculationStep {
        number,
        title: "Applied loads".to_string(),
        description,
        equations,
        result: None,
    }
}

fn cantilever_steps(beam: &Beam, reactions: &[Reaction], steps: &mut Vec<CalculationStep>) {
    let force = beam.units.force_label();
    let moment_unit = beam.units.moment_label();
    let reaction = &reactions[0];

    let total_vertical: f64 = beam.loads.iter().map(|l| l.vertical_component()).sum();
    let total_moment: f64 = beam.loads.iter().map(|l| l.moment_about(0.0)).sum();

    steps.push(CalculationStep {
        number: steps.len() + 1,
        title: "Moment equilibrium".to_string(),
        description: format!(
            "Summing moments about the origin; the wall at x = {} supplies the \
             reaction moment.",
            reaction.position
        ),
        equations: vec![
            format!("ΣM_origin = {:.3} {}", total_moment, moment_unit),
            format!(
                "M_r = ΣM_origin - ΣV·x_wall = {:.3} - {:.3}·{} = {:.3} {}",
                total_moment,
                total_vertical,
                reaction.position,
                reaction.moment,
                moment_unit
            ),
        ],
        result: Some(format!("M_r = {:.3} {}", reaction.moment, moment_unit)),
    });

    steps.push(CalculationStep {
        number: steps.len() + 1,
        title: "Force equilibrium".to_string(),
        description: "The fixed support carries the entire vertical load.".to_string(),
        equations: vec![
            format!("ΣFy = 0:  R = ΣV = {:.3} {}", total_vertical, force),
        ],
        result: Some(format!("R = {:.3} {}", reaction.vertical_force, force)),
    });
}

fn simply_supported_steps(beam: &Beam, reactions: &[Reaction], steps: &mut Vec<CalculationStep>) {
    let force = beam.units.force_label();
    let len = beam.units.length_label();
    let moment_unit = beam.units.moment_label();
    let (r1, r2) = (&reactions[0], &reactions[1]);

    let total_vertical: f64 = beam.loads.iter().map(|l| l.vertical_component()).sum();
    let moment_about_s1: f64 = beam
        .loads
        .iter()
        .map(|l| l.moment_about(r1.position))
        .sum();
    let spacing = r2.position - r1.position;

    steps.push(CalculationStep {
        number: steps.len() + 1,
        title: "Moment equilibrium about the first support".to_string(),
        description: format!(
            "Taking moments about the support at x = {} {} eliminates its \
             reaction and isolates the far one.",
            r1.position, len
        ),
        equations: vec![
            format!("ΣM_s1 = {:.3} {}", moment_about_s1, moment_unit),
            format!(
                "R2 = ΣM_s1 / (x2 - x1) = {:.3} / {:.3} = {:.3} {}",
                moment_about_s1, spacing, r2.vertical_force, force
            ),
        ],
        result: Some(format!("R2 = {:.3} {}", r2.vertical_force, force)),
    });

    steps.push(CalculationStep {
        number: steps.len() + 1,
        title: "Force equilibrium".to_string(),
        description: "The remaining vertical load goes to the first support; applied \
                      moments do not enter the force balance."
            .to_string(),
        equations: vec![format!(
            "R1 = ΣV - R2 = {:.3} - {:.3} = {:.3} {}",
            total_vertical, r2.vertical_force, r1.vertical_force, force
        )],
        result: Some(format!("R1 = {:.3} {}", r1.vertical_force, force)),
    });
}

fn verification_step(beam: &Beam, reactions: &[Reaction], number: usize) -> CalculationStep {
    let force = beam.units.force_label();
    let reaction_sum: f64 = reactions.iter().map(|r| r.vertical_force).sum();
    let load_sum: f64 = beam.loads.iter().map(|l| l.vertical_component()).sum();
    let residual = reaction_sum - load_sum;

    CalculationStep {
        number,
        title: "Equilibrium check".to_string(),
        description: "Reactions and applied loads must balance.".to_string(),
        equations: vec![format!(
            "ΣFy = ΣR - ΣV = {:.3} - {:.3} = {:.3e} {}",
            reaction_sum, load_sum, residual, force
        )],
        result: Some(if residual.abs() < 1e-6 {
            "Equilibrium satisfied".to_string()
        } else {
            format!("Residual {:.3e} {} exceeds tolerance", residual, force)
        }),
    }
}
