//! Support Reaction Solver
//!
//! Solves global equilibrium for the two statically determinate
//! configurations the engine supports.
//!
//! ## Cantilever (one fixed support)
//!
//! With downward loads positive and the wall at `s`:
//! - `R = ΣV` (total vertical load)
//! - `M_r = ΣM_origin - ΣV·s` (moment equilibrium about the coordinate origin)
//!
//! ## Simply supported (pin + roller)
//!
//! Moments of all loads about the first support give the far reaction:
//! - `R2 = ΣM_s1 / (s2 - s1)`
//! - `R1 = ΣV - R2`
//!
//! Applied moments enter the moment sums directly (counterclockwise
//! positive) but not the force balance. Pins and rollers resist no moment,
//! and no horizontal loading is modeled, so those reaction components are
//! always zero.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::model::{Beam, SupportKind, SUPPORT_SPACING_EPS};

/// Force and moment a support exerts on the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// The support this reaction belongs to
    pub support_id: Uuid,

    /// Support position along the beam
    pub position: f64,

    /// Vertical reaction force (positive upward)
    pub vertical_force: f64,

    /// Horizontal reaction force (always 0; no horizontal loading modeled)
    pub horizontal_force: f64,

    /// Reaction moment (counterclockwise positive; nonzero only for a
    /// fixed support)
    pub moment: f64,
}

/// Solve support reactions from global equilibrium.
///
/// Fails with a configuration error for any support arrangement other than
/// one fixed support or two distinct simple supports.
pub fn solve(beam: &Beam) -> EngineResult<Vec<Reaction>> {
    match beam.supports.len() {
        1 => solve_cantilever(beam),
        2 => solve_simply_supported(beam),
        0 => Err(EngineError::unsupported_configuration(
            "Beam has no supports",
        )),
        n => Err(EngineError::unsupported_configuration(format!(
            "{} supports make the beam statically indeterminate",
            n
        ))),
    }
}

fn solve_cantilever(beam: &Beam) -> EngineResult<Vec<Reaction>> {
    let support = &beam.supports[0];
    if support.kind != SupportKind::Fixed {
        return Err(EngineError::unsupported_configuration(format!(
            "A single {} support cannot restrain the beam; \
             a cantilever requires a fixed support",
            support.kind
        )));
    }

    let total_vertical: f64 = beam.loads.iter().map(|l| l.vertical_component()).sum();
    let total_moment_about_origin: f64 = beam.loads.iter().map(|l| l.moment_about(0.0)).sum();

    Ok(vec![Reaction {
        support_id: support.id,
        position: support.position,
        vertical_force: total_vertical,
        horizontal_force: 0.0,
        moment: total_moment_about_origin - total_vertical * support.position,
    }])
}

fn solve_simply_supported(beam: &Beam) -> EngineResult<Vec<Reaction>> {
    let s1 = &beam.supports[0];
    let s2 = &beam.supports[1];

    if let Some(fixed) = beam
        .supports
        .iter()
        .find(|s| s.kind == SupportKind::Fixed)
    {
        return Err(EngineError::unsupported_configuration(format!(
            "Two supports including a fixed support at {} are statically indeterminate",
            fixed.position
        )));
    }

    let spacing = s2.position - s1.position;
    if spacing.abs() <= SUPPORT_SPACING_EPS {
        return Err(EngineError::unsupported_configuration(format!(
            "Supports at {} and {} are coincident",
            s1.position, s2.position
        )));
    }

    // Applied moments join the moment sum directly; only force loads join
    // the vertical balance
    let total_vertical: f64 = beam.loads.iter().map(|l| l.vertical_component()).sum();
    let moment_about_s1: f64 = beam.loads.iter().map(|l| l.moment_about(s1.position)).sum();

    let r2 = moment_about_s1 / spacing;
    let r1 = total_vertical - r2;

    Ok(vec![
        Reaction {
            support_id: s1.id,
            position: s1.position,
            vertical_force: r1,
            horizontal_force: 0.0,
            moment: 0.0,
        },
        Reaction {
            support_id: s2.id,
            position: s2.position,
            vertical_force: r2,
            horizontal_force: 0.0,
            moment: 0.0,
        },
    ])
}
