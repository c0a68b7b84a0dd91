//! # Beam Analysis Pipeline
//!
//! A single pure pipeline:
//!
//! ```text
//! Beam -> reactions -> diagrams -> { validation, critical points, trace }
//! ```
//!
//! [`analyze`] is the one entry point. It either returns a complete
//! [`AnalysisResults`] or a configuration error; there is no partial output.
//! The pipeline holds no state — running it twice on the same beam yields
//! identical results.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::analysis::analyze;
//! use beam_core::model::{Beam, Support, Load};
//!
//! let beam = Beam::new(10.0)
//!     .with_support(Support::pin(0.0))
//!     .with_support(Support::roller(10.0))
//!     .with_load(Load::point(20.0, 5.0));
//!
//! let results = analyze(&beam).unwrap();
//! assert!(results.validation.is_valid);
//! println!("R1 = {:.1}", results.reactions[0].vertical_force);
//! ```

pub mod critical_points;
pub mod diagrams;
pub mod reactions;
pub mod trace;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;
use crate::model::Beam;

pub use critical_points::{CriticalPoint, CriticalPointKind};
pub use diagrams::{DiagramPoint, SAMPLE_COUNT};
pub use reactions::Reaction;
pub use trace::CalculationStep;
pub use validation::{
    ClosureCheck, EquilibriumCheck, RelationshipCheck, ValidationReport,
};

/// Extreme values of a sampled diagram, with their positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramExtremes {
    pub max_value: f64,
    pub max_position: f64,
    pub min_value: f64,
    pub min_position: f64,
}

impl DiagramExtremes {
    fn of(points: &[DiagramPoint]) -> Self {
        let mut extremes = DiagramExtremes {
            max_value: f64::NEG_INFINITY,
            max_position: 0.0,
            min_value: f64::INFINITY,
            min_position: 0.0,
        };
        for point in points {
            if point.value > extremes.max_value {
                extremes.max_value = point.value;
                extremes.max_position = point.position;
            }
            if point.value < extremes.min_value {
                extremes.min_value = point.value;
                extremes.min_position = point.position;
            }
        }
        extremes
    }
}

/// Complete output of one analysis call.
///
/// Plain serializable data: reactions, both 100-point diagram sequences
/// with their extrema, the validation report, the critical point list, and
/// the derivation trace. Has no identity beyond value equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub reactions: Vec<Reaction>,
    pub shear_diagram: Vec<DiagramPoint>,
    pub moment_diagram: Vec<DiagramPoint>,
    pub shear_extremes: DiagramExtremes,
    pub moment_extremes: DiagramExtremes,
    pub validation: ValidationReport,
    pub critical_points: Vec<CriticalPoint>,
    pub trace: Vec<CalculationStep>,
}

/// Run the full analysis pipeline on a beam.
///
/// Fails with a configuration error for invalid input (bad geometry or an
/// unsupported support arrangement). Numerically suspicious results do not
/// fail — they come back with `validation.is_valid = false` and messages.
pub fn analyze(beam: &Beam) -> EngineResult<AnalysisResults> {
    beam.validate()?;

    let reactions = reactions::solve(beam)?;
    let shear_diagram = diagrams::sample_shear(beam, &reactions);
    let moment_diagram = diagrams::sample_moment(beam, &reactions);

    let validation = validation::validate(beam, &reactions, &shear_diagram, &moment_diagram);
    let critical_points = critical_points::find(beam, &reactions, &shear_diagram, &moment_diagram);
    let trace = trace::generate(beam, &reactions);

    Ok(AnalysisResults {
        shear_extremes: DiagramExtremes::of(&shear_diagram),
        moment_extremes: DiagramExtremes::of(&moment_diagram),
        reactions,
        shear_diagram,
        moment_diagram,
        validation,
        critical_points,
        trace,
    })
}
