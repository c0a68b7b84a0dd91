//! Critical Point Extraction
//!
//! Collects the engineering-significant positions from an analysis: every
//! support, every load application point or edge, every interpolated
//! zero-shear crossing (the candidate moment extrema), and the global
//! extrema of both diagrams. Points are tagged with what they are and
//! whether the underlying quantity jumps there, and carry the local shear
//! and moment values for labeling.

use serde::{Deserialize, Serialize};

use crate::analysis::diagrams::{interpolate, DiagramPoint};
use crate::analysis::reactions::Reaction;
use crate::model::{Beam, SupportKind};

/// What a critical point marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriticalPointKind {
    /// A support location
    Support,
    /// A load application point or distributed-load edge
    Load,
    /// A shear zero crossing (candidate moment extremum)
    ZeroShear,
    /// Global maximum of the moment diagram
    MaxMoment,
    /// Global minimum of the moment diagram
    MinMoment,
    /// Global maximum of the shear diagram
    MaxShear,
    /// Global minimum of the shear diagram
    MinShear,
}

/// A named point of interest along the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPoint {
    pub position: f64,
    pub kind: CriticalPointKind,
    /// Shear at this position (interpolated or exact)
    pub shear: f64,
    /// Moment at this position (interpolated or exact)
    pub moment: f64,
    /// Whether shear or moment jumps here (point loads, applied moments,
    /// pin/roller reactions)
    pub is_discontinuity: bool,
}

/// Extract the ordered critical point list for an analysis.
///
/// The result is sorted by position; ties keep insertion order (supports,
/// then loads, then zero crossings, then extrema).
pub fn find(
    beam: &Beam,
    _reactions: &[Reaction],
    shear: &[DiagramPoint],
    moment: &[DiagramPoint],
) -> Vec<CriticalPoint> {
    let mut points = Vec::new();

    for support in &beam.supports {
        points.push(CriticalPoint {
            position: support.position,
            kind: CriticalPointKind::Support,
            shear: interpolate(shear, support.position),
            moment: interpolate(moment, support.position),
            is_discontinuity: support.kind != SupportKind::Fixed,
        });
    }

    for load in &beam.loads {
        for position in load.breakpoints() {
            points.push(CriticalPoint {
                position,
                kind: CriticalPointKind::Load,
                shear: interpolate(shear, position),
                moment: interpolate(moment, position),
                is_discontinuity: load.is_discontinuity(),
            });
        }
    }

    for pair in shear.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        if left.value * right.value < 0.0 {
            let t = -left.value / (right.value - left.value);
            let position = left.position + t * (right.position - left.position);
            points.push(CriticalPoint {
                position,
                kind: CriticalPointKind::ZeroShear,
                shear: 0.0,
                moment: interpolate(moment, position),
                is_discontinuity: false,
            });
        }
    }

    points.extend(extrema_points(shear, moment));

    points.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points
}

fn extrema_points(shear: &[DiagramPoint], moment: &[DiagramPoint]) -> Vec<CriticalPoint> {
    let mut points = Vec::new();

    if let Some((max, min)) = extreme_samples(shear) {
        points.push(CriticalPoint {
            position: max.position,
            kind: CriticalPointKind::MaxShear,
            shear: max.value,
            moment: interpolate(moment, max.position),
            is_discontinuity: false,
        });
        points.push(CriticalPoint {
            position: min.position,
            kind: CriticalPointKind::MinShear,
            shear: min.value,
            moment: interpolate(moment, min.position),
            is_discontinuity: false,
        });
    }

    if let Some((max, min)) = extreme_samples(moment) {
        points.push(CriticalPoint {
            position: max.position,
            kind: CriticalPointKind::MaxMoment,
            shear: interpolate(shear, max.position),
            moment: max.value,
            is_discontinuity: false,
        });
        points.push(CriticalPoint {
            position: min.position,
            kind: CriticalPointKind::MinMoment,
            shear: interpolate(shear, min.position),
            moment: min.value,
            is_discontinuity: false,
        });
    }

    points
}

fn extreme_samples(points: &[DiagramPoint]) -> Option<(&DiagramPoint, &DiagramPoint)> {
    let first = points.first()?;
    let mut max = first;
    let mut min = first;
    for point in points {
        if point.value > max.value {
            max = point;
        }
        if point.value < min.value {
            min = point;
        }
    }
    Some((max, min))
}
