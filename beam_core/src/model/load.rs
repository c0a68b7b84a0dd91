//! Load definitions
//!
//! The [`Load`] enum is the closed set of load types the engine understands:
//! point loads (optionally angled), linearly varying distributed loads
//! (trapezoidal), and applied moments. All resultant and centroid arithmetic
//! lives here so the solver and sampler share one source of truth.
//!
//! ## Sign Conventions
//! - Downward applied loads carry positive magnitude
//! - Point load angle is in degrees, 0 = straight down
//! - Counterclockwise moments are positive, clockwise negative
//! - Distributed intensity is force per unit length, varying linearly
//!   between `start_magnitude` and `end_magnitude`

use serde::{Deserialize, Serialize};

/// Rotation sense of an applied moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentDirection {
    Clockwise,
    Counterclockwise,
}

impl std::fmt::Display for MomentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MomentDirection::Clockwise => write!(f, "CW"),
            MomentDirection::Counterclockwise => write!(f, "CCW"),
        }
    }
}

/// A single applied load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated load at a position.
    ///
    /// `angle_deg` measures the line of action from vertical; 0 is straight
    /// down. Only the vertical component `magnitude * cos(angle)` enters
    /// the equilibrium equations.
    Point {
        position: f64,
        magnitude: f64,
        angle_deg: f64,
    },

    /// Linearly varying (trapezoidal) distributed load over `[start, end]`.
    ///
    /// Equal endpoints degenerate to an equivalent point load of magnitude
    /// `start_magnitude` at that position.
    Distributed {
        start: f64,
        end: f64,
        start_magnitude: f64,
        end_magnitude: f64,
    },

    /// Applied (concentrated) moment at a position
    Moment {
        position: f64,
        magnitude: f64,
        direction: MomentDirection,
    },
}

impl Load {
    /// Create a vertical point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::Point {
            position,
            magnitude,
            angle_deg: 0.0,
        }
    }

    /// Create an angled point load (angle in degrees from vertical)
    pub fn point_angled(magnitude: f64, position: f64, angle_deg: f64) -> Self {
        Load::Point {
            position,
            magnitude,
            angle_deg,
        }
    }

    /// Create a uniform distributed load over `[start, end]`
    pub fn uniform(intensity: f64, start: f64, end: f64) -> Self {
        Load::Distributed {
            start,
            end,
            start_magnitude: intensity,
            end_magnitude: intensity,
        }
    }

    /// Create a trapezoidal distributed load over `[start, end]`
    pub fn trapezoidal(start_magnitude: f64, end_magnitude: f64, start: f64, end: f64) -> Self {
        Load::Distributed {
            start,
            end,
            start_magnitude,
            end_magnitude,
        }
    }

    /// Create an applied moment
    pub fn moment(magnitude: f64, position: f64, direction: MomentDirection) -> Self {
        Load::Moment {
            position,
            magnitude,
            direction,
        }
    }

    /// Display name for traces and UIs
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point { .. } => "Point",
            Load::Distributed { .. } => "Distributed",
            Load::Moment { .. } => "Moment",
        }
    }

    /// Total vertical force resultant (positive downward).
    ///
    /// Moment loads carry no net force and return 0.
    pub fn vertical_component(&self) -> f64 {
        match self {
            Load::Point {
                magnitude,
                angle_deg,
                ..
            } => magnitude * angle_deg.to_radians().cos(),
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => {
                if end <= start {
                    // Degenerate span acts as a point load of start_magnitude
                    *start_magnitude
                } else {
                    (start_magnitude + end_magnitude) / 2.0 * (end - start)
                }
            }
            Load::Moment { .. } => 0.0,
        }
    }

    /// Position of the force resultant.
    ///
    /// None for moment loads, whose effect is position-independent in the
    /// global moment sums.
    pub fn centroid(&self) -> Option<f64> {
        match self {
            Load::Point { position, .. } => Some(*position),
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => {
                if end <= start {
                    Some(*start)
                } else {
                    Some(start + trapezoid_centroid_offset(
                        *start_magnitude,
                        *end_magnitude,
                        end - start,
                    ))
                }
            }
            Load::Moment { .. } => None,
        }
    }

    /// Signed magnitude of an applied moment (counterclockwise positive).
    ///
    /// Zero for force loads.
    pub fn signed_moment(&self) -> f64 {
        match self {
            Load::Moment {
                magnitude,
                direction,
                ..
            } => match direction {
                MomentDirection::Counterclockwise => *magnitude,
                MomentDirection::Clockwise => -magnitude,
            },
            _ => 0.0,
        }
    }

    /// Moment of this load about a reference position.
    ///
    /// Force loads contribute `V * (centroid - reference)`; applied moments
    /// contribute their signed magnitude directly, independent of position.
    pub fn moment_about(&self, reference: f64) -> f64 {
        match self.centroid() {
            Some(centroid) => self.vertical_component() * (centroid - reference),
            None => self.signed_moment(),
        }
    }

    /// Force resultant and its centroid for the portion of this load at or
    /// left of a cut at `x`.
    ///
    /// Returns `None` when nothing has accumulated yet (cut left of the
    /// load) and for moment loads, which contribute a moment step rather
    /// than a force. A distributed load yields the partial trapezoid
    /// integral while the cut is inside its span and the full resultant
    /// once the cut passes its end.
    pub fn resultant_up_to(&self, x: f64) -> Option<(f64, f64)> {
        match self {
            Load::Point { position, .. } => {
                if *position <= x {
                    Some((self.vertical_component(), *position))
                } else {
                    None
                }
            }
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => {
                if end <= start {
                    // Degenerate span: behaves exactly like a point load
                    if *start <= x {
                        Some((*start_magnitude, *start))
                    } else {
                        None
                    }
                } else if x <= *start {
                    None
                } else {
                    let cut = x.min(*end);
                    let width = cut - start;
                    let w_cut = start_magnitude
                        + (end_magnitude - start_magnitude) * (cut - start) / (end - start);
                    let force = (start_magnitude + w_cut) / 2.0 * width;
                    let centroid =
                        start + trapezoid_centroid_offset(*start_magnitude, w_cut, width);
                    Some((force, centroid))
                }
            }
            Load::Moment { .. } => None,
        }
    }

    /// Distributed intensity at a position (0 outside the span).
    ///
    /// Used by the dV/dx = -w cross-check. Degenerate zero-span loads have
    /// no meaningful intensity and return 0.
    pub fn intensity_at(&self, x: f64) -> f64 {
        match self {
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } if end > start && *start <= x && x <= *end => {
                start_magnitude + (end_magnitude - start_magnitude) * (x - start) / (end - start)
            }
            _ => 0.0,
        }
    }

    /// Positions where this load makes shear, moment, or intensity jump or
    /// kink: the point itself for concentrated loads, both edges for
    /// distributed loads.
    pub fn breakpoints(&self) -> Vec<f64> {
        match self {
            Load::Point { position, .. } | Load::Moment { position, .. } => vec![*position],
            Load::Distributed { start, end, .. } => {
                if end <= start {
                    vec![*start]
                } else {
                    vec![*start, *end]
                }
            }
        }
    }

    /// Whether the shear or moment diagram jumps at this load's position
    /// (point loads and applied moments; distributed loads only kink)
    pub fn is_discontinuity(&self) -> bool {
        match self {
            Load::Point { .. } | Load::Moment { .. } => true,
            // A zero-span distributed load acts as a point load
            Load::Distributed { start, end, .. } => end <= start,
        }
    }
}

/// Centroid offset from the left edge of a trapezoid with left ordinate
/// `w_left`, right ordinate `w_right`, and width `width`.
fn trapezoid_centroid_offset(w_left: f64, w_right: f64, width: f64) -> f64 {
    let sum = w_left + w_right;
    if sum.abs() < f64::EPSILON {
        // Net-zero trapezoid (ramp crossing zero): force is 0, any centroid
        // gives a 0 moment contribution
        width / 2.0
    } else {
        width * (w_left + 2.0 * w_right) / (3.0 * sum)
    }
}
