//! Support definitions
//!
//! A support constrains the beam at a single position. The engine solves
//! exactly two statically determinate arrangements: one fixed support
//! (cantilever) or two simple supports (pin + roller).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a support constrains the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportKind {
    /// Resists vertical and horizontal force, but not moment
    Pin,
    /// Resists vertical force only
    Roller,
    /// Resists force and moment (cantilever wall)
    Fixed,
}

impl SupportKind {
    /// Whether this support can develop a reaction moment
    pub fn resists_moment(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    /// Display name for traces and UIs
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Pin => "Pin",
            SupportKind::Roller => "Roller",
            SupportKind::Fixed => "Fixed",
        }
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single support on the beam
///
/// Each support carries a Uuid so reactions can refer back to the support
/// that produced them, and so UI rows stay stable across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Unique identifier for this support
    pub id: Uuid,

    /// Position along the beam, measured from the left end
    pub position: f64,

    /// Constraint type
    pub kind: SupportKind,
}

impl Support {
    /// Create a pin support at a position
    pub fn pin(position: f64) -> Self {
        Support {
            id: Uuid::new_v4(),
            position,
            kind: SupportKind::Pin,
        }
    }

    /// Create a roller support at a position
    pub fn roller(position: f64) -> Self {
        Support {
            id: Uuid::new_v4(),
            position,
            kind: SupportKind::Roller,
        }
    }

    /// Create a fixed support at a position
    pub fn fixed(position: f64) -> Self {
        Support {
            id: Uuid::new_v4(),
            position,
            kind: SupportKind::Fixed,
        }
    }
}
