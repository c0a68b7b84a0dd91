//! # Unit System Tags
//!
//! Display-only unit labeling. The engine does no unit conversion: inputs are
//! assumed consistent (kN and m, or lb and ft) and every computation is plain
//! arithmetic on those numbers. The tag exists so the calculation trace and
//! any front end can label values correctly, and so a beam round-trips
//! through JSON with its display preference intact.

use serde::{Deserialize, Serialize};

/// Unit system for display formatting.
///
/// Affects only labels, never arithmetic.
///
/// # Example
/// ```
/// use beam_core::units::UnitSystem;
///
/// let units = UnitSystem::Metric;
/// assert_eq!(units.force_label(), "kN");
/// assert_eq!(units.moment_label(), "kN·m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// kN, m, kN·m, kN/m
    Metric,
    /// lb, ft, lb·ft, lb/ft
    Imperial,
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

impl UnitSystem {
    /// Label for forces (point loads, reactions, shear)
    pub fn force_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kN",
            UnitSystem::Imperial => "lb",
        }
    }

    /// Label for lengths and positions
    pub fn length_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
        }
    }

    /// Label for moments
    pub fn moment_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kN·m",
            UnitSystem::Imperial => "lb·ft",
        }
    }

    /// Label for distributed load intensity
    pub fn intensity_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kN/m",
            UnitSystem::Imperial => "lb/ft",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "Metric"),
            UnitSystem::Imperial => write!(f, "Imperial"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(UnitSystem::Metric.intensity_label(), "kN/m");
        assert_eq!(UnitSystem::Imperial.force_label(), "lb");
        assert_eq!(UnitSystem::Imperial.moment_label(), "lb·ft");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"Imperial\"");
        let parsed: UnitSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, UnitSystem::Imperial);
    }
}
