//! # Beam Model
//!
//! The immutable input value the whole pipeline consumes: geometry, supports,
//! and applied loads. The engine never mutates a [`Beam`]; every analysis
//! stage is a pure function of it. All types serialize cleanly to JSON so a
//! beam round-trips losslessly through the persistence layer.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::model::{Beam, Support, Load};
//!
//! // 10 m simply supported beam with a midspan point load
//! let beam = Beam::new(10.0)
//!     .with_support(Support::pin(0.0))
//!     .with_support(Support::roller(10.0))
//!     .with_load(Load::point(20.0, 5.0));
//!
//! assert!(beam.validate().is_ok());
//! ```

pub mod load;
pub mod support;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::units::UnitSystem;

pub use load::{Load, MomentDirection};
pub use support::{Support, SupportKind};

/// Minimum spacing between two supports before they count as coincident
pub const SUPPORT_SPACING_EPS: f64 = 1e-9;

/// A one-dimensional beam with supports and applied loads.
///
/// Positions run rightward from 0 at the left end. Forces are positive
/// upward; applied loads acting downward carry positive magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Total beam length (must be positive)
    pub length: f64,

    /// Supports, in the order they were added
    pub supports: Vec<Support>,

    /// Applied loads, in the order they were added
    pub loads: Vec<Load>,

    /// Unit system tag (display only, never enters arithmetic)
    pub units: UnitSystem,
}

impl Beam {
    /// Create an empty beam of a given length
    pub fn new(length: f64) -> Self {
        Beam {
            length,
            supports: Vec::new(),
            loads: Vec::new(),
            units: UnitSystem::default(),
        }
    }

    /// Add a support and return self (builder pattern)
    pub fn with_support(mut self, support: Support) -> Self {
        self.supports.push(support);
        self
    }

    /// Add a load and return self (builder pattern)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Set the unit system tag and return self (builder pattern)
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Whether this beam is a cantilever (single fixed support)
    pub fn is_cantilever(&self) -> bool {
        self.supports.len() == 1 && self.supports[0].kind == SupportKind::Fixed
    }

    /// Validate geometry, supports, and loads.
    ///
    /// Checks the statically determinate support invariant (exactly one
    /// fixed support, or exactly two non-fixed supports at distinct
    /// positions) and that every position lies within the beam.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(EngineError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }

        for support in &self.supports {
            self.check_position("support.position", support.position)?;
        }

        match self.supports.len() {
            0 => {
                return Err(EngineError::unsupported_configuration(
                    "Beam has no supports; add one fixed support or two simple supports",
                ));
            }
            1 => {
                if self.supports[0].kind != SupportKind::Fixed {
                    return Err(EngineError::unsupported_configuration(format!(
                        "A single {} support cannot restrain the beam; \
                         a cantilever requires a fixed support",
                        self.supports[0].kind
                    )));
                }
            }
            2 => {
                if let Some(fixed) = self
                    .supports
                    .iter()
                    .find(|s| s.kind == SupportKind::Fixed)
                {
                    return Err(EngineError::unsupported_configuration(format!(
                        "Two supports including a fixed support at {} are statically \
                         indeterminate",
                        fixed.position
                    )));
                }
                let spacing = (self.supports[1].position - self.supports[0].position).abs();
                if spacing <= SUPPORT_SPACING_EPS {
                    return Err(EngineError::unsupported_configuration(format!(
                        "Supports at {} and {} are coincident",
                        self.supports[0].position, self.supports[1].position
                    )));
                }
            }
            n => {
                return Err(EngineError::unsupported_configuration(format!(
                    "{} supports make the beam statically indeterminate; \
                     this engine solves 1 fixed or 2 simple supports",
                    n
                )));
            }
        }

        for load in &self.loads {
            self.validate_load(load)?;
        }

        Ok(())
    }

    fn validate_load(&self, load: &Load) -> EngineResult<()> {
        match load {
            Load::Point {
                position, magnitude, ..
            } => {
                self.check_position("Point.position", *position)?;
                self.check_finite("Point.magnitude", *magnitude)?;
            }
            Load::Distributed {
                start,
                end,
                start_magnitude,
                end_magnitude,
            } => {
                self.check_position("Distributed.start", *start)?;
                self.check_position("Distributed.end", *end)?;
                self.check_finite("Distributed.start_magnitude", *start_magnitude)?;
                self.check_finite("Distributed.end_magnitude", *end_magnitude)?;
                if end < start {
                    return Err(EngineError::invalid_input(
                        "Distributed.end",
                        end.to_string(),
                        format!("End position must not precede start ({})", start),
                    ));
                }
            }
            Load::Moment {
                position, magnitude, ..
            } => {
                self.check_position("Moment.position", *position)?;
                self.check_finite("Moment.magnitude", *magnitude)?;
            }
        }
        Ok(())
    }

    fn check_position(&self, field: &str, position: f64) -> EngineResult<()> {
        if !position.is_finite() || position < 0.0 || position > self.length {
            return Err(EngineError::invalid_input(
                field,
                position.to_string(),
                format!("Position must lie within [0, {}]", self.length),
            ));
        }
        Ok(())
    }

    fn check_finite(&self, field: &str, value: f64) -> EngineResult<()> {
        if !value.is_finite() {
            return Err(EngineError::invalid_input(
                field,
                value.to_string(),
                "Value must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_simply_supported() {
        let beam = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::point(20.0, 5.0));
        assert!(beam.validate().is_ok());
        assert!(!beam.is_cantilever());
    }

    #[test]
    fn test_valid_cantilever() {
        let beam = Beam::new(3.0)
            .with_support(Support::fixed(3.0))
            .with_load(Load::point(5.0, 0.0));
        assert!(beam.validate().is_ok());
        assert!(beam.is_cantilever());
    }

    #[test]
    fn test_rejects_non_positive_length() {
        let beam = Beam::new(0.0).with_support(Support::fixed(0.0));
        let err = beam.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_single_non_fixed_support() {
        let beam = Beam::new(5.0).with_support(Support::pin(0.0));
        let err = beam.validate().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_rejects_coincident_supports() {
        let beam = Beam::new(5.0)
            .with_support(Support::pin(2.0))
            .with_support(Support::roller(2.0));
        let err = beam.validate().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_rejects_propped_cantilever() {
        let beam = Beam::new(5.0)
            .with_support(Support::fixed(0.0))
            .with_support(Support::roller(5.0));
        let err = beam.validate().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_rejects_three_supports() {
        let beam = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(5.0))
            .with_support(Support::roller(10.0));
        assert!(beam.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_load() {
        let beam = Beam::new(4.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(4.0))
            .with_load(Load::point(10.0, 6.0));
        let err = beam.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_reversed_distributed_span() {
        let beam = Beam::new(8.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(8.0))
            .with_load(Load::uniform(10.0, 5.0, 3.0));
        assert!(beam.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let beam = Beam::new(6.0)
            .with_support(Support::fixed(6.0))
            .with_load(Load::trapezoidal(2.0, 8.0, 0.0, 6.0))
            .with_units(crate::units::UnitSystem::Imperial);
        let json = serde_json::to_string_pretty(&beam).unwrap();
        let roundtrip: Beam = serde_json::from_str(&json).unwrap();
        assert_eq!(beam, roundtrip);
    }
}
