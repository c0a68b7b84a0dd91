//! # beam_core - Determinate Beam Statics Engine
//!
//! `beam_core` analyzes one-dimensional beams in the two statically
//! determinate configurations: cantilevers (one fixed support) and simply
//! supported spans (pin + roller). From a beam definition it computes
//! support reactions, 100-point shear and moment diagrams, three
//! independent physical cross-checks, the engineering-significant critical
//! points, and a numbered derivation trace.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the whole pipeline is a pure function of the beam
//! - **JSON-First**: every input and output type round-trips through serde
//! - **Rich Errors**: malformed input is a structured error, never a panic;
//!   numerically suspicious output is a warning inside the results
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::analysis::analyze;
//! use beam_core::model::{Beam, Support, Load};
//!
//! // 10 m simply supported beam, 20 kN at midspan
//! let beam = Beam::new(10.0)
//!     .with_support(Support::pin(0.0))
//!     .with_support(Support::roller(10.0))
//!     .with_load(Load::point(20.0, 5.0));
//!
//! let results = analyze(&beam).unwrap();
//! assert!(results.validation.is_valid);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Beam, supports, and loads (the immutable input value)
//! - [`analysis`] - The analysis pipeline and its result types
//! - [`units`] - Display-only unit system tags
//! - [`errors`] - Structured error types
//! - [`project`] - Project container for the persistence layer
//! - [`file_io`] - Atomic project save/load

pub mod analysis;
pub mod errors;
pub mod file_io;
pub mod model;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, AnalysisResults};
pub use errors::{EngineError, EngineResult};
pub use model::{Beam, Load, MomentDirection, Support, SupportKind};
pub use units::UnitSystem;
