//! # Project Data Structures
//!
//! The `Project` struct is the root container the persistence layer
//! serializes: metadata, settings, and a set of labeled beams. Projects
//! serialize to `.spn` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: ProjectSettings (default unit system)
//! └── beams: HashMap<Uuid, BeamCase> (all beam definitions)
//! ```
//!
//! Analysis results are intentionally not stored here: they are cheap to
//! recompute and carry no state of their own.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Beam;
use crate::units::UnitSystem;

/// Current schema version for .spn files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A labeled beam definition inside a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamCase {
    /// User label (e.g., "B-1", "Roof beam at grid C")
    pub label: String,

    /// The beam definition
    pub beam: Beam,

    /// Free-form notes
    pub notes: String,
}

impl BeamCase {
    /// Create a labeled beam case
    pub fn new(label: impl Into<String>, beam: Beam) -> Self {
        BeamCase {
            label: label.into(),
            beam,
            notes: String::new(),
        }
    }

    /// Set notes and return self (builder pattern)
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Root project container.
///
/// Beams are stored in a flat UUID-keyed map so references stay stable
/// when cases are relabeled or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Project-wide settings
    pub settings: ProjectSettings,

    /// All beam cases, keyed by UUID
    pub beams: HashMap<Uuid, BeamCase>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: ProjectSettings::default(),
            beams: HashMap::new(),
        }
    }

    /// Add a beam case. Returns the UUID assigned to it.
    pub fn add_beam(&mut self, case: BeamCase) -> Uuid {
        let id = Uuid::new_v4();
        self.beams.insert(id, case);
        self.touch();
        id
    }

    /// Remove a beam case by UUID, returning it if it existed.
    pub fn remove_beam(&mut self, id: &Uuid) -> Option<BeamCase> {
        let case = self.beams.remove(id);
        if case.is_some() {
            self.touch();
        }
        case
    }

    /// Get a beam case by UUID.
    pub fn get_beam(&self, id: &Uuid) -> Option<&BeamCase> {
        self.beams.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of beam cases in the project.
    pub fn beam_count(&self) -> usize {
        self.beams.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Project-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Default unit system for new beams
    pub default_units: UnitSystem,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            default_units: UnitSystem::Metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Load, Support};

    fn sample_beam() -> Beam {
        Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::point(20.0, 5.0))
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("Jane Engineer", "26-042", "Acme Corp");
        assert_eq!(project.meta.engineer, "Jane Engineer");
        assert_eq!(project.meta.job_id, "26-042");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.beam_count(), 0);
    }

    #[test]
    fn test_add_remove_beam() {
        let mut project = Project::new("Engineer", "26-001", "Client");
        let id = project.add_beam(BeamCase::new("B-1", sample_beam()));

        assert_eq!(project.beam_count(), 1);
        assert_eq!(project.get_beam(&id).unwrap().label, "B-1");

        let removed = project.remove_beam(&id);
        assert!(removed.is_some());
        assert_eq!(project.beam_count(), 0);
    }

    #[test]
    fn test_project_serialization_roundtrip() {
        let mut project = Project::new("Engineer", "26-001", "Client");
        project.add_beam(BeamCase::new("B-1", sample_beam()).with_notes("roof beam"));

        let json = serde_json::to_string_pretty(&project).unwrap();
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, roundtrip);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut project = Project::new("Engineer", "26-001", "Client");
        let before = project.meta.modified;
        project.add_beam(BeamCase::new("B-1", sample_beam()));
        assert!(project.meta.modified >= before);
    }
}
