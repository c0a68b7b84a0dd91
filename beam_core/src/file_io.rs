//! # File I/O Module
//!
//! Project file operations with atomic saves: write to a temporary file,
//! fsync, then rename over the target, so an interrupted save never leaves
//! a corrupt project behind. Schema versions are checked on load.
//!
//! Projects are saved as `.spn` files containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{save_project, load_project};
//! use beam_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "26-001", "Client");
//! save_project(&project, Path::new("job.spn"))?;
//! let loaded = load_project(Path::new("job.spn"))?;
//! # Ok::<(), beam_core::errors::EngineError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::{EngineError, EngineResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Save a project to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize the project to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target (atomic on most filesystems)
pub fn save_project(project: &Project, path: &Path) -> EngineResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| {
        EngineError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let tmp_path = path.with_extension("spn.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        EngineError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        EngineError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        EngineError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up the temp file if the rename fails
        let _ = fs::remove_file(&tmp_path);
        EngineError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a project from a file, validating its schema version.
pub fn load_project(path: &Path) -> EngineResult<Project> {
    let mut file = File::open(path).map_err(|e| {
        EngineError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        EngineError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| EngineError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Check that a file's schema version is compatible with this build.
///
/// Currently requires a major.minor match; patch differences are accepted.
fn validate_version(file_version: &str) -> EngineResult<()> {
    let major_minor = |v: &str| -> Option<(String, String)> {
        let mut parts = v.split('.');
        Some((parts.next()?.to_string(), parts.next()?.to_string()))
    };

    match (major_minor(file_version), major_minor(SCHEMA_VERSION)) {
        (Some(file), Some(expected)) if file == expected => Ok(()),
        _ => Err(EngineError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Beam, Load, Support};
    use crate::project::BeamCase;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("beam_core_test_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut project = Project::new("Engineer", "26-001", "Client");
        let beam = Beam::new(10.0)
            .with_support(Support::pin(0.0))
            .with_support(Support::roller(10.0))
            .with_load(Load::point(20.0, 5.0));
        project.add_beam(BeamCase::new("B-1", beam));

        let path = temp_path("roundtrip.spn");
        save_project(&project, &path).unwrap();
        let loaded = load_project(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(project, loaded);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_project(Path::new("/nonexistent/beam_core_missing.spn")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid.spn");
        fs::write(&path, "not json at all").unwrap();
        let err = load_project(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_version_mismatch() {
        let mut project = Project::new("Engineer", "26-001", "Client");
        project.meta.version = "9.9.0".to_string();

        let path = temp_path("version.spn");
        save_project(&project, &path).unwrap();
        let err = load_project(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_validate_version_accepts_patch_difference() {
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.2.0").is_err());
    }
}
