//! # File I/O
//!
//! Project file operations with atomic saves and schema validation:
//! write to a `.tmp` sibling, sync, then rename over the target so a crash
//! mid-save never corrupts an existing file. Loads validate the schema
//! version before handing data to the caller.
//!
//! Projects are saved as `.spd` (shotcrete panel design) files containing
//! human-readable JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shotcrete_core::file_io::{save_project, load_project};
//! use shotcrete_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("drives.spd");
//!
//! save_project(&project, path).unwrap();
//! let loaded = load_project(path).unwrap();
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{CalcResult, DesignError};
use crate::project::{Project, SCHEMA_VERSION};

/// Save a project atomically: serialize, write to `<path>.tmp`, sync,
/// rename into place.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| {
        DesignError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let tmp_path = path.with_extension("spd.tmp");

    let mut file = fs::File::create(&tmp_path).map_err(|e| {
        DesignError::file_error("create", tmp_path.display().to_string(), e.to_string())
    })?;
    file.write_all(json.as_bytes()).map_err(|e| {
        DesignError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;
    file.sync_all().map_err(|e| {
        DesignError::file_error("sync", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(file);

    fs::rename(&tmp_path, path).map_err(|e| {
        // Leave no orphaned temp file behind on failure
        let _ = fs::remove_file(&tmp_path);
        DesignError::file_error("rename", path.display().to_string(), e.to_string())
    })?;
    Ok(())
}

/// Load a project, validating the schema version.
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path).map_err(|e| {
        DesignError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| {
        DesignError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    validate_version(&project.meta.version)?;
    Ok(project)
}

/// Check a file's schema version against what this build supports.
///
/// Major versions must match; within 0.x, a newer minor version than ours
/// is rejected because 0.x minors may break the schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let parse = |v: &str| -> Vec<u64> {
        v.split('.').filter_map(|part| part.parse().ok()).collect()
    };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(DesignError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    if file_parts[0] != current_parts[0] {
        return Err(DesignError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(DesignError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::DesignInput;
    use crate::loads::PanelLoadModel;
    use crate::project::Scenario;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_project_path(name: &str) -> PathBuf {
        temp_dir().join(format!("shotcrete_test_{}.spd", name))
    }

    fn sample_project() -> Project {
        let mut project = Project::new("Test Engineer", "TEST-001", "Test Client");
        let input = DesignInput::new(
            1.5,
            0.10,
            0.25,
            25.0,
            PanelLoadModel::ShaleWedge { theta_deg: 50.0 },
        );
        project.add_scenario(Scenario::new("Heading", input));
        project
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_project_path("roundtrip");

        save_project(&sample_project(), &path).unwrap();
        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.scenario_count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_project_path("atomic");
        let tmp_path = path.with_extension("spd.tmp");

        save_project(&sample_project(), &path).unwrap();
        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = load_project(Path::new("/nonexistent/missing.spd")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_project_path("newer_schema");
        let mut project = sample_project();
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }
}
