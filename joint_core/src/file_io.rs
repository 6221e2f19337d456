//! # File I/O Module
//!
//! Project file operations:
//! - **Atomic saves**: write to `.jcp.tmp`, sync, rename over the target
//! - **Version validation**: refuse files written by an incompatible schema
//!
//! ## File Format
//!
//! Projects are saved as `.jcp` (joint calculation project) files
//! containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use joint_core::file_io::{load_project, save_project};
//! use joint_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("bracket.jcp");
//!
//! save_project(&project, path).unwrap();
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.meta.job_id, "25-001");
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "jcp";

/// Save a project with an atomic write.
///
/// The JSON goes to a sibling temp file first and is renamed over `path`
/// only after it has been synced, so a crash never leaves a half-written
/// project behind.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension(format!("{}.tmp", PROJECT_EXTENSION));

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("saved project '{}' ({} items)", path.display(), project.item_count());
    Ok(())
}

/// Load a project and check its schema version.
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let value = read_json(path)?;

    let project: Project = serde_json::from_value(value).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid project in {}: {}", path.display(), e),
    })?;

    validate_version(&project.meta.version)?;

    log::debug!(
        "loaded project '{}' version {} ({} items)",
        path.display(),
        project.meta.version,
        project.item_count()
    );
    Ok(project)
}

/// Read any JSON document from disk.
pub fn read_json(path: &Path) -> CalcResult<serde_json::Value> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

fn parse_version(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.').map(str::parse::<u32>);
    let major = parts.next()?.ok()?;
    let minor = match parts.next() {
        Some(minor) => minor.ok()?,
        None => 0,
    };
    Some((major, minor))
}

/// Major versions must match. While the schema is 0.x, a file with a newer
/// minor version than ours is refused too.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = parse_version(file_version).ok_or_else(mismatch)?;
    let (ours_major, ours_minor) = parse_version(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != ours_major {
        return Err(mismatch());
    }
    if ours_major == 0 && file_minor > ours_minor {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{BoltInput, CalculationItem};
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_project_path(name: &str) -> PathBuf {
        temp_dir().join(format!("jointcalc_test_{}.{}", name, PROJECT_EXTENSION))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_project_path("roundtrip");

        let mut project = Project::new("Test Engineer", "TEST-001", "Test Client");
        project.settings.nut_factor = 0.18;
        project.add_item(CalculationItem::Bolt(BoltInput {
            label: "B-1".to_string(),
            diameter_in: 0.5,
            tpi: Some(13),
            grade: None,
            preload_lb: Some(1000.0),
        }));
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.job_id, "TEST-001");
        assert_eq!(loaded.settings.nut_factor, 0.18);
        assert_eq!(loaded.items, project.items);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_project_path("atomic");
        let tmp_path = path.with_extension("jcp.tmp");

        let project = Project::new("Test", "TEST", "Client");
        save_project(&project, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_project(&temp_project_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_project_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_project_path("newer");
        let mut project = Project::new("Test", "TEST", "Client");
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
        assert!(validate_version("").is_err());
    }
}
