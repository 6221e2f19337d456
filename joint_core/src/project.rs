//! # Project Data Structures
//!
//! The `Project` struct is the root container for a set of joint
//! calculations. Projects serialize to `.jcp` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (nut factor, default grade, connection type)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use joint_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("nut_factor"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, CalculationResult, Connection};
use crate::equations::DEFAULT_NUT_FACTOR;
use crate::errors::CalcResult;
use crate::tables::BoltGrade;

/// Current schema version for .jcp files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    #[serde(default)]
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use joint_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
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
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Evaluate every item with the project settings.
    ///
    /// Items are reported in label order. A failing item does not stop the
    /// others; its error is kept in its report.
    pub fn evaluate_all(&self) -> Vec<ItemReport> {
        let mut entries: Vec<_> = self.items.iter().collect();
        entries.sort_by(|(a_id, a), (b_id, b)| a.label().cmp(b.label()).then(a_id.cmp(b_id)));

        entries
            .into_iter()
            .map(|(id, item)| ItemReport {
                id: *id,
                label: item.label().to_string(),
                calc_type: item.calc_type().to_string(),
                outcome: item.evaluate(&self.settings),
            })
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Result of evaluating one project item
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub id: Uuid,
    pub label: String,
    pub calc_type: String,
    pub outcome: CalcResult<CalculationResult>,
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    pub client: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Torque (nut) factor K used for wrench torque
    pub nut_factor: f64,

    /// Grade used when a bolt item does not name one
    pub default_grade: BoltGrade,

    /// Connection type that selects the recommended preload
    pub connection: Connection,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            nut_factor: DEFAULT_NUT_FACTOR,
            default_grade: BoltGrade::default(),
            connection: Connection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{BoltInput, BoltedJointInput, JointParameters};

    fn bolt_item(label: &str, diameter_in: f64, tpi: u32) -> CalculationItem {
        CalculationItem::Bolt(BoltInput {
            label: label.to_string(),
            diameter_in,
            tpi: Some(tpi),
            grade: None,
            preload_lb: None,
        })
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.nut_factor, 0.2);
        assert_eq!(project.settings.default_grade, BoltGrade::Sae8);
        assert_eq!(project.settings.connection, Connection::Reused);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Jane Engineer", "25-042", "Test Client");
        project.add_item(bolt_item("B-1", 0.5, 13));
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("\"default_grade\": 8"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
        assert_eq!(roundtrip.item_count(), 1);
    }

    #[test]
    fn test_settings_fill_missing_fields() {
        let settings: GlobalSettings = serde_json::from_str(r#"{"nut_factor": 0.15}"#).unwrap();
        assert_eq!(settings.nut_factor, 0.15);
        assert_eq!(settings.connection, Connection::Reused);
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let id = project.add_item(bolt_item("B-1", 0.5, 13));
        assert_eq!(project.item_count(), 1);
        assert!(project.get_item(&id).is_some());

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.remove_item(&id).is_none());
    }

    #[test]
    fn test_evaluate_all_keeps_going_after_errors() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.add_item(bolt_item("B-2", 0.55, 13));
        project.add_item(bolt_item("B-1", 0.5, 13));
        project.add_item(CalculationItem::BoltedJoint(BoltedJointInput::new(
            "J-1",
            JointParameters::default(),
        )));

        let reports = project.evaluate_all();
        let labels: Vec<_> = reports.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["B-1", "B-2", "J-1"]);
        assert!(reports[0].outcome.is_ok());
        assert!(reports[1].outcome.is_err());
        assert!(reports[2].outcome.is_ok());
    }
}
