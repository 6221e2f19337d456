//! # Joint Calculations
//!
//! Stateful models of bolts, bolted joints and weld groups, plus the
//! JSON-facing project items built on them. Each project calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bolt`] - Tensile area, grade strengths, torque for a preload
//! - [`bolted_joint`] - External load split between bolts and members
//! - [`member_stiffness`] - Member stiffness estimate and joint constant
//! - [`weld_group`] - Weld group area, centroid and second moment
//! - [`weld_stress`] - Primary and secondary weld shear

pub mod bolt;
pub mod bolted_joint;
pub mod member_stiffness;
pub mod weld_group;
pub mod weld_stress;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::errors::CalcResult;
use crate::project::GlobalSettings;

pub use bolt::{Bolt, BoltInput, BoltResult, Connection};
pub use bolted_joint::{BoltedJoint, BoltedJointInput, BoltedJointResult, JointLoads, JointParameters};
pub use member_stiffness::{MemberStiffnessInput, MemberStiffnessResult};
pub use weld_group::{GeometryOverrides, GroupSelection, SecondMoment, WeldGroup};
pub use weld_stress::{MomentTerm, SecondaryShear, WeldGroupInput, WeldGroupResult, WeldStress};

/// Enum wrapper for all calculation types.
///
/// Lets a project store heterogeneous calculations in one collection.
///
/// ```json
/// { "type": "Bolt", "label": "B-1", "diameter_in": 0.5, "tpi": 13 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Bolt(BoltInput),
    BoltedJoint(BoltedJointInput),
    WeldGroup(WeldGroupInput),
    MemberStiffness(MemberStiffnessInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Bolt(b) => &b.label,
            CalculationItem::BoltedJoint(j) => &j.label,
            CalculationItem::WeldGroup(w) => &w.label,
            CalculationItem::MemberStiffness(m) => &m.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Bolt(_) => "Bolt",
            CalculationItem::BoltedJoint(_) => "BoltedJoint",
            CalculationItem::WeldGroup(_) => "WeldGroup",
            CalculationItem::MemberStiffness(_) => "MemberStiffness",
        }
    }

    /// Run the calculation this item describes.
    pub fn evaluate(&self, settings: &GlobalSettings) -> CalcResult<CalculationResult> {
        log::debug!("evaluating {} '{}'", self.calc_type(), self.label());
        Ok(match self {
            CalculationItem::Bolt(input) => CalculationResult::Bolt(bolt::calculate(input, settings)?),
            CalculationItem::BoltedJoint(input) => {
                CalculationResult::BoltedJoint(bolted_joint::calculate(input)?)
            }
            CalculationItem::WeldGroup(input) => CalculationResult::WeldGroup(weld_stress::calculate(input)?),
            CalculationItem::MemberStiffness(input) => {
                CalculationResult::MemberStiffness(member_stiffness::calculate(input)?)
            }
        })
    }
}

/// Output of [`CalculationItem::evaluate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationResult {
    Bolt(BoltResult),
    BoltedJoint(BoltedJointResult),
    WeldGroup(WeldGroupResult),
    MemberStiffness(MemberStiffnessResult),
}

impl CalculationResult {
    /// Diagnostics the calculation produced, if any
    pub fn diagnostics(&self) -> Diagnostics {
        match self {
            CalculationResult::BoltedJoint(r) => r.diagnostics(),
            CalculationResult::WeldGroup(r) => r.diagnostics.clone(),
            CalculationResult::Bolt(_) | CalculationResult::MemberStiffness(_) => Diagnostics::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;
    use crate::tables::{MemberMaterial, TorsionGroup, WeldGeometry};

    #[test]
    fn test_item_serialization_is_tagged() {
        let item = CalculationItem::Bolt(BoltInput {
            label: "B-1".to_string(),
            diameter_in: 0.5,
            tpi: Some(13),
            grade: None,
            preload_lb: None,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Bolt\""));

        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, item);
        assert_eq!(roundtrip.label(), "B-1");
        assert_eq!(roundtrip.calc_type(), "Bolt");
    }

    #[test]
    fn test_evaluate_each_kind() {
        let settings = GlobalSettings::default();
        let items = vec![
            CalculationItem::Bolt(BoltInput {
                label: "B-1".to_string(),
                diameter_in: 0.5,
                tpi: Some(13),
                grade: None,
                preload_lb: Some(1000.0),
            }),
            CalculationItem::BoltedJoint(BoltedJointInput::new(
                "J-1",
                JointParameters {
                    preload_lb: Some(500.0),
                    ..Default::default()
                },
            )),
            CalculationItem::WeldGroup(WeldGroupInput {
                label: "W-1".to_string(),
                group: TorsionGroup::Line.into(),
                geometry: WeldGeometry::default(),
                shear_force_lb: Some(100.0),
                moments: Vec::new(),
            }),
            CalculationItem::MemberStiffness(MemberStiffnessInput {
                label: "M-1".to_string(),
                material: MemberMaterial::Copper,
                bolt_diameter_in: 0.5,
                member_1_thickness_in: 1.0,
                member_2_thickness_in: 0.0,
                k_bolt_mlb_per_in: None,
            }),
        ];

        let results: Vec<_> = items.iter().map(|i| i.evaluate(&settings).unwrap()).collect();
        assert!(matches!(results[0], CalculationResult::Bolt(_)));
        assert_eq!(results[1].diagnostics().len(), 12);
        assert!(results[2].diagnostics().is_empty());
        assert!(matches!(results[3], CalculationResult::MemberStiffness(_)));
    }

    #[test]
    fn test_project_item_reports_unknown_joint_key() {
        let item: CalculationItem = serde_json::from_str(
            r#"{
                "type": "BoltedJoint",
                "label": "J-2",
                "preload_lb": 500.0,
                "total_load_lb": 10000.0,
                "bolt_count": 2,
                "grip": 3.5
            }"#,
        )
        .unwrap();

        let result = item.evaluate(&GlobalSettings::default()).unwrap();
        let diagnostics = result.diagnostics();
        let unrecognized: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnrecognizedField { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(unrecognized, vec!["grip"]);
        assert!(diagnostics.unresolved_fields().contains(&"grip_length_in"));
    }

    #[test]
    fn test_weld_item_rejects_unknown_key() {
        let parsed: Result<CalculationItem, _> = serde_json::from_str(
            r#"{
                "type": "WeldGroup",
                "label": "W-2",
                "group": { "loading": "torsion", "group": "line" },
                "shear_force": 100.0
            }"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_evaluate_propagates_lookup_miss() {
        let item = CalculationItem::Bolt(BoltInput {
            label: "B-2".to_string(),
            diameter_in: 0.55,
            tpi: Some(13),
            grade: None,
            preload_lb: None,
        });
        let err = item.evaluate(&GlobalSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "LOOKUP_MISS");
    }
}
