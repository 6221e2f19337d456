//! # Bolted Joint Calculation
//!
//! Splits an external tensile load between the bolts and the clamped members
//! of a preloaded joint, using the Table 8-12 stiffness bands (Shigley 8-7).
//!
//! ## Load Split
//!
//! ```text
//! P   = P_total / n
//! P_b = C_b·P
//! P_m = P_b·k_m / k_b
//! F_b = P_b + F_i
//! F_m = P_m - F_i
//! ```
//!
//! Every input is optional. Terms whose inputs are missing stay `None` and are
//! reported by [`BoltedJoint::check_unresolved`].
//!
//! ## Example
//!
//! ```rust
//! use joint_core::calculations::bolted_joint::{BoltedJoint, JointParameters};
//!
//! let joint = BoltedJoint::new(JointParameters {
//!     preload_lb: Some(500.0),
//!     total_load_lb: Some(10_000.0),
//!     bolt_count: Some(2),
//!     grip_length_in: Some(3.5),
//! })
//! .unwrap();
//!
//! let loads = joint.loads();
//! assert!((loads.bolt_force_lb.unwrap() - 1180.0).abs() < 1e-9);
//! assert!(joint.check_unresolved().is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::errors::{CalcError, CalcResult};
use crate::tables::stiffness_band;

/// Keys accepted by [`JointParameters::from_json_lenient`]
pub const PARAMETER_NAMES: [&str; 4] = ["preload_lb", "total_load_lb", "bolt_count", "grip_length_in"];

/// Sparse set of joint inputs. `None` means "not supplied".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointParameters {
    /// Bolt preload F_i (lb)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload_lb: Option<f64>,

    /// Total external tensile load on the joint (lb)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_load_lb: Option<f64>,

    /// Number of bolts sharing the load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bolt_count: Option<u32>,

    /// Bolt grip length (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grip_length_in: Option<f64>,
}

impl JointParameters {
    /// Read parameters from a loosely-typed JSON object.
    ///
    /// Keys outside [`PARAMETER_NAMES`] are ignored and reported as
    /// `UnrecognizedField` diagnostics. `null` values count as not supplied.
    /// A known key with a value of the wrong type is an error.
    pub fn from_json_lenient(value: &serde_json::Value) -> CalcResult<(Self, Diagnostics)> {
        let object = value.as_object().ok_or_else(|| {
            CalcError::invalid_input("parameters", value.to_string(), "Expected a JSON object")
        })?;

        let mut params = JointParameters::default();
        let mut diagnostics = Diagnostics::new();

        for (key, field_value) in object {
            if field_value.is_null() && PARAMETER_NAMES.contains(&key.as_str()) {
                continue;
            }
            match key.as_str() {
                "preload_lb" => params.preload_lb = Some(json_number(key, field_value)?),
                "total_load_lb" => params.total_load_lb = Some(json_number(key, field_value)?),
                "grip_length_in" => params.grip_length_in = Some(json_number(key, field_value)?),
                "bolt_count" => {
                    let count = field_value
                        .as_u64()
                        .and_then(|n| u32::try_from(n).ok())
                        .ok_or_else(|| {
                            CalcError::invalid_input(
                                "bolt_count",
                                field_value.to_string(),
                                "Expected a non-negative integer",
                            )
                        })?;
                    params.bolt_count = Some(count);
                }
                unknown => diagnostics.push(unrecognized_parameter(unknown)),
            }
        }

        Ok((params, diagnostics))
    }

    /// Overwrite the fields that `update` supplies; leave the rest.
    fn merge(&mut self, update: &JointParameters) {
        if update.preload_lb.is_some() {
            self.preload_lb = update.preload_lb;
        }
        if update.total_load_lb.is_some() {
            self.total_load_lb = update.total_load_lb;
        }
        if update.bolt_count.is_some() {
            self.bolt_count = update.bolt_count;
        }
        if update.grip_length_in.is_some() {
            self.grip_length_in = update.grip_length_in;
        }
    }

    fn validate(&self) -> CalcResult<()> {
        if self.bolt_count == Some(0) {
            return Err(CalcError::invalid_input("bolt_count", "0", "At least one bolt is required"));
        }
        for (field, value) in [
            ("preload_lb", self.preload_lb),
            ("total_load_lb", self.total_load_lb),
            ("grip_length_in", self.grip_length_in),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CalcError::invalid_input(field, v.to_string(), "Must be a finite number"));
                }
            }
        }
        Ok(())
    }
}

fn unrecognized_parameter(key: &str) -> Diagnostic {
    log::warn!("ignoring unrecognized joint parameter '{}'", key);
    Diagnostic::UnrecognizedField {
        field: key.to_string(),
        allowed: PARAMETER_NAMES.iter().map(|s| s.to_string()).collect(),
    }
}

fn json_number(key: &str, value: &serde_json::Value) -> CalcResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| CalcError::invalid_input(key, value.to_string(), "Expected a number"))
}

/// Derived joint quantities. Each is `None` until its inputs are known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointLoads {
    /// External load per bolt P (lb)
    pub per_bolt_load_lb: Option<f64>,
    /// Share of P carried by the bolt P_b (lb)
    pub bolt_load_lb: Option<f64>,
    /// Share of P carried by the members P_m (lb)
    pub member_load_lb: Option<f64>,
    /// Resultant bolt load F_b (lb)
    pub bolt_force_lb: Option<f64>,
    /// Resultant member load F_m (lb), negative while the joint stays clamped
    pub member_force_lb: Option<f64>,
    pub c_bolt: Option<f64>,
    pub c_member: Option<f64>,
    /// Bolt stiffness k_b (Mlb/in)
    pub k_bolt: Option<f64>,
    /// Member stiffness k_m (Mlb/in)
    pub k_member: Option<f64>,
}

/// A preloaded joint under external tension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoltedJoint {
    inputs: JointParameters,
    loads: JointLoads,
}

impl BoltedJoint {
    /// Build a joint from whatever parameters are known.
    pub fn new(params: JointParameters) -> CalcResult<Self> {
        let mut joint = BoltedJoint::default();
        joint.set(params)?;
        Ok(joint)
    }

    /// Overwrite the supplied parameters and recompute everything.
    ///
    /// On error the joint keeps its previous inputs and loads.
    pub fn set(&mut self, update: JointParameters) -> CalcResult<()> {
        let mut inputs = self.inputs;
        inputs.merge(&update);
        inputs.validate()?;

        let loads = recompute(&inputs)?;
        self.inputs = inputs;
        self.loads = loads;
        Ok(())
    }

    pub fn inputs(&self) -> &JointParameters {
        &self.inputs
    }

    pub fn loads(&self) -> &JointLoads {
        &self.loads
    }

    /// Report every input or derived value that is still `None`.
    ///
    /// Scan order: preload, total load, per-bolt load, bolt load, member load,
    /// bolt force, member force, C_b, C_m, bolt count, grip length, k_b, k_m.
    pub fn check_unresolved(&self) -> Diagnostics {
        let inputs = &self.inputs;
        let loads = &self.loads;
        [
            ("preload_lb", inputs.preload_lb.is_none()),
            ("total_load_lb", inputs.total_load_lb.is_none()),
            ("per_bolt_load_lb", loads.per_bolt_load_lb.is_none()),
            ("bolt_load_lb", loads.bolt_load_lb.is_none()),
            ("member_load_lb", loads.member_load_lb.is_none()),
            ("bolt_force_lb", loads.bolt_force_lb.is_none()),
            ("member_force_lb", loads.member_force_lb.is_none()),
            ("c_bolt", loads.c_bolt.is_none()),
            ("c_member", loads.c_member.is_none()),
            ("bolt_count", inputs.bolt_count.is_none()),
            ("grip_length_in", inputs.grip_length_in.is_none()),
            ("k_bolt", loads.k_bolt.is_none()),
            ("k_member", loads.k_member.is_none()),
        ]
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(field, _)| Diagnostic::UnresolvedField {
            field: field.to_string(),
        })
        .collect()
    }
}

fn recompute(inputs: &JointParameters) -> CalcResult<JointLoads> {
    let mut loads = JointLoads::default();

    if let Some(grip) = inputs.grip_length_in {
        let band = stiffness_band(grip)?;
        loads.c_bolt = Some(band.c_bolt);
        loads.c_member = Some(band.c_member);
        loads.k_bolt = Some(band.k_bolt);
        loads.k_member = Some(band.k_member);
    }

    let bolt_count = f64::from(inputs.bolt_count.unwrap_or(1));
    loads.per_bolt_load_lb = inputs.total_load_lb.map(|total| total / bolt_count);

    loads.bolt_load_lb = match (loads.c_bolt, loads.per_bolt_load_lb) {
        (Some(c_b), Some(p)) => Some(c_b * p),
        _ => None,
    };

    loads.member_load_lb = match (loads.bolt_load_lb, loads.k_bolt, loads.k_member) {
        (Some(p_b), Some(k_b), Some(k_m)) => Some(p_b * k_m / k_b),
        _ => None,
    };

    loads.bolt_force_lb = match (loads.bolt_load_lb, inputs.preload_lb) {
        (Some(p_b), Some(f_i)) => Some(p_b + f_i),
        _ => None,
    };

    loads.member_force_lb = match (loads.member_load_lb, inputs.preload_lb) {
        (Some(p_m), Some(f_i)) => Some(p_m - f_i),
        _ => None,
    };

    log::debug!("joint recompute: {:?} -> {:?}", inputs, loads);
    Ok(loads)
}

/// Input for a bolted joint item in a project.
///
/// Parameters sit beside the label in the item's JSON object. Any other key
/// is kept in `unrecognized` so the file round-trips, and [`calculate`]
/// reports it as an `UnrecognizedField` diagnostic.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cylinder head",
///   "preload_lb": 500.0,
///   "total_load_lb": 10000.0,
///   "bolt_count": 2,
///   "grip_length_in": 3.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltedJointInput {
    /// User label for this joint
    pub label: String,

    #[serde(flatten)]
    pub parameters: JointParameters,

    /// Keys that are not joint parameters. Must follow `parameters` so the
    /// known keys are taken first.
    #[serde(flatten)]
    pub unrecognized: serde_json::Map<String, serde_json::Value>,
}

impl BoltedJointInput {
    pub fn new(label: impl Into<String>, parameters: JointParameters) -> Self {
        BoltedJointInput {
            label: label.into(),
            parameters,
            unrecognized: serde_json::Map::new(),
        }
    }
}

/// Results from a bolted joint item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltedJointResult {
    pub joint: BoltedJoint,

    /// Input keys that were ignored
    #[serde(default, skip_serializing_if = "Diagnostics::is_empty")]
    pub ignored: Diagnostics,

    /// Fields that could not be resolved from the given inputs
    pub unresolved: Diagnostics,
}

impl BoltedJointResult {
    /// Ignored keys first, then unresolved fields
    pub fn diagnostics(&self) -> Diagnostics {
        self.ignored.iter().chain(self.unresolved.iter()).cloned().collect()
    }
}

pub fn calculate(input: &BoltedJointInput) -> CalcResult<BoltedJointResult> {
    let joint = BoltedJoint::new(input.parameters)?;
    let ignored = input
        .unrecognized
        .keys()
        .map(|key| unrecognized_parameter(key))
        .collect();
    let unresolved = joint.check_unresolved();
    Ok(BoltedJointResult {
        joint,
        ignored,
        unresolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn reference_params() -> JointParameters {
        JointParameters {
            preload_lb: Some(500.0),
            total_load_lb: Some(10_000.0),
            bolt_count: Some(2),
            grip_length_in: Some(3.5),
        }
    }

    #[test]
    fn test_reference_joint() {
        let joint = BoltedJoint::new(reference_params()).unwrap();
        let loads = joint.loads();

        assert_eq!(loads.c_bolt, Some(0.136));
        assert_eq!(loads.c_member, Some(0.864));
        assert_eq!(loads.k_bolt, Some(1.79));
        assert_eq!(loads.k_member, Some(11.33));
        assert_relative_eq!(loads.per_bolt_load_lb.unwrap(), 5000.0);
        assert_relative_eq!(loads.bolt_load_lb.unwrap(), 680.0, epsilon = 1e-9);

        let p_m = 680.0 * 11.33 / 1.79;
        assert_relative_eq!(loads.member_load_lb.unwrap(), p_m, epsilon = 1e-9);
        assert_relative_eq!(loads.bolt_force_lb.unwrap(), 1180.0, epsilon = 1e-9);
        assert_relative_eq!(loads.member_force_lb.unwrap(), p_m - 500.0, epsilon = 1e-9);
        assert!(joint.check_unresolved().is_empty());
    }

    #[test]
    fn test_empty_set_is_idempotent() {
        let mut joint = BoltedJoint::new(reference_params()).unwrap();
        let before = joint.clone();
        joint.set(JointParameters::default()).unwrap();
        assert_eq!(joint, before);
    }

    #[test]
    fn test_set_overwrites_only_supplied_fields() {
        let mut joint = BoltedJoint::new(reference_params()).unwrap();
        joint
            .set(JointParameters {
                grip_length_in: Some(4.5),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(joint.inputs().preload_lb, Some(500.0));
        assert_eq!(joint.loads().c_bolt, Some(0.114));
        assert_relative_eq!(joint.loads().bolt_load_lb.unwrap(), 570.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bolt_count_defaults_to_one() {
        let joint = BoltedJoint::new(JointParameters {
            total_load_lb: Some(1000.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(joint.loads().per_bolt_load_lb, Some(1000.0));
        assert!(joint.loads().bolt_load_lb.is_none());
    }

    #[test]
    fn test_unresolved_scan_order() {
        let joint = BoltedJoint::new(JointParameters {
            preload_lb: Some(500.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            joint.check_unresolved().unresolved_fields(),
            vec![
                "total_load_lb",
                "per_bolt_load_lb",
                "bolt_load_lb",
                "member_load_lb",
                "bolt_force_lb",
                "member_force_lb",
                "c_bolt",
                "c_member",
                "bolt_count",
                "grip_length_in",
                "k_bolt",
                "k_member",
            ]
        );
    }

    #[test]
    fn test_unresolved_scan_is_fresh_each_call() {
        let mut joint = BoltedJoint::new(JointParameters::default()).unwrap();
        assert_eq!(joint.check_unresolved().len(), 13);

        joint.set(reference_params()).unwrap();
        assert!(joint.check_unresolved().is_empty());
    }

    #[test]
    fn test_short_grip_is_rejected_and_joint_unchanged() {
        let mut joint = BoltedJoint::new(reference_params()).unwrap();
        let before = joint.clone();

        let err = joint
            .set(JointParameters {
                grip_length_in: Some(1.5),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.error_code(), "UNDEFINED_BAND");
        assert_eq!(joint, before);
    }

    #[test]
    fn test_zero_bolt_count_is_invalid() {
        let err = BoltedJoint::new(JointParameters {
            bolt_count: Some(0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_lenient_json_reports_unknown_keys() {
        let value = json!({
            "preload_lb": 500.0,
            "bolt_count": 2,
            "grip": 3.5,
            "total_load_lb": null
        });
        let (params, diagnostics) = JointParameters::from_json_lenient(&value).unwrap();

        assert_eq!(params.preload_lb, Some(500.0));
        assert_eq!(params.bolt_count, Some(2));
        assert!(params.grip_length_in.is_none());
        assert!(params.total_load_lb.is_none());

        assert_eq!(diagnostics.len(), 1);
        match diagnostics.iter().next() {
            Some(Diagnostic::UnrecognizedField { field, allowed }) => {
                assert_eq!(field, "grip");
                assert!(allowed.contains(&"grip_length_in".to_string()));
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }

    #[test]
    fn test_lenient_json_rejects_wrong_types() {
        assert!(JointParameters::from_json_lenient(&json!({"preload_lb": "lots"})).is_err());
        assert!(JointParameters::from_json_lenient(&json!({"bolt_count": -2})).is_err());
        assert!(JointParameters::from_json_lenient(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_input_json_is_flat() {
        let input: BoltedJointInput = serde_json::from_value(json!({
            "label": "Cylinder head",
            "preload_lb": 500.0,
            "grip_length_in": 3.5
        }))
        .unwrap();
        assert_eq!(input.parameters.grip_length_in, Some(3.5));

        let result = calculate(&input).unwrap();
        assert!(result.ignored.is_empty());
        assert!(result
            .unresolved
            .unresolved_fields()
            .contains(&"total_load_lb"));
    }

    #[test]
    fn test_input_reports_misspelled_key() {
        let input: BoltedJointInput = serde_json::from_value(json!({
            "label": "Cylinder head",
            "preload_lb": 500.0,
            "bolt_count": 2,
            "grip": 3.5
        }))
        .unwrap();
        assert_eq!(input.parameters.bolt_count, Some(2));
        assert!(input.parameters.grip_length_in.is_none());
        assert_eq!(input.unrecognized.len(), 1);

        let result = calculate(&input).unwrap();
        assert_eq!(result.ignored.len(), 1);
        match result.ignored.iter().next() {
            Some(Diagnostic::UnrecognizedField { field, allowed }) => {
                assert_eq!(field, "grip");
                assert!(allowed.contains(&"grip_length_in".to_string()));
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
        assert!(result.unresolved.unresolved_fields().contains(&"grip_length_in"));
        assert_eq!(result.diagnostics().len(), result.unresolved.len() + 1);

        // The unknown key survives a save
        let saved = serde_json::to_value(&input).unwrap();
        assert_eq!(saved["grip"], json!(3.5));
    }

    #[test]
    fn test_input_rejects_wrong_parameter_type() {
        let parsed: Result<BoltedJointInput, _> = serde_json::from_value(json!({
            "label": "Cylinder head",
            "preload_lb": "lots"
        }));
        assert!(parsed.is_err());
    }
}
