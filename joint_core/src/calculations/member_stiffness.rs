//! # Member Stiffness Calculation
//!
//! Estimates the stiffness of the clamped members from the Table 8-8
//! exponential fit and, if a bolt stiffness is given, the joint constant.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::calculations::member_stiffness::{calculate, MemberStiffnessInput};
//! use joint_core::tables::MemberMaterial;
//!
//! let input = MemberStiffnessInput {
//!     label: "Flange".to_string(),
//!     material: MemberMaterial::Steel,
//!     bolt_diameter_in: 0.5,
//!     member_1_thickness_in: 0.75,
//!     member_2_thickness_in: 0.75,
//!     k_bolt_mlb_per_in: None,
//! };
//! let result = calculate(&input).unwrap();
//! assert!(result.k_member_mlb_per_in > 14.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{joint_constant, member_stiffness_estimate};
use crate::errors::CalcResult;
use crate::tables::MemberMaterial;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberStiffnessInput {
    pub label: String,

    /// Material of the clamped members
    #[serde(default)]
    pub material: MemberMaterial,

    /// Bolt nominal diameter (in)
    pub bolt_diameter_in: f64,

    /// Thickness of the member under the bolt head (in)
    pub member_1_thickness_in: f64,

    /// Thickness of the second member (in); 0 for a single member
    #[serde(default)]
    pub member_2_thickness_in: f64,

    /// Bolt stiffness k_b (Mlb/in), for the joint constant
    #[serde(default)]
    pub k_bolt_mlb_per_in: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStiffnessResult {
    /// Member stiffness k_m (Mlb/in)
    pub k_member_mlb_per_in: f64,

    /// Grip length t₁ + t₂ (in)
    pub grip_length_in: f64,

    /// C = k_b / (k_b + k_m), when k_b was given
    pub joint_constant: Option<f64>,
}

pub fn calculate(input: &MemberStiffnessInput) -> CalcResult<MemberStiffnessResult> {
    let k_member = member_stiffness_estimate(
        input.material,
        input.bolt_diameter_in,
        input.member_1_thickness_in,
        input.member_2_thickness_in,
    )?;

    let joint_constant = input
        .k_bolt_mlb_per_in
        .map(|k_bolt| joint_constant(k_bolt, k_member))
        .transpose()?;

    Ok(MemberStiffnessResult {
        k_member_mlb_per_in: k_member,
        grip_length_in: input.member_1_thickness_in + input.member_2_thickness_in,
        joint_constant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_joint_constant_from_bolt_stiffness() {
        let input = MemberStiffnessInput {
            label: "Cover".to_string(),
            material: MemberMaterial::Aluminum,
            bolt_diameter_in: 0.5,
            member_1_thickness_in: 1.0,
            member_2_thickness_in: 0.0,
            k_bolt_mlb_per_in: Some(2.0),
        };
        let result = calculate(&input).unwrap();

        let k_m = 10.3 * 0.5 * 0.79670_f64.powf(0.63816 * 0.5 / 1.0);
        assert_relative_eq!(result.k_member_mlb_per_in, k_m, epsilon = 1e-12);
        assert_relative_eq!(result.joint_constant.unwrap(), 2.0 / (2.0 + k_m), epsilon = 1e-12);
        assert_eq!(result.grip_length_in, 1.0);
    }

    #[test]
    fn test_bad_bolt_stiffness() {
        let input = MemberStiffnessInput {
            label: "Cover".to_string(),
            material: MemberMaterial::Steel,
            bolt_diameter_in: 0.5,
            member_1_thickness_in: 1.0,
            member_2_thickness_in: 0.5,
            k_bolt_mlb_per_in: Some(-1.0),
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_json_defaults() {
        let input: MemberStiffnessInput = serde_json::from_str(
            r#"{"label": "Plate", "bolt_diameter_in": 0.625, "member_1_thickness_in": 2.0}"#,
        )
        .unwrap();
        assert_eq!(input.material, MemberMaterial::Steel);
        assert_eq!(input.member_2_thickness_in, 0.0);
    }
}
