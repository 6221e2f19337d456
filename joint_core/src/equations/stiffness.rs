//! # Joint Stiffness Formulas
//!
//! Member stiffness estimation and series combination of stiffnesses.
//!
//! ## References
//!
//! - Shigley 8-4, Eq. (8-23): exponential fit for member stiffness
//! - Shigley 8-4, Eq. (8-18): members in series

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::tables::{member_material, MemberMaterial};

/// Estimate member stiffness from the Table 8-8 exponential fit.
///
/// `member_1_thickness` is the member under the bolt head and
/// `member_2_thickness` the member between it and the nut (0 when the joint
/// has a single member thickness). Both members are taken to be `material`;
/// members of different materials are combined with [`combined_stiffness`].
///
/// # Formula
/// k_m = E·d·A^(B·d/l), l = t₁ + t₂
///
/// # Returns
/// Member stiffness in Mlb/in
///
/// # Example
/// ```rust
/// use joint_core::equations::stiffness::member_stiffness_estimate;
/// use joint_core::tables::MemberMaterial;
///
/// let k_m = member_stiffness_estimate(MemberMaterial::Steel, 0.5, 1.5, 0.0).unwrap();
/// assert!(k_m > 14.0 && k_m < 15.0);
/// ```
pub fn member_stiffness_estimate(
    material: MemberMaterial,
    bolt_diameter: f64,
    member_1_thickness: f64,
    member_2_thickness: f64,
) -> CalcResult<f64> {
    require_positive("bolt_diameter", bolt_diameter)?;
    require_positive("member_1_thickness", member_1_thickness)?;
    if !member_2_thickness.is_finite() || member_2_thickness < 0.0 {
        return Err(CalcError::invalid_input(
            "member_2_thickness",
            member_2_thickness.to_string(),
            "Must be zero or a positive, finite number",
        ));
    }

    let constants = member_material(material);
    let grip = member_1_thickness + member_2_thickness;
    let k_m = constants.elastic_modulus_mpsi
        * bolt_diameter
        * constants.a.powf(constants.b * bolt_diameter / grip);

    log::debug!(
        "member stiffness ({}): d={} in, l={} in -> k_m={} Mlb/in",
        material,
        bolt_diameter,
        grip,
        k_m
    );
    Ok(k_m)
}

/// Effective stiffness of springs in series.
///
/// # Formula
/// 1/k = Σ 1/kᵢ
///
/// # Example
/// ```rust
/// use joint_core::equations::stiffness::combined_stiffness;
///
/// let k = combined_stiffness(&[2.0, 3.0]).unwrap();
/// assert!((k - 1.2).abs() < 1e-12);
/// ```
pub fn combined_stiffness(stiffnesses: &[f64]) -> CalcResult<f64> {
    if stiffnesses.is_empty() {
        return Err(CalcError::invalid_input(
            "stiffnesses",
            "[]",
            "At least one stiffness is required",
        ));
    }

    let compliance = stiffnesses.iter().try_fold(0.0, |sum, &k| {
        require_positive("stiffness", k)?;
        Ok::<f64, CalcError>(sum + 1.0 / k)
    })?;

    Ok(1.0 / compliance)
}

/// Joint stiffness constant: fraction of the external load taken by the bolt.
///
/// # Formula
/// C = k_b / (k_b + k_m)
pub fn joint_constant(k_bolt: f64, k_member: f64) -> CalcResult<f64> {
    require_positive("k_bolt", k_bolt)?;
    require_positive("k_member", k_member)?;
    Ok(k_bolt / (k_bolt + k_member))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_combined_stiffness() {
        assert_relative_eq!(combined_stiffness(&[2.0, 3.0]).unwrap(), 1.2, epsilon = 1e-12);
        assert_relative_eq!(combined_stiffness(&[5.0]).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(combined_stiffness(&[4.0, 4.0, 4.0, 4.0]).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_combined_stiffness_rejects_bad_input() {
        assert!(combined_stiffness(&[]).is_err());
        assert!(combined_stiffness(&[2.0, 0.0]).is_err());
        assert!(combined_stiffness(&[2.0, -3.0]).is_err());
    }

    #[test]
    fn test_member_stiffness_steel() {
        // 30 × 0.5 × 0.78715^(0.62873 × 0.5 / 1.5)
        let expected = 30.0 * 0.5 * 0.78715_f64.powf(0.62873 * 0.5 / 1.5);
        let k_m = member_stiffness_estimate(MemberMaterial::Steel, 0.5, 1.0, 0.5).unwrap();
        assert_relative_eq!(k_m, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_member_stiffness_single_member() {
        let one = member_stiffness_estimate(MemberMaterial::Aluminum, 0.5, 2.0, 0.0).unwrap();
        let split = member_stiffness_estimate(MemberMaterial::Aluminum, 0.5, 1.0, 1.0).unwrap();
        assert_relative_eq!(one, split, epsilon = 1e-12);
    }

    #[test]
    fn test_member_stiffness_material_ordering() {
        let steel = member_stiffness_estimate(MemberMaterial::Steel, 0.5, 1.5, 0.0).unwrap();
        let aluminum = member_stiffness_estimate(MemberMaterial::Aluminum, 0.5, 1.5, 0.0).unwrap();
        assert!(steel > aluminum);
    }

    #[test]
    fn test_member_stiffness_invalid() {
        assert!(member_stiffness_estimate(MemberMaterial::Steel, 0.0, 1.0, 0.0).is_err());
        assert!(member_stiffness_estimate(MemberMaterial::Steel, 0.5, 0.0, 1.0).is_err());
        assert!(member_stiffness_estimate(MemberMaterial::Steel, 0.5, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_joint_constant() {
        let c = joint_constant(1.79, 11.33).unwrap();
        assert_relative_eq!(c, 1.79 / 13.12, epsilon = 1e-12);
        assert!(joint_constant(0.0, 11.33).is_err());
    }
}
