//! # Weld Stress Formulas
//!
//! Shear in fillet weld groups treated as lines (Shigley 9-3, 9-4).
//!
//! ## Notation
//!
//! - `V` = shear force through the group centroid
//! - `A` = total throat area
//! - `M` = moment about the centroid
//! - `J`, `I` = polar / bending second moment of the throat
//! - `τ'` = primary shear, `τ''` = secondary shear

/// Effective throat factor of a 45° fillet (cos 45°)
pub const THROAT_FACTOR: f64 = 0.707;

/// Scale a unit second moment (per unit throat) to the actual throat.
///
/// # Formula
/// J = 0.707·h·J_u, I = 0.707·h·I_u
#[inline]
pub fn scaled_moment(leg_size: f64, unit_moment: f64) -> f64 {
    THROAT_FACTOR * leg_size * unit_moment
}

/// Primary (direct) shear
///
/// # Formula
/// τ' = V / A
#[inline]
pub fn primary_shear(force: f64, throat_area: f64) -> f64 {
    force / throat_area
}

/// Moment about the centroid from (force, distance) couples.
///
/// Distances are lever arms and are taken as magnitudes; the sign of each
/// force is the caller's convention.
///
/// # Formula
/// M = Σ Fᵢ·|rᵢ|
pub fn moment_sum<I>(couples: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    couples.into_iter().map(|(force, distance)| force * distance.abs()).sum()
}

/// Secondary shear per unit distance from the centroid (lb/in³)
///
/// # Formula
/// τ'' = M / J (torsion) or τ'' = M / I (bending)
#[inline]
pub fn secondary_shear(moment: f64, second_moment: f64) -> f64 {
    moment / second_moment
}
