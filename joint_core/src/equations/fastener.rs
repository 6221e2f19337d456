//! # Fastener Formulas
//!
//! Closed-form relations for a single threaded fastener (Shigley 8-5, 8-6, 8-8).
//!
//! ## Notation
//!
//! - `d` = nominal diameter (in)
//! - `A_d` = major-diameter area (in²)
//! - `A_t` = tensile stress area (in²)
//! - `F_i` = preload (lb)
//! - `K` = torque (nut) factor
//! - `T` = wrench torque (in-lb)
//! - `S_p` = minimum proof strength (psi)

use std::f64::consts::PI;

/// Nut factor for unlubricated, as-received steel bolts
pub const DEFAULT_NUT_FACTOR: f64 = 0.2;

/// Preload fraction of proof load for connections that will be taken apart
pub const REUSED_PRELOAD_FRACTION: f64 = 0.75;

/// Preload fraction of proof load for permanent connections
pub const PERMANENT_PRELOAD_FRACTION: f64 = 0.90;

/// Major-diameter area of a bolt shank
///
/// # Formula
/// A_d = π·d²/4
///
/// # Example
/// ```rust
/// use joint_core::equations::fastener::major_diameter_area;
///
/// let area = major_diameter_area(0.5);
/// assert!((area - 0.19635).abs() < 1e-5);
/// ```
#[inline]
pub fn major_diameter_area(diameter: f64) -> f64 {
    diameter.powi(2) * PI / 4.0
}

/// Wrench torque needed to develop a preload
///
/// # Formula
/// T = K·F_i·d
#[inline]
pub fn wrench_torque(nut_factor: f64, preload: f64, diameter: f64) -> f64 {
    nut_factor * preload * diameter
}

/// Direct tensile stress over an area
///
/// # Formula
/// σ = F / A
#[inline]
pub fn tensile_stress(force: f64, area: f64) -> f64 {
    force / area
}

/// Proof load of a fastener
///
/// # Formula
/// F_p = A_t·S_p
#[inline]
pub fn proof_load(tensile_stress_area: f64, proof_strength: f64) -> f64 {
    tensile_stress_area * proof_strength
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_major_diameter_area() {
        assert_relative_eq!(major_diameter_area(1.0), PI / 4.0);
    }

    #[test]
    fn test_wrench_torque() {
        assert_relative_eq!(wrench_torque(DEFAULT_NUT_FACTOR, 1000.0, 0.5), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_proof_load() {
        // 1/2-13 grade 8: 0.1419 in² × 120 ksi
        assert_relative_eq!(proof_load(0.1419, 120_000.0), 17_028.0, epsilon = 1e-9);
    }
}
