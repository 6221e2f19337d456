//! # Unit Types
//!
//! Type-safe wrappers for the US customary units the joint formulas use.
//! They are plain f64 newtypes: JSON stays clean (just numbers) and the
//! calculation code keeps working in inches, pounds and psi.
//!
//! ## Units used by the models
//!
//! - Length: inches (in)
//! - Force: pounds (lb), kips (k = 1000 lb)
//! - Stress: pounds per square inch (psi), kips per square inch (ksi)
//! - Torque: inch-pounds (in-lb), foot-pounds (ft-lb)
//! - Stiffness: pounds per inch (lb/in), millions of pounds per inch (Mlb/in)
//!
//! ## Example
//!
//! ```rust
//! use joint_core::units::{InLb, FtLb, Psi, Ksi};
//!
//! let torque: FtLb = InLb(1200.0).into();
//! assert_eq!(torque.0, 100.0);
//!
//! let proof: Ksi = Psi(120_000.0).into();
//! assert_eq!(proof.0, 120.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Force Units
// ============================================================================

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

impl From<Pounds> for Kips {
    fn from(lb: Pounds) -> Self {
        Kips(lb.0 / 1000.0)
    }
}

impl From<Kips> for Pounds {
    fn from(k: Kips) -> Self {
        Pounds(k.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Psi> for Ksi {
    fn from(psi: Psi) -> Self {
        Ksi(psi.0 / 1000.0)
    }
}

impl From<Ksi> for Psi {
    fn from(ksi: Ksi) -> Self {
        Psi(ksi.0 * 1000.0)
    }
}

// ============================================================================
// Torque Units
// ============================================================================

/// Torque in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

/// Torque in foot-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLb(pub f64);

impl From<InLb> for FtLb {
    fn from(inlb: InLb) -> Self {
        FtLb(inlb.0 / 12.0)
    }
}

impl From<FtLb> for InLb {
    fn from(ftlb: FtLb) -> Self {
        InLb(ftlb.0 * 12.0)
    }
}

// ============================================================================
// Stiffness Units
// ============================================================================

/// Stiffness in millions of pounds per inch (the unit of Tables 8-8 and 8-12)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MlbPerIn(pub f64);

// ============================================================================
// Display Implementations
// ============================================================================

impl std::fmt::Display for Pounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} lb", self.0)
    }
}

impl std::fmt::Display for Kips {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} k", self.0)
    }
}

impl std::fmt::Display for Psi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} psi", self.0)
    }
}

impl std::fmt::Display for Ksi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} ksi", self.0)
    }
}

impl std::fmt::Display for InLb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} in-lb", self.0)
    }
}

impl std::fmt::Display for FtLb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} ft-lb", self.0)
    }
}

impl std::fmt::Display for MlbPerIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} Mlb/in", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_conversion() {
        let lb = Pounds(5000.0);
        let k: Kips = lb.into();
        assert_eq!(k.0, 5.0);
    }

    #[test]
    fn test_stress_conversion() {
        let ksi: Ksi = Psi(74_000.0).into();
        assert_eq!(ksi.0, 74.0);
        let psi: Psi = Ksi(36.0).into();
        assert_eq!(psi.0, 36_000.0);
    }

    #[test]
    fn test_torque_conversion() {
        let ftlb: FtLb = InLb(100.0).into();
        assert!((ftlb.0 - 8.3333).abs() < 1e-3);
        let inlb: InLb = FtLb(25.0).into();
        assert_eq!(inlb.0, 300.0);
    }

    #[test]
    fn test_serialization_transparent() {
        let stress = Psi(1500.0);
        let json = serde_json::to_string(&stress).unwrap();
        assert_eq!(json, "1500.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Ksi(120.0)), "120.0 ksi");
        assert_eq!(format!("{}", FtLb(8.5)), "8.5 ft-lb");
    }
}
