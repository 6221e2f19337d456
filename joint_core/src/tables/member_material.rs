//! Member Stiffness Constants (Shigley Table 8-8)
//!
//! Constants for the exponential member-stiffness fit
//! `k_m = E·d·A^(B·d/l)` from finite element studies of clamped members.
//! Elastic moduli are in Mpsi, so the fit returns Mlb/in.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub const TABLE_NAME: &str = "Table 8-8";

/// Joint member material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberMaterial {
    #[default]
    Steel,
    Aluminum,
    Copper,
    GrayCastIron,
    /// Fit constants averaged over all materials; E must be supplied separately
    GeneralExpression,
}

impl MemberMaterial {
    /// All materials for selection lists
    pub const ALL: [MemberMaterial; 5] = [
        MemberMaterial::Steel,
        MemberMaterial::Aluminum,
        MemberMaterial::Copper,
        MemberMaterial::GrayCastIron,
        MemberMaterial::GeneralExpression,
    ];

    /// Parse a loosely typed material name.
    ///
    /// Accepts the same prefixes a console menu would: anything starting with
    /// "s" is steel, "a" aluminum, "c" copper, "gray" gray cast iron and "gen"
    /// the general expression.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let lowered = s.trim().to_lowercase();
        if lowered.starts_with("gray") || lowered.starts_with("grey") {
            Ok(MemberMaterial::GrayCastIron)
        } else if lowered.starts_with("gen") {
            Ok(MemberMaterial::GeneralExpression)
        } else if lowered.starts_with('s') {
            Ok(MemberMaterial::Steel)
        } else if lowered.starts_with('a') {
            Ok(MemberMaterial::Aluminum)
        } else if lowered.starts_with('c') {
            Ok(MemberMaterial::Copper)
        } else {
            Err(CalcError::lookup_miss(TABLE_NAME, format!("material '{}'", s)))
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MemberMaterial::Steel => "Steel",
            MemberMaterial::Aluminum => "Aluminum",
            MemberMaterial::Copper => "Copper",
            MemberMaterial::GrayCastIron => "Gray cast iron",
            MemberMaterial::GeneralExpression => "General expression",
        }
    }

    /// Fit constants for this material
    pub fn constants(&self) -> MaterialConstants {
        match self {
            MemberMaterial::Steel => MaterialConstants {
                elastic_modulus_mpsi: 30.0,
                a: 0.78715,
                b: 0.62873,
                poisson_ratio: 0.291,
            },
            MemberMaterial::Aluminum => MaterialConstants {
                elastic_modulus_mpsi: 10.3,
                a: 0.79670,
                b: 0.63816,
                poisson_ratio: 0.334,
            },
            MemberMaterial::Copper => MaterialConstants {
                elastic_modulus_mpsi: 17.3,
                a: 0.79568,
                b: 0.63553,
                poisson_ratio: 0.326,
            },
            MemberMaterial::GrayCastIron => MaterialConstants {
                elastic_modulus_mpsi: 14.5,
                a: 0.77871,
                b: 0.61616,
                poisson_ratio: 0.211,
            },
            MemberMaterial::GeneralExpression => MaterialConstants {
                elastic_modulus_mpsi: 1.0,
                a: 0.78952,
                b: 0.62914,
                poisson_ratio: 1.0,
            },
        }
    }
}

impl std::fmt::Display for MemberMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of Table 8-8
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialConstants {
    /// Elastic modulus E (Mpsi)
    pub elastic_modulus_mpsi: f64,
    /// Fit constant A
    pub a: f64,
    /// Fit constant B
    pub b: f64,
    /// Poisson ratio
    pub poisson_ratio: f64,
}

/// Table 8-8 lookup by material
pub fn member_material(material: MemberMaterial) -> MaterialConstants {
    material.constants()
}
