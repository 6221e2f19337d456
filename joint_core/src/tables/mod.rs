//! # Reference Tables
//!
//! Static lookup data from Shigley's Mechanical Engineering Design,
//! chapters 8 (fasteners) and 9 (welds). Every numeric literal in these
//! tables is a reference value and is reproduced exactly.
//!
//! Lookups never mutate anything and never guess: a key that is not
//! tabulated is a [`CalcError::LookupMiss`](crate::errors::CalcError) and a
//! value outside every band is a
//! [`CalcError::UndefinedBand`](crate::errors::CalcError).
//!
//! ## Tables
//!
//! - [`tensile_area`] - Table 8-2, tensile stress area by diameter and TPI
//! - [`bolt_grade`] - Table 8-9, SAE grade strengths
//! - [`joint_stiffness`] - Table 8-12, stiffness bands by grip length
//! - [`member_material`] - Table 8-8, member stiffness fit constants
//! - [`weld_groups`] - Tables 9-1 and 9-2, weld group formulas

pub mod bolt_grade;
pub mod joint_stiffness;
pub mod member_material;
pub mod tensile_area;
pub mod weld_groups;

pub use bolt_grade::{strength_ratings, BoltGrade, StrengthRatings};
pub use joint_stiffness::{stiffness_band, StiffnessBand};
pub use member_material::{member_material, MaterialConstants, MemberMaterial};
pub use tensile_area::tensile_area;
pub use weld_groups::{
    weld_group_formula, BendingGroup, GroupFormula, GroupProperties, LoadingCategory,
    TorsionGroup, WeldGeometry, WeldGroupKind, WeldGroupShape,
};
