//! # Joint Mechanics Equations
//!
//! Closed-form formulas used by the calculation models. Keeping them in one
//! place makes each one easy to check against its reference equation.
//!
//! ## Modules
//!
//! - [`fastener`] - Bolt area, torque-preload and proof load relations
//! - [`stiffness`] - Member stiffness estimate and series combination
//! - [`weld`] - Throat scaling and primary/secondary weld shear
//!
//! ## Sign Conventions
//!
//! - **Forces**: tension positive for bolts; weld forces use the caller's convention
//! - **Lever arms**: always taken as magnitudes
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, Ch. 8 (Screws, Fasteners, Nonpermanent Joints)
//! - Shigley's Mechanical Engineering Design, Ch. 9 (Welding, Bonding, Permanent Joints)

pub mod fastener;
pub mod stiffness;
pub mod weld;

pub use fastener::{
    major_diameter_area, proof_load, tensile_stress, wrench_torque, DEFAULT_NUT_FACTOR,
    PERMANENT_PRELOAD_FRACTION, REUSED_PRELOAD_FRACTION,
};
pub use stiffness::{combined_stiffness, joint_constant, member_stiffness_estimate};
pub use weld::{moment_sum, primary_shear, scaled_moment, secondary_shear, THROAT_FACTOR};
