//! # joint_core - Bolted and Welded Joint Calculation Engine
//!
//! `joint_core` computes the mechanics of threaded fasteners, preloaded
//! bolted joints and fillet weld groups from the reference tables of
//! Shigley's Mechanical Engineering Design (chapters 8 and 9). Inputs and
//! outputs are JSON-serializable so the engine can sit behind a CLI or any
//! other front end.
//!
//! ## Design Philosophy
//!
//! - **Tables are data**: lookups are exact and never interpolate
//! - **Nothing is a sentinel**: unknown values are `None`
//! - **Errors abort, diagnostics inform**: domain-data misses are
//!   [`CalcError`]s, usability notices are returned [`Diagnostics`]
//!
//! ## Quick Start
//!
//! ```rust
//! use joint_core::calculations::bolt::Bolt;
//! use joint_core::calculations::bolted_joint::{BoltedJoint, JointParameters};
//!
//! let mut bolt = Bolt::new(0.5, Some(13)).unwrap();
//! let torque = bolt.compute_torque(1000.0).unwrap();
//! assert!((torque - 100.0).abs() < 1e-9);
//!
//! let joint = BoltedJoint::new(JointParameters {
//!     grip_length_in: Some(3.5),
//!     ..Default::default()
//! })
//! .unwrap();
//! assert_eq!(joint.loads().c_bolt, Some(0.136));
//! ```
//!
//! ## Modules
//!
//! - [`tables`] - Reference tables 8-2, 8-8, 8-9, 8-12, 9-1 and 9-2
//! - [`equations`] - Closed-form fastener, stiffness and weld formulas
//! - [`calculations`] - Bolt, bolted joint, member stiffness and weld models
//! - [`diagnostics`] - Non-fatal reports returned by operations
//! - [`project`] - Project container, metadata, and settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves

pub mod calculations;
pub mod diagnostics;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use diagnostics::{Diagnostic, Diagnostics};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{GlobalSettings, Project, ProjectMetadata};
