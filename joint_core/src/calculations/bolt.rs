//! # Bolt Calculation
//!
//! Models a single threaded fastener: geometric and tensile stress areas,
//! grade strengths, and the torque needed to reach a preload (Shigley 8-2,
//! 8-8, Tables 8-2 and 8-9).
//!
//! ## Lifecycle
//!
//! - [`Bolt::new`] / [`Bolt::with_grade`] perform both table lookups and fail
//!   if either misses.
//! - [`Bolt::change_diameter`] re-runs the tensile-area lookup only; the grade
//!   strengths stay as they were.
//! - [`Bolt::compute_torque`] is the only operation that sets torque,
//!   preload and tensile stress.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::calculations::bolt::Bolt;
//!
//! let mut bolt = Bolt::new(0.5, Some(13)).unwrap();
//! bolt.compute_torque(1000.0).unwrap();
//!
//! assert!((bolt.torque_inlb().unwrap() - 100.0).abs() < 1e-9);
//! assert_eq!(bolt.tensile_stress_area_in2(), 0.1419);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::equations::fastener::{
    major_diameter_area, proof_load, tensile_stress, wrench_torque, DEFAULT_NUT_FACTOR,
    PERMANENT_PRELOAD_FRACTION, REUSED_PRELOAD_FRACTION,
};
use crate::project::GlobalSettings;
use crate::tables::{strength_ratings, tensile_area, BoltGrade, StrengthRatings};
use crate::units::{FtLb, InLb};

/// How the joint will be treated after assembly; selects the preload target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connection {
    /// Connection may be taken apart: F_i = 0.75·F_p
    #[default]
    Reused,
    /// Permanent connection: F_i = 0.90·F_p
    Permanent,
}

impl Connection {
    pub fn preload_fraction(&self) -> f64 {
        match self {
            Connection::Reused => REUSED_PRELOAD_FRACTION,
            Connection::Permanent => PERMANENT_PRELOAD_FRACTION,
        }
    }
}

/// One fastener with its table-derived properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    diameter_in: f64,
    tpi: Option<u32>,
    grade: BoltGrade,
    area_in2: f64,
    tensile_stress_area_in2: f64,
    strength: StrengthRatings,
    torque_inlb: Option<f64>,
    desired_preload_lb: Option<f64>,
    tensile_stress_psi: Option<f64>,
}

impl Bolt {
    /// Create a grade 8 bolt.
    pub fn new(diameter_in: f64, tpi: Option<u32>) -> CalcResult<Self> {
        Self::with_grade(diameter_in, tpi, BoltGrade::default())
    }

    /// Create a bolt of a given grade.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - diameter is not a positive number
    /// * `LookupMiss` - (diameter, tpi) is not in Table 8-2
    pub fn with_grade(diameter_in: f64, tpi: Option<u32>, grade: BoltGrade) -> CalcResult<Self> {
        require_positive("diameter_in", diameter_in)?;

        let strength = strength_ratings(grade, diameter_in)?;
        let tensile_stress_area_in2 = tensile_area(diameter_in, tpi)?;

        Ok(Bolt {
            diameter_in,
            tpi,
            grade,
            area_in2: major_diameter_area(diameter_in),
            tensile_stress_area_in2,
            strength,
            torque_inlb: None,
            desired_preload_lb: None,
            tensile_stress_psi: None,
        })
    }

    /// Switch to another diameter and thread count.
    ///
    /// Re-runs the Table 8-2 lookup and the major-diameter area. Strength
    /// ratings are left alone; rebuild the bolt if the grade band should
    /// follow the new diameter. On error the bolt is unchanged.
    pub fn change_diameter(&mut self, diameter_in: f64, tpi: Option<u32>) -> CalcResult<()> {
        require_positive("diameter_in", diameter_in)?;
        let tensile_stress_area_in2 = tensile_area(diameter_in, tpi)?;

        self.diameter_in = diameter_in;
        self.tpi = tpi;
        self.area_in2 = major_diameter_area(diameter_in);
        self.tensile_stress_area_in2 = tensile_stress_area_in2;
        Ok(())
    }

    /// Torque for a desired preload with the default nut factor (K = 0.2).
    ///
    /// Stores the preload, the torque `T = 0.2·F_i·d` and the tensile stress
    /// `F_i / A_d`, and returns the torque in in-lb.
    pub fn compute_torque(&mut self, desired_preload_lb: f64) -> CalcResult<f64> {
        self.compute_torque_with_nut_factor(desired_preload_lb, DEFAULT_NUT_FACTOR)
    }

    /// Torque for a desired preload with an explicit nut factor.
    pub fn compute_torque_with_nut_factor(
        &mut self,
        desired_preload_lb: f64,
        nut_factor: f64,
    ) -> CalcResult<f64> {
        require_positive("nut_factor", nut_factor)?;
        if !desired_preload_lb.is_finite() {
            return Err(CalcError::invalid_input(
                "desired_preload_lb",
                desired_preload_lb.to_string(),
                "Preload must be a finite number",
            ));
        }

        let torque = wrench_torque(nut_factor, desired_preload_lb, self.diameter_in);
        self.torque_inlb = Some(torque);
        self.desired_preload_lb = Some(desired_preload_lb);
        self.tensile_stress_psi = Some(tensile_stress(desired_preload_lb, self.area_in2));
        log::debug!(
            "bolt d={} in: F_i={} lb, K={} -> T={} in-lb",
            self.diameter_in,
            desired_preload_lb,
            nut_factor,
            torque
        );
        Ok(torque)
    }

    /// Proof load F_p = A_t·S_p (lb)
    pub fn proof_load(&self) -> f64 {
        proof_load(self.tensile_stress_area_in2, self.strength.proof_psi)
    }

    /// Recommended preload for a connection type (lb)
    pub fn recommended_preload(&self, connection: Connection) -> f64 {
        connection.preload_fraction() * self.proof_load()
    }

    pub fn diameter_in(&self) -> f64 {
        self.diameter_in
    }

    pub fn tpi(&self) -> Option<u32> {
        self.tpi
    }

    pub fn grade(&self) -> BoltGrade {
        self.grade
    }

    /// Major-diameter area π·d²/4 (in²)
    pub fn area_in2(&self) -> f64 {
        self.area_in2
    }

    /// Tensile stress area from Table 8-2 (in²)
    pub fn tensile_stress_area_in2(&self) -> f64 {
        self.tensile_stress_area_in2
    }

    pub fn strength(&self) -> &StrengthRatings {
        &self.strength
    }

    pub fn torque_inlb(&self) -> Option<f64> {
        self.torque_inlb
    }

    pub fn torque_ftlb(&self) -> Option<f64> {
        self.torque_inlb.map(|t| FtLb::from(InLb(t)).0)
    }

    pub fn desired_preload_lb(&self) -> Option<f64> {
        self.desired_preload_lb
    }

    pub fn tensile_stress_psi(&self) -> Option<f64> {
        self.tensile_stress_psi
    }
}

/// Input parameters for a bolt calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Flange bolt",
///   "diameter_in": 0.5,
///   "tpi": 13,
///   "grade": 8,
///   "preload_lb": 1000.0
/// }
/// ```
///
/// When `preload_lb` is omitted the recommended preload for the project's
/// connection type is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoltInput {
    /// User label for this bolt
    pub label: String,

    /// Nominal diameter (in)
    pub diameter_in: f64,

    /// Threads per inch; omitted means unspecified
    #[serde(default)]
    pub tpi: Option<u32>,

    /// SAE grade; omitted means the project's default grade
    #[serde(default)]
    pub grade: Option<BoltGrade>,

    /// Desired preload (lb)
    #[serde(default)]
    pub preload_lb: Option<f64>,
}

/// Results from a bolt calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltResult {
    /// The fully-derived bolt
    pub bolt: Bolt,

    /// Proof load F_p (lb)
    pub proof_load_lb: f64,

    /// Preload the torque was computed for (lb)
    pub preload_lb: f64,

    /// Wrench torque (in-lb)
    pub torque_inlb: f64,

    /// Wrench torque (ft-lb)
    pub torque_ftlb: f64,

    /// Preload over the major-diameter area (psi)
    pub tensile_stress_psi: f64,
}

/// Build the bolt, then size the tightening torque.
pub fn calculate(input: &BoltInput, settings: &GlobalSettings) -> CalcResult<BoltResult> {
    let grade = input.grade.unwrap_or(settings.default_grade);
    let mut bolt = Bolt::with_grade(input.diameter_in, input.tpi, grade)?;
    let preload_lb = input
        .preload_lb
        .unwrap_or_else(|| bolt.recommended_preload(settings.connection));
    let torque_inlb = bolt.compute_torque_with_nut_factor(preload_lb, settings.nut_factor)?;

    Ok(BoltResult {
        proof_load_lb: bolt.proof_load(),
        preload_lb,
        torque_inlb,
        torque_ftlb: FtLb::from(InLb(torque_inlb)).0,
        tensile_stress_psi: tensile_stress(preload_lb, bolt.area_in2()),
        bolt,
    })
}
