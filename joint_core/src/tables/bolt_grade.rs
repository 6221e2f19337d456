//! SAE Bolt Grades (Shigley Table 8-9)
//!
//! Minimum proof, tensile and yield strengths for SAE J429 inch-series bolts.
//! Strengths are in psi.
//!
//! Grade 2 is the only grade whose ratings depend on diameter. Bolts up to and
//! including 3/4 in use the small-diameter row; anything larger uses the
//! large-diameter row.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Ksi, Psi};

pub const TABLE_NAME: &str = "Table 8-9";

/// Upper bound (inclusive) of the grade 2 small-diameter row
pub const GRADE_2_SMALL_DIAMETER_MAX_IN: f64 = 0.75;

/// SAE bolt grade
///
/// Serializes as the bare grade number (`1`, `2`, `4`, `7`, `8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoltGrade {
    /// SAE grade 1, low or medium carbon
    Sae1,
    /// SAE grade 2, low or medium carbon
    Sae2,
    /// SAE grade 4, medium carbon, cold drawn
    Sae4,
    /// SAE grade 7, alloy, quenched and tempered, roll threaded
    Sae7,
    /// SAE grade 8, alloy, quenched and tempered
    #[default]
    Sae8,
}

impl BoltGrade {
    /// All grades for selection lists
    pub const ALL: [BoltGrade; 5] = [
        BoltGrade::Sae1,
        BoltGrade::Sae2,
        BoltGrade::Sae4,
        BoltGrade::Sae7,
        BoltGrade::Sae8,
    ];

    /// Grade number as printed on the bolt head marking chart
    pub fn number(&self) -> u8 {
        match self {
            BoltGrade::Sae1 => 1,
            BoltGrade::Sae2 => 2,
            BoltGrade::Sae4 => 4,
            BoltGrade::Sae7 => 7,
            BoltGrade::Sae8 => 8,
        }
    }

    pub fn display_name(&self) -> String {
        format!("SAE Grade {}", self.number())
    }
}

impl TryFrom<u8> for BoltGrade {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        match value {
            1 => Ok(BoltGrade::Sae1),
            2 => Ok(BoltGrade::Sae2),
            4 => Ok(BoltGrade::Sae4),
            7 => Ok(BoltGrade::Sae7),
            8 => Ok(BoltGrade::Sae8),
            other => Err(CalcError::lookup_miss(TABLE_NAME, format!("grade {}", other))),
        }
    }
}

impl From<BoltGrade> for u8 {
    fn from(grade: BoltGrade) -> Self {
        grade.number()
    }
}

impl std::fmt::Display for BoltGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Minimum strengths for one grade (psi)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthRatings {
    /// Minimum proof strength S_p
    pub proof_psi: f64,
    /// Minimum tensile strength S_ut
    pub tensile_psi: f64,
    /// Minimum yield strength S_y
    pub yield_psi: f64,
}

impl StrengthRatings {
    const fn new(proof_psi: f64, tensile_psi: f64, yield_psi: f64) -> Self {
        StrengthRatings {
            proof_psi,
            tensile_psi,
            yield_psi,
        }
    }

    pub fn proof(&self) -> Ksi {
        Psi(self.proof_psi).into()
    }

    pub fn tensile(&self) -> Ksi {
        Psi(self.tensile_psi).into()
    }

    pub fn yield_strength(&self) -> Ksi {
        Psi(self.yield_psi).into()
    }
}

const GRADE_1: StrengthRatings = StrengthRatings::new(33_000.0, 60_000.0, 36_000.0);
const GRADE_2_SMALL: StrengthRatings = StrengthRatings::new(55_000.0, 74_000.0, 57_000.0);
const GRADE_2_LARGE: StrengthRatings = StrengthRatings::new(33_000.0, 60_000.0, 36_000.0);
const GRADE_4: StrengthRatings = StrengthRatings::new(65_000.0, 115_000.0, 100_000.0);
const GRADE_7: StrengthRatings = StrengthRatings::new(105_000.0, 133_000.0, 115_000.0);
const GRADE_8: StrengthRatings = StrengthRatings::new(120_000.0, 150_000.0, 130_000.0);

/// Look up minimum strengths for a grade and nominal diameter.
///
/// The diameter only matters for grade 2, but it is validated for every
/// grade so a bad bolt definition fails here rather than later.
///
/// # Example
///
/// ```rust
/// use joint_core::tables::{strength_ratings, BoltGrade};
///
/// let r = strength_ratings(BoltGrade::Sae2, 0.5).unwrap();
/// assert_eq!(r.proof_psi, 55_000.0);
/// ```
pub fn strength_ratings(grade: BoltGrade, diameter_in: f64) -> CalcResult<StrengthRatings> {
    if !diameter_in.is_finite() || diameter_in <= 0.0 {
        return Err(CalcError::lookup_miss(
            TABLE_NAME,
            format!("{} at diameter {}", grade, diameter_in),
        ));
    }

    let ratings = match grade {
        BoltGrade::Sae1 => GRADE_1,
        BoltGrade::Sae2 if diameter_in <= GRADE_2_SMALL_DIAMETER_MAX_IN => GRADE_2_SMALL,
        BoltGrade::Sae2 => GRADE_2_LARGE,
        BoltGrade::Sae4 => GRADE_4,
        BoltGrade::Sae7 => GRADE_7,
        BoltGrade::Sae8 => GRADE_8,
    };
    Ok(ratings)
}
