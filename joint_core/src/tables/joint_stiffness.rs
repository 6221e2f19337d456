//! Joint Stiffness Bands (Shigley Table 8-12)
//!
//! Bolt and member stiffness, and the fraction of the external load each
//! carries, for a steel joint banded by bolt grip length.
//!
//! | Grip (in) | k_b (Mlb/in) | k_m (Mlb/in) | C_b   | C_m   |
//! |-----------|--------------|--------------|-------|-------|
//! | ≥ 4       | 1.37         | 10.63        | 0.114 | 0.886 |
//! | ≥ 3       | 1.79         | 11.33        | 0.136 | 0.864 |
//! | ≥ 2       | 2.57         | 12.69        | 0.168 | 0.832 |
//!
//! Grips shorter than 2 in are not tabulated and are rejected.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub const TABLE_NAME: &str = "Table 8-12";

/// One row of the stiffness table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffnessBand {
    /// Lowest grip length (inclusive) covered by this row, in
    pub min_grip_in: f64,
    /// Bolt stiffness k_b (Mlb/in)
    pub k_bolt: f64,
    /// Member stiffness k_m (Mlb/in)
    pub k_member: f64,
    /// Fraction of the external load carried by the bolt
    pub c_bolt: f64,
    /// Fraction of the external load carried by the members
    pub c_member: f64,
}

/// Rows ordered from the longest grip down
const BANDS: [StiffnessBand; 3] = [
    StiffnessBand {
        min_grip_in: 4.0,
        k_bolt: 1.37,
        k_member: 10.63,
        c_bolt: 0.114,
        c_member: 0.886,
    },
    StiffnessBand {
        min_grip_in: 3.0,
        k_bolt: 1.79,
        k_member: 11.33,
        c_bolt: 0.136,
        c_member: 0.864,
    },
    StiffnessBand {
        min_grip_in: 2.0,
        k_bolt: 2.57,
        k_member: 12.69,
        c_bolt: 0.168,
        c_member: 0.832,
    },
];

/// Find the stiffness band for a grip length.
///
/// # Example
///
/// ```rust
/// use joint_core::tables::stiffness_band;
///
/// let band = stiffness_band(3.5).unwrap();
/// assert_eq!(band.c_bolt, 0.136);
/// assert!(stiffness_band(1.5).is_err());
/// ```
pub fn stiffness_band(grip_length_in: f64) -> CalcResult<StiffnessBand> {
    if !grip_length_in.is_finite() {
        return Err(CalcError::undefined_band(TABLE_NAME, "grip_length_in", grip_length_in));
    }

    let band = BANDS
        .iter()
        .find(|band| grip_length_in >= band.min_grip_in)
        .copied()
        .ok_or_else(|| CalcError::undefined_band(TABLE_NAME, "grip_length_in", grip_length_in))?;

    log::debug!(
        "{}: grip {} in -> band >= {} in (k_b={}, k_m={})",
        TABLE_NAME,
        grip_length_in,
        band.min_grip_in,
        band.k_bolt,
        band.k_member
    );
    Ok(band)
}

/// Shortest grip length the table covers, in
pub fn min_grip_length() -> f64 {
    BANDS[BANDS.len() - 1].min_grip_in
}
