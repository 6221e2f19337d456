//! Tensile Stress Areas (Shigley Table 8-2)
//!
//! Tensile stress area `A_t` for Unified National coarse (UNC) and fine (UNF)
//! threads, keyed by nominal diameter and threads per inch.
//!
//! Diameters are matched after rounding to three decimals, so 5/16 in may be
//! given as `0.3125` or `0.313`. Matching is exact: a diameter or thread count
//! that is not tabulated is a [`CalcError::LookupMiss`], never an interpolation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::{CalcError, CalcResult};

pub const TABLE_NAME: &str = "Table 8-2";

/// (diameter in, [(threads per inch, A_t in²)]) with the coarse series first
static TENSILE_AREAS: [(f64, [(u32, f64); 2]); 14] = [
    (0.19, [(24, 0.0175), (32, 0.0200)]),
    (0.216, [(24, 0.0242), (28, 0.0258)]),
    (0.25, [(20, 0.0318), (28, 0.0364)]),
    (0.313, [(18, 0.0524), (24, 0.058)]),
    (0.375, [(16, 0.0775), (24, 0.0878)]),
    (0.438, [(14, 0.1063), (20, 0.1187)]),
    (0.5, [(13, 0.1419), (20, 0.1599)]),
    (0.563, [(12, 0.182), (18, 0.203)]),
    (0.625, [(11, 0.226), (18, 0.256)]),
    (0.75, [(10, 0.334), (16, 0.373)]),
    (0.875, [(9, 0.462), (14, 0.509)]),
    (1.0, [(8, 0.606), (12, 0.663)]),
    (1.25, [(7, 0.969), (12, 1.073)]),
    (1.5, [(6, 1.405), (12, 1.581)]),
];

/// Rows indexed by diameter in thousandths of an inch
static BY_DIAMETER: Lazy<HashMap<u32, &'static [(u32, f64); 2]>> = Lazy::new(|| {
    TENSILE_AREAS
        .iter()
        .map(|(diameter, row)| (diameter_key(*diameter), row))
        .collect()
});

/// Diameter rounded to three decimals, as an integer count of thousandths.
/// Halves round away from zero, so 0.3125 and 0.5625 find their rows.
fn diameter_key(diameter_in: f64) -> u32 {
    (diameter_in * 1000.0).round() as u32
}

/// Look up the tensile stress area for a diameter and thread count.
///
/// `tpi = None` means the thread series was not specified; that is treated
/// as a miss and the error lists the thread counts available for the diameter.
///
/// # Example
///
/// ```rust
/// use joint_core::tables::tensile_area;
///
/// assert_eq!(tensile_area(0.375, Some(24)).unwrap(), 0.0878);
/// assert!(tensile_area(0.375, Some(13)).is_err());
/// ```
pub fn tensile_area(diameter_in: f64, tpi: Option<u32>) -> CalcResult<f64> {
    if !diameter_in.is_finite() || diameter_in <= 0.0 {
        return Err(CalcError::lookup_miss(TABLE_NAME, format!("diameter {}", diameter_in)));
    }

    let key = diameter_key(diameter_in);
    let row = BY_DIAMETER.get(&key).ok_or_else(|| {
        CalcError::lookup_miss(TABLE_NAME, format!("diameter {:.3} in", diameter_in))
    })?;

    let available = || {
        row.iter()
            .map(|(t, _)| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let tpi = tpi.ok_or_else(|| {
        CalcError::lookup_miss(
            TABLE_NAME,
            format!(
                "diameter {:.3} in with unspecified threads per inch (available: {})",
                diameter_in,
                available()
            ),
        )
    })?;

    let area = row
        .iter()
        .find(|(t, _)| *t == tpi)
        .map(|(_, area)| *area)
        .ok_or_else(|| {
            CalcError::lookup_miss(
                TABLE_NAME,
                format!(
                    "diameter {:.3} in, {} threads per inch (available: {})",
                    diameter_in,
                    tpi,
                    available()
                ),
            )
        })?;

    log::debug!("{}: d={:.3} in, {} tpi -> A_t={} in²", TABLE_NAME, diameter_in, tpi, area);
    Ok(area)
}

/// Thread counts tabulated for a diameter, coarse series first
pub fn available_tpi(diameter_in: f64) -> Vec<u32> {
    BY_DIAMETER
        .get(&diameter_key(diameter_in))
        .map(|row| row.iter().map(|(t, _)| *t).collect())
        .unwrap_or_default()
}

/// Every tabulated (diameter, tpi, A_t) triple, in table order
pub fn entries() -> impl Iterator<Item = (f64, u32, f64)> {
    TENSILE_AREAS
        .iter()
        .flat_map(|(diameter, row)| row.iter().map(move |(tpi, area)| (*diameter, *tpi, *area)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(tensile_area(0.375, Some(24)).unwrap(), 0.0878);
        assert_eq!(tensile_area(1.0, Some(8)).unwrap(), 0.606);
        assert_eq!(tensile_area(0.5, Some(13)).unwrap(), 0.1419);
    }

    #[test]
    fn test_every_entry_is_exact() {
        let mut count = 0;
        for (diameter, tpi, area) in entries() {
            assert_eq!(tensile_area(diameter, Some(tpi)).unwrap(), area);
            count += 1;
        }
        assert_eq!(count, 28);
    }

    #[test]
    fn test_fractional_diameters_round_to_key() {
        // 5/16, 7/16, 9/16
        assert_eq!(tensile_area(0.3125, Some(18)).unwrap(), 0.0524);
        assert_eq!(tensile_area(0.4375, Some(20)).unwrap(), 0.1187);
        assert_eq!(tensile_area(0.5625, Some(12)).unwrap(), 0.182);
    }

    #[test]
    fn test_missing_diameter() {
        let err = tensile_area(0.3, Some(16)).unwrap_err();
        assert_eq!(err.error_code(), "LOOKUP_MISS");
    }

    #[test]
    fn test_missing_tpi() {
        let err = tensile_area(0.5, Some(16)).unwrap_err();
        match err {
            CalcError::LookupMiss { table, key } => {
                assert_eq!(table, TABLE_NAME);
                assert!(key.contains("available: 13, 20"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_unspecified_tpi_is_a_miss() {
        assert!(tensile_area(0.5, None).is_err());
    }

    #[test]
    fn test_invalid_diameter() {
        assert!(tensile_area(-0.5, Some(13)).is_err());
        assert!(tensile_area(f64::NAN, Some(13)).is_err());
    }

    #[test]
    fn test_available_tpi() {
        assert_eq!(available_tpi(0.75), vec![10, 16]);
        assert!(available_tpi(0.8).is_empty());
    }
}
