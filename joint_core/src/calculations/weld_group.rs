//! # Weld Group Calculation
//!
//! Geometric properties of a fillet weld group treated as lines: throat
//! area, centroid and the second moment of the throat (Shigley 9-3, 9-4).
//!
//! A group is chosen with [`WeldGroup::select`], which runs the Table 9-1 or
//! 9-2 formula for the current geometry and freezes the results. Torsion
//! groups yield a polar moment `J`, bending groups a moment of area `I`.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::calculations::weld_group::{GeometryOverrides, WeldGroup};
//! use joint_core::tables::{TorsionGroup, WeldGeometry};
//!
//! let mut group = WeldGroup::new(WeldGeometry::default());
//! let overrides = GeometryOverrides { h: Some(0.25), d: Some(4.0), ..Default::default() };
//! group.select(TorsionGroup::Line.into(), overrides).unwrap();
//!
//! let selection = group.selection().unwrap();
//! assert!((selection.area - 0.707).abs() < 1e-12);
//! assert_eq!(selection.citation, "Chapter 9, Table 9-1, Group 1");
//! ```

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::equations::scaled_moment;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::tables::{weld_group_formula, LoadingCategory, WeldGeometry, WeldGroupKind, WeldGroupShape};

/// Optional replacements for the stored geometry, applied before a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryOverrides {
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub d: Option<f64>,
    #[serde(default)]
    pub r: Option<f64>,
}

impl GeometryOverrides {
    fn apply(&self, geometry: &WeldGeometry) -> WeldGeometry {
        WeldGeometry {
            h: self.h.unwrap_or(geometry.h),
            b: self.b.unwrap_or(geometry.b),
            d: self.d.unwrap_or(geometry.d),
            r: self.r.unwrap_or(geometry.r),
        }
    }
}

/// Second moment of the weld throat.
///
/// `unit` is the tabulated value per unit throat; `scaled` is
/// `0.707·h·unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SecondMoment {
    /// J_u and J (torsion groups)
    Polar { unit: f64, scaled: f64 },
    /// I_u and I (bending groups)
    Bending { unit: f64, scaled: f64 },
}

impl SecondMoment {
    pub fn unit(&self) -> f64 {
        match self {
            SecondMoment::Polar { unit, .. } | SecondMoment::Bending { unit, .. } => *unit,
        }
    }

    /// The value secondary shear divides by (J or I, in⁴)
    pub fn scaled(&self) -> f64 {
        match self {
            SecondMoment::Polar { scaled, .. } | SecondMoment::Bending { scaled, .. } => *scaled,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SecondMoment::Polar { .. } => "J",
            SecondMoment::Bending { .. } => "I",
        }
    }
}

/// Frozen results of a group selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSelection {
    pub kind: WeldGroupKind,
    /// Throat area A (in²)
    pub area: f64,
    /// Centroid x̄ (in)
    pub x: f64,
    /// Centroid ȳ (in)
    pub y: f64,
    pub second_moment: SecondMoment,
    /// e.g. "Chapter 9, Table 9-1, Group 1"
    pub citation: String,
}

/// A weld group and, once selected, its properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeldGroup {
    geometry: WeldGeometry,
    selection: Option<GroupSelection>,
}

impl WeldGroup {
    pub fn new(geometry: WeldGeometry) -> Self {
        WeldGroup {
            geometry,
            selection: None,
        }
    }

    /// Apply overrides, run the group formula and store the results.
    ///
    /// Returns a `DefaultRadius` diagnostic when a circular group is computed
    /// with r = 1.0. On error the group keeps its previous geometry and
    /// selection.
    pub fn select(&mut self, kind: WeldGroupKind, overrides: GeometryOverrides) -> CalcResult<Diagnostics> {
        let geometry = overrides.apply(&self.geometry);
        validate_geometry(&geometry)?;

        let props = weld_group_formula(kind)(&geometry);
        let scaled = scaled_moment(geometry.h, props.unit_moment);
        let second_moment = match kind.category() {
            LoadingCategory::Torsion => SecondMoment::Polar {
                unit: props.unit_moment,
                scaled,
            },
            LoadingCategory::Bending => SecondMoment::Bending {
                unit: props.unit_moment,
                scaled,
            },
        };

        let mut diagnostics = Diagnostics::new();
        let citation = kind.citation();
        if kind.is_circular() && geometry.r == 1.0 {
            log::info!("{} uses the default radius r = 1.0", citation);
            diagnostics.push(Diagnostic::DefaultRadius {
                group: citation.clone(),
            });
        }

        log::debug!(
            "{}: A={} x={} y={} {}u={} {}={}",
            citation,
            props.area,
            props.x,
            props.y,
            second_moment.symbol(),
            props.unit_moment,
            second_moment.symbol(),
            scaled
        );

        self.geometry = geometry;
        self.selection = Some(GroupSelection {
            kind,
            area: props.area,
            x: props.x,
            y: props.y,
            second_moment,
            citation,
        });
        Ok(diagnostics)
    }

    pub fn geometry(&self) -> &WeldGeometry {
        &self.geometry
    }

    pub fn selection(&self) -> Option<&GroupSelection> {
        self.selection.as_ref()
    }

    /// The selection, or `MissingField` if no group was ever selected
    pub fn require_selection(&self) -> CalcResult<&GroupSelection> {
        self.selection
            .as_ref()
            .ok_or_else(|| CalcError::missing_field("weld_group"))
    }
}

fn validate_geometry(geometry: &WeldGeometry) -> CalcResult<()> {
    require_positive("h", geometry.h)?;
    require_positive("b", geometry.b)?;
    require_positive("d", geometry.d)?;
    require_positive("r", geometry.r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{BendingGroup, TorsionGroup};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn overrides(h: f64, b: f64, d: f64) -> GeometryOverrides {
        GeometryOverrides {
            h: Some(h),
            b: Some(b),
            d: Some(d),
            r: None,
        }
    }

    #[test]
    fn test_torsion_line_reference() {
        let mut group = WeldGroup::new(WeldGeometry::default());
        let diagnostics = group
            .select(
                TorsionGroup::Line.into(),
                GeometryOverrides {
                    h: Some(0.25),
                    d: Some(4.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(diagnostics.is_empty());

        let s = group.selection().unwrap();
        assert_relative_eq!(s.area, 0.707, epsilon = 1e-12);
        assert_eq!(s.x, 0.0);
        assert_relative_eq!(s.y, 2.0);
        assert_relative_eq!(s.second_moment.unit(), 64.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(
            s.second_moment.scaled(),
            0.707 * 0.25 * 64.0 / 12.0,
            epsilon = 1e-12
        );
        assert!(matches!(s.second_moment, SecondMoment::Polar { .. }));
        assert_eq!(s.citation, "Chapter 9, Table 9-1, Group 1");
    }

    #[test]
    fn test_bending_group_carries_moment_of_area() {
        let mut group = WeldGroup::new(WeldGeometry::default());
        group
            .select(BendingGroup::ParallelLines.into(), overrides(0.25, 2.0, 3.0))
            .unwrap();

        let s = group.selection().unwrap();
        assert!(matches!(s.second_moment, SecondMoment::Bending { .. }));
        assert_relative_eq!(s.second_moment.unit(), 27.0 / 6.0, epsilon = 1e-12);
        assert_eq!(s.second_moment.symbol(), "I");
        assert_eq!(s.citation, "Chapter 9, Table 9-2, Group 2");
    }

    #[test]
    fn test_overrides_persist_between_selections() {
        let mut group = WeldGroup::new(WeldGeometry::default());
        group.select(TorsionGroup::Box.into(), overrides(0.5, 2.0, 4.0)).unwrap();
        assert_eq!(group.geometry().d, 4.0);

        group
            .select(TorsionGroup::ParallelLines.into(), GeometryOverrides::default())
            .unwrap();
        let s = group.selection().unwrap();
        assert_relative_eq!(s.area, 1.414 * 0.5 * 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_radius_notice() {
        let mut group = WeldGroup::new(WeldGeometry::default());
        let diagnostics = group
            .select(TorsionGroup::Ring.into(), GeometryOverrides::default())
            .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics.iter().next(),
            Some(Diagnostic::DefaultRadius { .. })
        ));

        let diagnostics = group
            .select(
                BendingGroup::Ring.into(),
                GeometryOverrides {
                    r: Some(2.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(diagnostics.is_empty());
        let s = group.selection().unwrap();
        assert_relative_eq!(s.second_moment.unit(), PI * 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_geometry_leaves_group_unchanged() {
        let mut group = WeldGroup::new(WeldGeometry::default());
        group.select(TorsionGroup::Line.into(), overrides(0.25, 1.0, 4.0)).unwrap();
        let before = group.clone();

        let err = group
            .select(
                TorsionGroup::Line.into(),
                GeometryOverrides {
                    h: Some(-0.25),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(group, before);
    }

    #[test]
    fn test_unselected_group() {
        let group = WeldGroup::new(WeldGeometry::default());
        assert!(group.selection().is_none());
        assert_eq!(group.require_selection().unwrap_err().error_code(), "MISSING_FIELD");
    }
}
