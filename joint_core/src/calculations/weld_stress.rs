//! # Weld Stress Calculation
//!
//! Primary and secondary shear in a selected weld group (Shigley 9-3, 9-4).
//!
//! ```text
//! τ'  = V / A
//! M   = Σ F·|r|
//! τ'' = M / J   (torsion groups)
//! τ'' = M / I   (bending groups)
//! ```
//!
//! With J and I in in⁴, τ'' is lb/in³: shear stress per inch of distance
//! from the centroid. Multiply by the distance to the point of interest to
//! get psi there.
//!
//! A zero moment sum means the loading is symmetric about the group. The
//! division is skipped and [`SecondaryShear::Symmetric`] is returned.

use serde::{Deserialize, Serialize};

use crate::calculations::weld_group::{GeometryOverrides, GroupSelection, WeldGroup};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::equations::{moment_sum, primary_shear, secondary_shear};
use crate::errors::{CalcError, CalcResult};
use crate::tables::{WeldGeometry, WeldGroupKind};

/// A force and its lever arm about the group centroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentTerm {
    /// Force (lb)
    pub force_lb: f64,
    /// Lever arm (in); only the magnitude is used
    pub distance_in: f64,
}

impl MomentTerm {
    pub fn new(force_lb: f64, distance_in: f64) -> Self {
        MomentTerm { force_lb, distance_in }
    }
}

/// Outcome of a secondary shear evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SecondaryShear {
    /// Moment M (lb·in) and τ'' = M/J or M/I (lb/in³)
    Stress { moment: f64, value: f64 },
    /// Zero moment sum; no secondary shear
    Symmetric { moment_sum: f64 },
}

impl SecondaryShear {
    /// τ'' (lb/in³), zero for a symmetric loading
    pub fn value(&self) -> f64 {
        match self {
            SecondaryShear::Stress { value, .. } => *value,
            SecondaryShear::Symmetric { .. } => 0.0,
        }
    }

    /// The report a symmetric outcome carries
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            SecondaryShear::Symmetric { moment_sum } => Some(Diagnostic::SymmetryCondition {
                moment_sum: *moment_sum,
            }),
            SecondaryShear::Stress { .. } => None,
        }
    }
}

/// Shear evaluator bound to one weld group.
#[derive(Debug, Clone)]
pub struct WeldStress<'a> {
    group: &'a WeldGroup,
    primary: Option<f64>,
    secondary: Option<SecondaryShear>,
}

impl<'a> WeldStress<'a> {
    pub fn new(group: &'a WeldGroup) -> Self {
        WeldStress {
            group,
            primary: None,
            secondary: None,
        }
    }

    fn selection(&self) -> CalcResult<&'a GroupSelection> {
        self.group.require_selection()
    }

    /// Direct shear τ' = V/A (psi)
    pub fn primary_shear(&mut self, force_lb: f64) -> CalcResult<f64> {
        let selection = self.selection()?;
        if !force_lb.is_finite() {
            return Err(CalcError::invalid_input("force_lb", force_lb.to_string(), "Must be a finite number"));
        }

        let tau = primary_shear(force_lb, selection.area);
        self.primary = Some(tau);
        Ok(tau)
    }

    /// Secondary shear from the moment of the given forces about the centroid.
    pub fn secondary_shear(&mut self, terms: &[MomentTerm]) -> CalcResult<SecondaryShear> {
        let selection = self.selection()?;
        let moment = moment_sum(terms.iter().map(|t| (t.force_lb, t.distance_in)));
        if !moment.is_finite() {
            return Err(CalcError::invalid_input("moment", moment.to_string(), "Must be a finite number"));
        }

        let outcome = if moment == 0.0 {
            log::warn!(
                "{}: moment sum is zero, loading is symmetric; secondary shear skipped",
                selection.citation
            );
            SecondaryShear::Symmetric { moment_sum: moment }
        } else {
            SecondaryShear::Stress {
                moment,
                value: secondary_shear(moment, selection.second_moment.scaled()),
            }
        };

        self.secondary = Some(outcome);
        Ok(outcome)
    }

    pub fn primary(&self) -> Option<f64> {
        self.primary
    }

    pub fn secondary(&self) -> Option<SecondaryShear> {
        self.secondary
    }
}

/// Input for a weld group item in a project.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Bracket weld",
///   "group": { "loading": "torsion", "group": "parallel_lines" },
///   "geometry": { "h": 0.375, "b": 2.0, "d": 4.0, "r": 1.0 },
///   "shear_force_lb": 5000.0,
///   "moments": [{ "force_lb": 5000.0, "distance_in": 6.0 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeldGroupInput {
    pub label: String,

    pub group: WeldGroupKind,

    #[serde(default)]
    pub geometry: WeldGeometry,

    /// Shear force through the centroid (lb)
    #[serde(default)]
    pub shear_force_lb: Option<f64>,

    /// Forces contributing to the moment about the centroid
    #[serde(default)]
    pub moments: Vec<MomentTerm>,
}

/// Results from a weld group item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeldGroupResult {
    pub selection: GroupSelection,
    pub primary_shear_psi: Option<f64>,
    pub secondary_shear: Option<SecondaryShear>,
    pub diagnostics: Diagnostics,
}

pub fn calculate(input: &WeldGroupInput) -> CalcResult<WeldGroupResult> {
    let mut group = WeldGroup::new(input.geometry);
    let mut diagnostics = group.select(input.group, GeometryOverrides::default())?;

    let mut stress = WeldStress::new(&group);
    if let Some(force) = input.shear_force_lb {
        stress.primary_shear(force)?;
    }
    if !input.moments.is_empty() {
        let outcome = stress.secondary_shear(&input.moments)?;
        if let Some(diagnostic) = outcome.diagnostic() {
            diagnostics.push(diagnostic);
        }
    }

    let primary_shear_psi = stress.primary();
    let secondary_shear = stress.secondary();
    let selection = group.require_selection()?.clone();

    Ok(WeldGroupResult {
        selection,
        primary_shear_psi,
        secondary_shear,
        diagnostics,
    })
}
