//! Weld Group Properties (Shigley Tables 9-1 and 9-2)
//!
//! Closed-form throat area, centroid location and unit second moment for
//! fillet weld groups treated as lines. Table 9-1 covers groups loaded in
//! torsion (unit polar moment `J_u`), Table 9-2 groups loaded in bending
//! (unit moment `I_u`).
//!
//! ## Notation
//!
//! - `h` = fillet leg size
//! - `b` = horizontal weld spacing / length
//! - `d` = vertical weld spacing / length
//! - `r` = radius of a circular weld
//! - `x̄`, `ȳ` = centroid offsets from the group's lower-left reference
//!
//! Each group has its own formula; none is derived from another. The throat
//! area folds in the 0.707 throat factor (1.414 for groups made of two weld
//! lines of equal length). The unit moment is scaled by `0.707·h` later,
//! when a group is selected.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Weld dimensions (in)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeldGeometry {
    /// Fillet leg size h
    pub h: f64,
    /// Spacing dimension b
    pub b: f64,
    /// Spacing dimension d
    pub d: f64,
    /// Radius r (circular groups)
    pub r: f64,
}

impl Default for WeldGeometry {
    fn default() -> Self {
        WeldGeometry {
            h: 1.0,
            b: 1.0,
            d: 1.0,
            r: 1.0,
        }
    }
}

/// Output of a group formula, before the `0.707·h` moment scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupProperties {
    /// Throat area A (in²)
    pub area: f64,
    /// Centroid offset x̄ (in)
    pub x: f64,
    /// Centroid offset ȳ (in)
    pub y: f64,
    /// Unit second moment, J_u or I_u (in³)
    pub unit_moment: f64,
}

/// Closed-form group formula
pub type GroupFormula = fn(&WeldGeometry) -> GroupProperties;

/// Which second moment a group carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingCategory {
    /// Table 9-1, polar moment J
    Torsion,
    /// Table 9-2, moment of area I
    Bending,
}

impl LoadingCategory {
    pub fn table(&self) -> &'static str {
        match self {
            LoadingCategory::Torsion => "Table 9-1",
            LoadingCategory::Bending => "Table 9-2",
        }
    }
}

/// Shared capability of the torsion and bending group sets.
pub trait WeldGroupShape: Copy {
    /// Loading category this group set belongs to
    fn category(&self) -> LoadingCategory;

    /// Group number within its table
    fn number(&self) -> u8;

    /// Short shape sketch, e.g. `| |`
    fn shape(&self) -> &'static str;

    /// Closed-form formula for this group
    fn formula(&self) -> GroupFormula;

    /// Circular groups depend on `r` rather than `b` and `d`
    fn is_circular(&self) -> bool;

    /// Citation string, e.g. "Chapter 9, Table 9-1, Group 1"
    fn citation(&self) -> String {
        format!("Chapter 9, {}, Group {}", self.category().table(), self.number())
    }
}

// ============================================================================
// Table 9-1: torsion
// ============================================================================

/// Weld groups of Table 9-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorsionGroup {
    /// Group 1: single vertical line `|`
    Line,
    /// Group 2: two parallel vertical lines `| |`
    ParallelLines,
    /// Group 3: angle `|_`
    Angle,
    /// Group 4: channel `[`
    Channel,
    /// Group 5: closed rectangle `[]`
    Box,
    /// Group 6: circular ring `O`
    Ring,
}

impl TorsionGroup {
    pub const ALL: [TorsionGroup; 6] = [
        TorsionGroup::Line,
        TorsionGroup::ParallelLines,
        TorsionGroup::Angle,
        TorsionGroup::Channel,
        TorsionGroup::Box,
        TorsionGroup::Ring,
    ];

    pub fn from_number(number: u8) -> CalcResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.number() == number)
            .ok_or_else(|| CalcError::lookup_miss("Table 9-1", format!("group {}", number)))
    }
}

impl WeldGroupShape for TorsionGroup {
    fn category(&self) -> LoadingCategory {
        LoadingCategory::Torsion
    }

    fn number(&self) -> u8 {
        match self {
            TorsionGroup::Line => 1,
            TorsionGroup::ParallelLines => 2,
            TorsionGroup::Angle => 3,
            TorsionGroup::Channel => 4,
            TorsionGroup::Box => 5,
            TorsionGroup::Ring => 6,
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            TorsionGroup::Line => "|",
            TorsionGroup::ParallelLines => "| |",
            TorsionGroup::Angle => "|_",
            TorsionGroup::Channel => "[",
            TorsionGroup::Box => "[]",
            TorsionGroup::Ring => "O",
        }
    }

    fn formula(&self) -> GroupFormula {
        match self {
            TorsionGroup::Line => torsion_line,
            TorsionGroup::ParallelLines => torsion_parallel_lines,
            TorsionGroup::Angle => torsion_angle,
            TorsionGroup::Channel => torsion_channel,
            TorsionGroup::Box => torsion_box,
            TorsionGroup::Ring => torsion_ring,
        }
    }

    fn is_circular(&self) -> bool {
        matches!(self, TorsionGroup::Ring)
    }
}

fn torsion_line(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 0.707 * g.h * g.d,
        x: 0.0,
        y: g.d / 2.0,
        unit_moment: g.d.powi(3) / 12.0,
    }
}

fn torsion_parallel_lines(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * g.h * g.d,
        x: g.b / 2.0,
        y: g.d / 2.0,
        unit_moment: g.d * (3.0 * g.b.powi(2) + g.d.powi(2)) / 6.0,
    }
}

/// Table 9-1, row 3. J_u = [(b+d)⁴ − 6b²d²] / [12(b+d)], whole denominator.
fn torsion_angle(g: &WeldGeometry) -> GroupProperties {
    let length = g.b + g.d;
    GroupProperties {
        area: 0.707 * g.h * length,
        x: g.b.powi(2) / (2.0 * length),
        y: g.d.powi(2) / (2.0 * length),
        unit_moment: (length.powi(4) - 6.0 * g.b.powi(2) * g.d.powi(2)) / (12.0 * length),
    }
}

/// Table 9-1, row 4. Throat area is 0.707h(2b+d) over all three welds.
fn torsion_channel(g: &WeldGeometry) -> GroupProperties {
    let length = 2.0 * g.b + g.d;
    GroupProperties {
        area: 0.707 * g.h * length,
        x: g.b.powi(2) / length,
        y: g.d / 2.0,
        unit_moment: (8.0 * g.b.powi(3) + 6.0 * g.b * g.d.powi(2) + g.d.powi(3)) / 12.0
            - g.b.powi(4) / length,
    }
}

fn torsion_box(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * g.h * (g.b + g.d),
        x: g.b / 2.0,
        y: g.d / 2.0,
        unit_moment: (g.b + g.d).powi(3) / 6.0,
    }
}

fn torsion_ring(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * PI * g.h * g.r,
        x: 0.0,
        y: 0.0,
        unit_moment: 2.0 * PI * g.r.powi(3),
    }
}

// ============================================================================
// Table 9-2: bending
// ============================================================================

/// Weld groups of Table 9-2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BendingGroup {
    /// Group 1: single vertical line `|`
    Line,
    /// Group 2: two parallel vertical lines `| |`
    ParallelLines,
    /// Group 3: two parallel horizontal lines `=`
    HorizontalLines,
    /// Group 4: channel `[`
    Channel,
    /// Group 5: open box `|_|`
    OpenBox,
    /// Group 6: closed rectangle `[]`
    Box,
    /// Group 7: tee `T`
    Tee,
    /// Group 8: I-shape `I`
    IShape,
    /// Group 9: circular ring `O`
    Ring,
}

impl BendingGroup {
    pub const ALL: [BendingGroup; 9] = [
        BendingGroup::Line,
        BendingGroup::ParallelLines,
        BendingGroup::HorizontalLines,
        BendingGroup::Channel,
        BendingGroup::OpenBox,
        BendingGroup::Box,
        BendingGroup::Tee,
        BendingGroup::IShape,
        BendingGroup::Ring,
    ];

    pub fn from_number(number: u8) -> CalcResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.number() == number)
            .ok_or_else(|| CalcError::lookup_miss("Table 9-2", format!("group {}", number)))
    }
}

impl WeldGroupShape for BendingGroup {
    fn category(&self) -> LoadingCategory {
        LoadingCategory::Bending
    }

    fn number(&self) -> u8 {
        match self {
            BendingGroup::Line => 1,
            BendingGroup::ParallelLines => 2,
            BendingGroup::HorizontalLines => 3,
            BendingGroup::Channel => 4,
            BendingGroup::OpenBox => 5,
            BendingGroup::Box => 6,
            BendingGroup::Tee => 7,
            BendingGroup::IShape => 8,
            BendingGroup::Ring => 9,
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            BendingGroup::Line => "|",
            BendingGroup::ParallelLines => "| |",
            BendingGroup::HorizontalLines => "=",
            BendingGroup::Channel => "[",
            BendingGroup::OpenBox => "|_|",
            BendingGroup::Box => "[]",
            BendingGroup::Tee => "T",
            BendingGroup::IShape => "I",
            BendingGroup::Ring => "O",
        }
    }

    fn formula(&self) -> GroupFormula {
        match self {
            BendingGroup::Line => bending_line,
            BendingGroup::ParallelLines => bending_parallel_lines,
            BendingGroup::HorizontalLines => bending_horizontal_lines,
            BendingGroup::Channel => bending_channel,
            BendingGroup::OpenBox => bending_open_box,
            BendingGroup::Box => bending_box,
            BendingGroup::Tee => bending_tee,
            BendingGroup::IShape => bending_i_shape,
            BendingGroup::Ring => bending_ring,
        }
    }

    fn is_circular(&self) -> bool {
        matches!(self, BendingGroup::Ring)
    }
}

fn bending_line(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 0.707 * g.h * g.d,
        x: 0.0,
        y: g.d / 2.0,
        unit_moment: g.d.powi(3) / 12.0,
    }
}

fn bending_parallel_lines(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * g.h * g.d,
        x: g.b / 2.0,
        y: g.d / 2.0,
        unit_moment: g.d.powi(3) / 6.0,
    }
}

fn bending_horizontal_lines(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * g.h * g.b,
        x: g.b / 2.0,
        y: g.d / 2.0,
        unit_moment: g.b * g.d.powi(2) / 2.0,
    }
}

fn bending_channel(g: &WeldGeometry) -> GroupProperties {
    let length = 2.0 * g.b + g.d;
    GroupProperties {
        area: 0.707 * g.h * length,
        x: g.b.powi(2) / length,
        y: g.d / 2.0,
        unit_moment: g.d.powi(2) / 12.0 * (6.0 * g.b + g.d),
    }
}

fn bending_open_box(g: &WeldGeometry) -> GroupProperties {
    let length = g.b + 2.0 * g.d;
    let y = g.d.powi(2) / length;
    GroupProperties {
        area: 0.707 * g.h * length,
        x: g.b / 2.0,
        y,
        unit_moment: 2.0 * g.d.powi(3) / 3.0 - 2.0 * g.d.powi(2) * y + length * y.powi(2),
    }
}

fn bending_box(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * g.h * (g.b + g.d),
        x: g.b / 2.0,
        y: g.d / 2.0,
        unit_moment: g.d.powi(2) / 6.0 * (3.0 * g.b + g.d),
    }
}

fn bending_tee(g: &WeldGeometry) -> GroupProperties {
    let length = g.b + 2.0 * g.d;
    let y = g.d.powi(2) / length;
    GroupProperties {
        area: 0.707 * g.h * length,
        x: g.b / 2.0,
        y,
        unit_moment: 2.0 * g.d.powi(3) / 3.0 - 2.0 * g.d.powi(2) * y + length * y.powi(2),
    }
}

fn bending_i_shape(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * g.h * (g.b + g.d),
        x: g.b / 2.0,
        y: g.d / 2.0,
        unit_moment: g.d.powi(2) / 6.0 * (3.0 * g.b + g.d),
    }
}

fn bending_ring(g: &WeldGeometry) -> GroupProperties {
    GroupProperties {
        area: 1.414 * PI * g.h * g.r,
        x: 0.0,
        y: 0.0,
        unit_moment: PI * g.r.powi(3),
    }
}

// ============================================================================
// Group selection
// ============================================================================

/// A group from either table
///
/// ```json
/// { "loading": "torsion", "group": "parallel_lines" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "loading", content = "group", rename_all = "snake_case")]
pub enum WeldGroupKind {
    Torsion(TorsionGroup),
    Bending(BendingGroup),
}

impl WeldGroupKind {
    /// Resolve a (category, group number) pair
    pub fn from_number(category: LoadingCategory, number: u8) -> CalcResult<Self> {
        match category {
            LoadingCategory::Torsion => TorsionGroup::from_number(number).map(WeldGroupKind::Torsion),
            LoadingCategory::Bending => BendingGroup::from_number(number).map(WeldGroupKind::Bending),
        }
    }
}

impl WeldGroupShape for WeldGroupKind {
    fn category(&self) -> LoadingCategory {
        match self {
            WeldGroupKind::Torsion(g) => g.category(),
            WeldGroupKind::Bending(g) => g.category(),
        }
    }

    fn number(&self) -> u8 {
        match self {
            WeldGroupKind::Torsion(g) => g.number(),
            WeldGroupKind::Bending(g) => g.number(),
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            WeldGroupKind::Torsion(g) => g.shape(),
            WeldGroupKind::Bending(g) => g.shape(),
        }
    }

    fn formula(&self) -> GroupFormula {
        match self {
            WeldGroupKind::Torsion(g) => g.formula(),
            WeldGroupKind::Bending(g) => g.formula(),
        }
    }

    fn is_circular(&self) -> bool {
        match self {
            WeldGroupKind::Torsion(g) => g.is_circular(),
            WeldGroupKind::Bending(g) => g.is_circular(),
        }
    }
}

impl From<TorsionGroup> for WeldGroupKind {
    fn from(group: TorsionGroup) -> Self {
        WeldGroupKind::Torsion(group)
    }
}

impl From<BendingGroup> for WeldGroupKind {
    fn from(group: BendingGroup) -> Self {
        WeldGroupKind::Bending(group)
    }
}

impl std::fmt::Display for WeldGroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.citation(), self.shape())
    }
}

/// Formula lookup for a group
pub fn weld_group_formula(kind: WeldGroupKind) -> GroupFormula {
    kind.formula()
}
