//! Axis types

/// Identifier of an axis within its chart
///
/// Axis ids are handed out by [`Chart::add_category_axis`] and
/// [`Chart::add_value_axis`] and are what `set_crosses` links refer to.
///
/// [`Chart::add_category_axis`]: crate::Chart::add_category_axis
/// [`Chart::add_value_axis`]: crate::Chart::add_value_axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisId(pub u32);

/// What an axis carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// Category (label) axis
    Category,
    /// Value (numeric) axis
    Value,
}

/// Where an axis is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Bottom,
    Left,
    Top,
    Right,
}

impl AxisPosition {
    /// Single-letter code used in chart XML (`axPos`)
    pub fn code(self) -> &'static str {
        match self {
            AxisPosition::Bottom => "b",
            AxisPosition::Left => "l",
            AxisPosition::Top => "t",
            AxisPosition::Right => "r",
        }
    }
}

/// A chart axis
///
/// The chart format requires the category and value axes to reference each
/// other: each axis "crosses" its partner. [`Chart::validate`] rejects
/// one-sided links.
///
/// [`Chart::validate`]: crate::Chart::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    id: AxisId,
    kind: AxisKind,
    position: AxisPosition,
    crosses: Option<AxisId>,
}

impl Axis {
    pub(crate) fn new(id: AxisId, kind: AxisKind) -> Self {
        let position = match kind {
            AxisKind::Category => AxisPosition::Bottom,
            AxisKind::Value => AxisPosition::Left,
        };
        Self {
            id,
            kind,
            position,
            crosses: None,
        }
    }

    /// This axis's id
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// Category or value
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Drawing position
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    /// Set the drawing position
    pub fn set_position(&mut self, position: AxisPosition) {
        self.position = position;
    }

    /// The axis this one crosses, if linked
    pub fn crosses(&self) -> Option<AxisId> {
        self.crosses
    }

    /// Link this axis to its partner
    pub fn set_crosses(&mut self, other: AxisId) {
        self.crosses = Some(other);
    }
}
