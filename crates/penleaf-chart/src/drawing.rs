//! Drawing container

use crate::anchor::TwoCellAnchor;
use crate::chart::{Chart, ChartKind};
use crate::error::ChartError;

/// Identifier of a chart within its drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartId(usize);

/// A chart together with its anchor
#[derive(Debug, Clone, PartialEq)]
pub struct AnchoredChart {
    pub chart: Chart,
    pub anchor: TwoCellAnchor,
}

/// A drawing canvas holding anchored charts
///
/// Charts cannot sit directly on a sheet; they live in a drawing that the
/// sheet references. One drawing can hold any number of charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    charts: Vec<AnchoredChart>,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chart with a default two-cell anchor
    pub fn add_chart(&mut self, kind: ChartKind) -> ChartId {
        let id = ChartId(self.charts.len());
        self.charts.push(AnchoredChart {
            chart: Chart::new(kind),
            anchor: TwoCellAnchor::new(),
        });
        id
    }

    /// Get a chart by id
    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.get(id.0).map(|c| &c.chart)
    }

    /// Get a mutable chart by id
    pub fn chart_mut(&mut self, id: ChartId) -> Option<&mut Chart> {
        self.charts.get_mut(id.0).map(|c| &mut c.chart)
    }

    /// Get a mutable anchor by id
    pub fn anchor_mut(&mut self, id: ChartId) -> Option<&mut TwoCellAnchor> {
        self.charts.get_mut(id.0).map(|c| &mut c.anchor)
    }

    /// All anchored charts, in insertion order
    pub fn charts(&self) -> &[AnchoredChart] {
        &self.charts
    }

    /// Number of charts
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// True if the drawing holds no charts
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Validate every chart and anchor in the drawing
    pub fn validate(&self) -> Result<(), ChartError> {
        for anchored in &self.charts {
            anchored.chart.validate()?;
            anchored.anchor.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{DataReference, DataSeries};

    #[test]
    fn test_add_and_access() {
        let mut drawing = Drawing::new();
        let bar = drawing.add_chart(ChartKind::Bar);
        let line = drawing.add_chart(ChartKind::Line);
        assert_eq!(drawing.len(), 2);

        drawing.chart_mut(bar).unwrap().set_title("Bar Chart");
        drawing.anchor_mut(line).unwrap().move_to(1, 23);

        assert_eq!(drawing.charts()[0].chart.title(), Some("Bar Chart"));
        assert_eq!(drawing.charts()[1].anchor.from_row, 23);
    }

    #[test]
    fn test_validate_propagates() {
        let mut drawing = Drawing::new();
        let id = drawing.add_chart(ChartKind::Bar);
        // Chart with no series fails drawing validation
        assert!(drawing.validate().is_err());

        drawing.chart_mut(id).unwrap().add_series(
            DataSeries::new().with_values(DataReference::numbers(vec![1.0, 2.0])),
        );
        drawing.validate().unwrap();
    }
}
