//! Chart types

use crate::axis::{Axis, AxisId, AxisKind};
use crate::error::ChartError;
use crate::series::DataSeries;

/// The plot group a chart draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Clustered vertical bars
    Bar,
    /// Lines
    Line,
}

/// Chart definition
///
/// A chart holds a title, its data series, and at most one category/value
/// axis pair. Axes are created through the chart so their ids stay unique
/// within it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    kind: ChartKind,
    title: Option<String>,
    series: Vec<DataSeries>,
    axes: Vec<Axis>,
    next_axis_id: u32,
}

impl Chart {
    /// Create a new chart
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            title: None,
            series: Vec::new(),
            axes: Vec::new(),
            next_axis_id: 1,
        }
    }

    /// The plot group
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Chart title, if set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the chart title
    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = Some(title.into());
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }

    /// The chart's data series
    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }

    /// Add a category axis
    pub fn add_category_axis(&mut self) -> AxisId {
        self.add_axis(AxisKind::Category)
    }

    /// Add a value axis
    pub fn add_value_axis(&mut self) -> AxisId {
        self.add_axis(AxisKind::Value)
    }

    fn add_axis(&mut self, kind: AxisKind) -> AxisId {
        let id = AxisId(self.next_axis_id);
        self.next_axis_id += 1;
        self.axes.push(Axis::new(id, kind));
        id
    }

    /// Get an axis by id
    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id() == id)
    }

    /// Get a mutable axis by id
    pub fn axis_mut(&mut self, id: AxisId) -> Option<&mut Axis> {
        self.axes.iter_mut().find(|a| a.id() == id)
    }

    /// All axes, in creation order
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    fn name_for_errors(&self) -> String {
        self.title.clone().unwrap_or_else(|| "(untitled)".to_string())
    }

    /// Check the chart is structurally renderable
    ///
    /// Requires at least one series, a value reference on every series, and
    /// (when axes are present) exactly one category/value pair crossing each
    /// other symmetrically.
    pub fn validate(&self) -> Result<(), ChartError> {
        let name = self.name_for_errors();

        if self.series.is_empty() {
            return Err(ChartError::NoSeries(name));
        }
        for (index, series) in self.series.iter().enumerate() {
            if series.values.is_none() {
                return Err(ChartError::SeriesWithoutValues { chart: name, index });
            }
        }

        if self.axes.is_empty() {
            return Ok(());
        }

        let cat: Vec<&Axis> = self.axes.iter().filter(|a| a.kind() == AxisKind::Category).collect();
        let val: Vec<&Axis> = self.axes.iter().filter(|a| a.kind() == AxisKind::Value).collect();
        if cat.len() != 1 || val.len() != 1 {
            return Err(ChartError::AxisPairing(name));
        }

        let (cat, val) = (cat[0], val[0]);
        if cat.crosses() != Some(val.id()) || val.crosses() != Some(cat.id()) {
            return Err(ChartError::CrossesMismatch(name));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DataReference;

    fn chart_with_series() -> Chart {
        let mut chart = Chart::new(ChartKind::Bar);
        chart.set_title("Test");
        chart.add_series(
            DataSeries::new()
                .with_name("Price")
                .with_values(DataReference::range("'Sheet 1'!B2:B6")),
        );
        chart
    }

    #[test]
    fn test_validate_requires_series() {
        let chart = Chart::new(ChartKind::Line);
        assert!(matches!(chart.validate(), Err(ChartError::NoSeries(_))));
    }

    #[test]
    fn test_validate_requires_values() {
        let mut chart = Chart::new(ChartKind::Bar);
        chart.add_series(DataSeries::new().with_name("Price"));
        assert!(matches!(
            chart.validate(),
            Err(ChartError::SeriesWithoutValues { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_without_axes() {
        // Axes are optional at the model level; the pairing rule only kicks
        // in once any axis exists.
        assert!(chart_with_series().validate().is_ok());
    }

    #[test]
    fn test_symmetric_crosses() {
        let mut chart = chart_with_series();
        let ca = chart.add_category_axis();
        let va = chart.add_value_axis();

        // One-sided link is rejected
        chart.axis_mut(ca).unwrap().set_crosses(va);
        assert!(matches!(chart.validate(), Err(ChartError::CrossesMismatch(_))));

        chart.axis_mut(va).unwrap().set_crosses(ca);
        chart.validate().unwrap();
    }

    #[test]
    fn test_axis_pairing() {
        let mut chart = chart_with_series();
        chart.add_category_axis();
        assert!(matches!(chart.validate(), Err(ChartError::AxisPairing(_))));

        let mut chart = chart_with_series();
        chart.add_value_axis();
        chart.add_value_axis();
        assert!(matches!(chart.validate(), Err(ChartError::AxisPairing(_))));
    }
}
