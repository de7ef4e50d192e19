//! Data series types

/// Data series for a chart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSeries {
    /// Series name, shown in the legend
    pub name: Option<String>,
    /// Values (Y data)
    pub values: Option<DataReference>,
    /// Categories (X labels); usually set on the first series only, the
    /// rest share the same implicit category axis
    pub categories: Option<DataReference>,
}

impl DataSeries {
    /// Create an empty data series
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the series name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the value reference
    pub fn with_values(mut self, values: DataReference) -> Self {
        self.values = Some(values);
        self
    }

    /// Set the category reference
    pub fn with_categories(mut self, categories: DataReference) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// Reference to chart data
#[derive(Debug, Clone, PartialEq)]
pub enum DataReference {
    /// Sheet range reference (e.g., `'Sheet 1'!B2:B6`)
    Range(String),
    /// Literal numeric values
    Numbers(Vec<f64>),
    /// Literal string values (for categories)
    Strings(Vec<String>),
}

impl DataReference {
    /// Create a sheet range reference
    pub fn range<S: Into<String>>(reference: S) -> Self {
        DataReference::Range(reference.into())
    }

    /// Create from literal numeric values
    pub fn numbers(values: Vec<f64>) -> Self {
        DataReference::Numbers(values)
    }

    /// Create from literal string values
    pub fn strings(values: Vec<String>) -> Self {
        DataReference::Strings(values)
    }
}
