//! Cell values

/// The value held by a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value
    #[default]
    Empty,
    /// Numeric value (all numbers are f64, as in the file format)
    Number(f64),
    /// Text value
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Formula text, stored with a leading `=`
    Formula(String),
}

impl CellValue {
    /// Create a formula value, normalizing the leading `=`
    pub fn formula<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        if text.starts_with('=') {
            CellValue::Formula(text)
        } else {
            CellValue::Formula(format!("={}", text))
        }
    }

    /// Numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String value, if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Formula text without the leading `=`, if this is a formula
    pub fn as_formula(&self) -> Option<&str> {
        match self {
            CellValue::Formula(f) => Some(f.strip_prefix('=').unwrap_or(f)),
            _ => None,
        }
    }

    /// True if this cell holds no value
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Boolean(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::String(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_normalization() {
        assert_eq!(
            CellValue::formula("C2*B2"),
            CellValue::Formula("=C2*B2".into())
        );
        assert_eq!(
            CellValue::formula("=SUM(A1:A5)"),
            CellValue::Formula("=SUM(A1:A5)".into())
        );
        assert_eq!(CellValue::formula("C2*B2").as_formula(), Some("C2*B2"));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(CellValue::from(1.5).as_number(), Some(1.5));
        assert_eq!(CellValue::from("hi").as_string(), Some("hi"));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert!(CellValue::Empty.is_empty());
    }
}
