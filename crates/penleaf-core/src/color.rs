//! Color type shared by the document and spreadsheet writers

use std::fmt;

/// A color value
///
/// `Auto` lets the consuming application pick (normally black); it is what
/// table borders use unless an explicit color is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Application-chosen color ("auto" in WordprocessingML)
    #[default]
    Auto,
    /// Explicit RGB color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Create an RGB color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Attribute value as written into WML (`auto` or a 6-digit hex string)
    pub fn to_wml_value(self) -> String {
        match self {
            Color::Auto => "auto".to_string(),
            Color::Rgb(r, g, b) => format!("{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wml_value())
    }
}
