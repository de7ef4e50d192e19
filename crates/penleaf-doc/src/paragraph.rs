//! Paragraphs, runs, tab stops, and fields

use penleaf_core::Distance;

/// Tab stop alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAlignment {
    Left,
    Center,
    Right,
}

impl TabAlignment {
    /// Attribute value used in WML (`w:val` of `w:tab`)
    pub fn code(self) -> &'static str {
        match self {
            TabAlignment::Left => "left",
            TabAlignment::Center => "center",
            TabAlignment::Right => "right",
        }
    }
}

/// A paragraph tab stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStop {
    /// Position from the left margin
    pub position: Distance,
    /// How text aligns at the stop
    pub alignment: TabAlignment,
}

impl TabStop {
    /// Create a tab stop
    pub fn new(position: Distance, alignment: TabAlignment) -> Self {
        Self { position, alignment }
    }
}

/// Paragraph-level properties
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParagraphProperties {
    tab_stops: Vec<TabStop>,
}

impl ParagraphProperties {
    /// Add a tab stop
    pub fn add_tab_stop(&mut self, stop: TabStop) {
        self.tab_stops.push(stop);
    }

    /// The paragraph's tab stops
    pub fn tab_stops(&self) -> &[TabStop] {
        &self.tab_stops
    }
}

/// A dynamic field, recalculated by the consuming application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The page the field lands on
    CurrentPage,
    /// Total number of pages
    NumberOfPages,
}

impl Field {
    /// Field instruction text (`w:instr`)
    pub fn instruction(self) -> &'static str {
        match self {
            Field::CurrentPage => " PAGE ",
            Field::NumberOfPages => " NUMPAGES ",
        }
    }
}

/// Text highlight color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Yellow,
    Green,
    Cyan,
    Magenta,
    Red,
    Blue,
}

impl Highlight {
    /// Attribute value used in WML (`w:highlight`)
    pub fn code(self) -> &'static str {
        match self {
            Highlight::Yellow => "yellow",
            Highlight::Green => "green",
            Highlight::Cyan => "cyan",
            Highlight::Magenta => "magenta",
            Highlight::Red => "red",
            Highlight::Blue => "blue",
        }
    }
}

/// Run-level properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunProperties {
    highlight: Option<Highlight>,
    bold: bool,
}

impl RunProperties {
    /// Highlight color, if set
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// Set the highlight color
    pub fn set_highlight(&mut self, color: Highlight) {
        self.highlight = Some(color);
    }

    /// Bold flag
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Set the bold flag
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }
}

/// One piece of run content, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    /// Literal text
    Text(String),
    /// A literal tab character (jumps to the next tab stop)
    Tab,
    /// A dynamic field
    Field(Field),
}

/// A run: a span of content sharing one set of properties
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Run {
    properties: RunProperties,
    content: Vec<RunContent>,
}

impl Run {
    /// Create an empty run
    pub fn new() -> Self {
        Self::default()
    }

    /// Run properties
    pub fn properties(&self) -> &RunProperties {
        &self.properties
    }

    /// Run properties, mutably
    pub fn properties_mut(&mut self) -> &mut RunProperties {
        &mut self.properties
    }

    /// Append literal text
    pub fn add_text<S: Into<String>>(&mut self, text: S) {
        self.content.push(RunContent::Text(text.into()));
    }

    /// Append a tab
    pub fn add_tab(&mut self) {
        self.content.push(RunContent::Tab);
    }

    /// Append a dynamic field
    pub fn add_field(&mut self, field: Field) {
        self.content.push(RunContent::Field(field));
    }

    /// The run's content, in order
    pub fn content(&self) -> &[RunContent] {
        &self.content
    }
}

/// A paragraph: properties plus a sequence of runs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    properties: ParagraphProperties,
    runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph properties
    pub fn properties(&self) -> &ParagraphProperties {
        &self.properties
    }

    /// Paragraph properties, mutably
    pub fn properties_mut(&mut self) -> &mut ParagraphProperties {
        &mut self.properties
    }

    /// Append a new run and return it
    pub fn add_run(&mut self) -> &mut Run {
        self.runs.push(Run::new());
        self.runs.last_mut().unwrap()
    }

    /// The paragraph's runs
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_content_order() {
        let mut para = Paragraph::new();
        let run = para.add_run();
        run.add_text("This is my footer");
        run.add_tab();
        run.add_text("Pg ");
        run.add_field(Field::CurrentPage);
        run.add_text(" of ");
        run.add_field(Field::NumberOfPages);

        let content = para.runs()[0].content();
        assert_eq!(content.len(), 6);
        assert_eq!(content[1], RunContent::Tab);
        assert_eq!(content[3], RunContent::Field(Field::CurrentPage));
        assert_eq!(content[5], RunContent::Field(Field::NumberOfPages));
    }

    #[test]
    fn test_tab_stop() {
        let mut para = Paragraph::new();
        para.properties_mut()
            .add_tab_stop(TabStop::new(Distance::inches(2.5), TabAlignment::Center));

        let stops = para.properties().tab_stops();
        assert_eq!(stops[0].position.to_twips(), 3600);
        assert_eq!(stops[0].alignment.code(), "center");
    }

    #[test]
    fn test_highlight() {
        let mut run = Run::new();
        run.properties_mut().set_highlight(Highlight::Yellow);
        assert_eq!(run.properties().highlight(), Some(Highlight::Yellow));
    }
}
