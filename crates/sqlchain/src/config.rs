//! Render configuration.

/// How the placeholder renderer spells bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `?` for every parameter (MySQL / SQLite).
    #[default]
    Question,
    /// `$1`, `$2`, ... (Postgres).
    Dollar,
}

impl PlaceholderStyle {
    /// Placeholder text for the 1-based parameter `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Dollar => format!("${index}"),
        }
    }
}

/// Configuration for rendering statements.
///
/// The defaults reproduce the plain text output: no escaping and `?`
/// placeholders.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Placeholder style used by [`crate::StatementBuilder::build`].
    pub placeholder: PlaceholderStyle,
    /// Double embedded quotes in literals and backticks in identifiers.
    pub escape_literals: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder style.
    pub fn with_placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder = style;
        self
    }

    /// Escape quotes inside literals and identifiers.
    pub fn escape_literals(mut self) -> Self {
        self.escape_literals = true;
        self
    }
}
